//! Axis-aligned exclusion volumes tested by inclusive containment.
use glam::Vec2;

/// Axis-aligned box given by center and half extents.
///
/// Degenerate extents are ordinary boxes: a zero-extent box contains exactly
/// its center, a negative-extent box contains nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aabb {
    /// Center of the box in world units.
    pub center: Vec2,
    /// Half extents of the box on each axis.
    pub half_extent: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half_extent: Vec2) -> Self {
        Self {
            center,
            half_extent,
        }
    }

    /// Inclusive containment test on both axes.
    pub fn contains(&self, point: Vec2) -> bool {
        let min = self.center - self.half_extent;
        let max = self.center + self.half_extent;
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

/// True iff `point` is contained by no volume in the set.
///
/// Vacuously true for an empty set.
pub fn is_outside_all(point: Vec2, volumes: &[Aabb]) -> bool {
    volumes.iter().all(|v| !v.contains(point))
}
