//! Placement events and sinks for observing populate runs.
//!
//! The runner emits exactly one [`Placement`] per accepted point through a
//! [`PlacementSink`]. The core makes no assumption about what the sink does
//! with it (instantiation, rendering, logging).
use glam::Vec2;

use crate::populate::CategoryId;

/// A placed instance of a category at a specific position.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// Category identifier for this placement.
    pub category: CategoryId,
    /// World position of the placement.
    pub position: Vec2,
}

impl Placement {
    pub fn new(category: impl Into<CategoryId>, position: Vec2) -> Self {
        Self {
            category: category.into(),
            position,
        }
    }
}

/// A generic sink that accepts [`Placement`]s.
pub trait PlacementSink {
    fn place(&mut self, placement: Placement);
}

/// A no-op placement sink.
impl PlacementSink for () {
    #[inline]
    fn place(&mut self, _placement: Placement) {}
}

/// A placement sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(Placement),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(Placement),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> PlacementSink for FnSink<F>
where
    F: FnMut(Placement),
{
    #[inline]
    fn place(&mut self, placement: Placement) {
        (self.f)(placement);
    }
}

/// A placement sink that collects all placements in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    placements: Vec<Placement>,
}

impl VecSink {
    pub fn new() -> Self {
        Self {
            placements: Vec::new(),
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            placements: Vec::with_capacity(cap),
        }
    }

    pub fn into_inner(self) -> Vec<Placement> {
        self.placements
    }

    pub fn as_slice(&self) -> &[Placement] {
        &self.placements
    }

    pub fn clear(&mut self) {
        self.placements.clear();
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl PlacementSink for VecSink {
    #[inline]
    fn place(&mut self, placement: Placement) {
        self.placements.push(placement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_constructor_sets_fields() {
        let placement = Placement::new("tree", Vec2::new(1.0, 2.0));
        assert_eq!(placement.category, "tree");
        assert_eq!(placement.position, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn vec_sink_collects_placements() {
        let mut sink = VecSink::with_capacity(2);
        assert!(sink.is_empty());

        sink.place(Placement::new("rock", Vec2::ZERO));
        sink.place(Placement::new("stick", Vec2::ONE));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.as_slice()[0].category, "rock");

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn fn_sink_invokes_callback() {
        let mut count = 0;
        let mut sink = FnSink::new(|_placement| {
            count += 1;
        });
        sink.place(Placement::new("tree", Vec2::ZERO));
        assert_eq!(count, 1);
    }
}
