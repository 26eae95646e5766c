//! Layer and run configuration for populating a region.
use glam::Vec2;

use crate::error::{Error, Result};
use crate::populate::selection::WeightedCategory;
use crate::populate::volume::Aabb;
use crate::populate::CategoryId;

/// Region-wide settings shared by all layers.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulateConfig {
    /// Size of the populated region in world units.
    pub region_extent: Vec2,
    /// Inset from the region boundary; points with a coordinate outside
    /// `[margin, extent - margin]` (inclusive) are rejected.
    pub margin: f32,
    /// Candidate attempts per spawn point in each sampler run.
    pub max_attempts: u32,
}

impl PopulateConfig {
    /// Creates a new [`PopulateConfig`] with the specified region extent.
    pub fn new(region_extent: Vec2) -> Self {
        Self {
            region_extent,
            margin: 1.0,
            max_attempts: 30,
        }
    }

    /// Sets the margin inset.
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the sampler attempt count.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if !self.region_extent.x.is_finite() || !self.region_extent.y.is_finite() {
            return Err(Error::InvalidConfig(
                "region_extent must be finite in both components".into(),
            ));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(Error::InvalidConfig("margin must be >= 0".into()));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidConfig("max_attempts must be > 0".into()));
        }

        Ok(())
    }
}

/// Primary decoration layer: weighted categories with a lake-resolved
/// fallthrough bucket.
///
/// Each point that survives the margin and blocked-volume filters draws one
/// uniform value against `weighted`. A draw past the total weight falls
/// through: a point outside every lake volume becomes a uniformly chosen lake
/// variant, a point inside one becomes `fallback`.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DecorLayer {
    /// Minimum spacing between decor points.
    pub radius: f32,
    /// Priority-ordered category weights.
    pub weighted: Vec<WeightedCategory>,
    /// Variants drawn uniformly when a fallthrough point is outside all lakes.
    pub lake_variants: Vec<CategoryId>,
    /// Placed when a fallthrough point lies inside a lake volume.
    pub fallback: CategoryId,
    /// Extra size added to each axis of the sampling region only; the margin
    /// filter still applies against the configured region.
    pub region_pad: f32,
}

impl DecorLayer {
    pub fn new(
        radius: f32,
        weighted: Vec<WeightedCategory>,
        lake_variants: Vec<CategoryId>,
        fallback: impl Into<CategoryId>,
    ) -> Self {
        Self {
            radius,
            weighted,
            lake_variants,
            fallback: fallback.into(),
            region_pad: 0.0,
        }
    }

    /// Sets the sampling region pad.
    pub fn with_region_pad(mut self, region_pad: f32) -> Self {
        self.region_pad = region_pad;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.weighted.iter().any(|w| !w.weight.is_finite() || w.weight < 0.0) {
            return Err(Error::InvalidConfig(
                "decor weights must be finite and >= 0".into(),
            ));
        }

        // The fallthrough bucket is reachable whenever the weights leave a
        // remainder below 1, and it needs at least one lake variant then.
        let total: f32 = self.weighted.iter().map(|w| w.weight).sum();
        if total < 1.0 && self.lake_variants.is_empty() {
            return Err(Error::InvalidConfig(
                "lake_variants must not be empty while decor weights sum below 1".into(),
            ));
        }

        Ok(())
    }
}

/// Ground clutter layer: one binary weighted choice between two categories.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroundLayer {
    /// Minimum spacing between ground points.
    pub radius: f32,
    /// Category chosen when the draw falls below `primary_chance`.
    pub primary: CategoryId,
    /// Threshold for the primary category.
    pub primary_chance: f32,
    /// Category chosen otherwise.
    pub secondary: CategoryId,
}

impl GroundLayer {
    pub fn new(
        radius: f32,
        primary: impl Into<CategoryId>,
        primary_chance: f32,
        secondary: impl Into<CategoryId>,
    ) -> Self {
        Self {
            radius,
            primary: primary.into(),
            primary_chance,
            secondary: secondary.into(),
        }
    }
}

/// Mobile agent layer: placement requires the point to lie inside the safe
/// volume set.
#[non_exhaustive]
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentLayer {
    /// Minimum spacing between agent points.
    pub radius: f32,
    /// Category placed for each accepted point.
    pub category: CategoryId,
}

impl AgentLayer {
    pub fn new(radius: f32, category: impl Into<CategoryId>) -> Self {
        Self {
            radius,
            category: category.into(),
        }
    }
}

/// Exclusion volume sets supplied by the host per run.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volumes {
    /// Placement is forbidden inside these (walls and other obstructions).
    pub blocked: Vec<Aabb>,
    /// Lake footprints; a fallthrough decor point inside one becomes the
    /// fallback category instead of a lake variant.
    pub lakes: Vec<Aabb>,
    /// Agents are only placed inside these.
    pub safe: Vec<Aabb>,
}

impl Volumes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the blocked volume set.
    pub fn with_blocked(mut self, blocked: Vec<Aabb>) -> Self {
        self.blocked = blocked;
        self
    }

    /// Sets the lake volume set.
    pub fn with_lakes(mut self, lakes: Vec<Aabb>) -> Self {
        self.lakes = lakes;
        self
    }

    /// Sets the safe volume set.
    pub fn with_safe(mut self, safe: Vec<Aabb>) -> Self {
        self.safe = safe;
        self
    }
}

/// A populate plan composed of up to one layer of each purpose.
///
/// Each present layer runs its own independent sampler invocation.
#[derive(Debug, Clone, Default)]
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PopulatePlan {
    pub decor: Option<DecorLayer>,
    pub ground: Option<GroundLayer>,
    pub agents: Option<AgentLayer>,
}

impl PopulatePlan {
    /// Create a new empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the decor layer.
    pub fn with_decor(mut self, decor: DecorLayer) -> Self {
        self.decor = Some(decor);
        self
    }

    /// Sets the ground layer.
    pub fn with_ground(mut self, ground: GroundLayer) -> Self {
        self.ground = Some(ground);
        self
    }

    /// Sets the agent layer.
    pub fn with_agents(mut self, agents: AgentLayer) -> Self {
        self.agents = Some(agents);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(decor) = &self.decor {
            decor.validate()?;
        }

        Ok(())
    }
}
