#![forbid(unsafe_code)]
//! map_populate: Blue-noise map population with Poisson disk sampling and
//! weighted category placement.
//!
//! Modules:
//! - sampling: blue-noise point generation (Poisson disk over a uniform acceleration grid)
//! - populate: layers, exclusion volumes, weighted selection, runner, placement sinks
pub mod error;
pub mod populate;
pub mod sampling;

/// Convenient re-exports for common types. Import with `use map_populate::prelude::*;`.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::populate::events::{FnSink, Placement, PlacementSink, VecSink};
    pub use crate::populate::plan::{
        AgentLayer, DecorLayer, GroundLayer, PopulateConfig, PopulatePlan, Volumes,
    };
    pub use crate::populate::runner::{run_plan, Populator, RunReport};
    pub use crate::populate::selection::{pick_by_threshold, WeightedCategory};
    pub use crate::populate::volume::{is_outside_all, Aabb};
    pub use crate::populate::CategoryId;
    pub use crate::sampling::{PointSampling, PoissonDiskSampling};
}
