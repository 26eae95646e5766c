//! Population pipeline for filtering sampled points and assigning entity categories.
pub mod events;
pub mod plan;
pub mod runner;
pub mod selection;
pub mod volume;

/// Identifier of a placeable entity category, e.g. "tree" or "iron_vein".
pub type CategoryId = String;
