//! Sampling strategies for generating candidate positions in a 2D region.
//!
//! This module defines the [`PointSampling`] trait and the Poisson disk
//! strategy used by the populate pipeline to propose positions, plus the
//! uniform-draw helpers shared by samplers and the runner.
use mint::Vector2;
use rand::RngCore;

use crate::error::Result;

pub mod poisson_disk;

pub use poisson_disk::PoissonDiskSampling;

/// Trait for point sampling over a `[0, width) x [0, height)` region.
pub trait PointSampling: Send + Sync {
    fn generate(
        &self,
        region_extent: Vector2<f32>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Vector2<f32>>>;
}

/// Generate a random float in the range [0, 1].
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f32 {
    (rng.next_u32() as f32) / ((u32::MAX as f32) + 1.0)
}

/// Uniform draw from `[a, b)`.
#[inline]
pub(crate) fn rand_range(rng: &mut dyn RngCore, a: f32, b: f32) -> f32 {
    a + rand01(rng) * (b - a)
}

/// Uniform index draw from `[0, n)`. Requires `n > 0`.
#[inline]
pub(crate) fn rand_index(rng: &mut dyn RngCore, n: usize) -> usize {
    debug_assert!(n > 0, "rand_index requires a non-empty range");
    ((rand01(rng) * n as f32) as usize).min(n - 1)
}
