//! Poisson disk point sampling accelerated by a uniform grid.
use std::f32::consts::{PI, SQRT_2};

use glam::Vec2;
use mint::Vector2;
use rand::RngCore;

use crate::error::{Error, Result};
use crate::sampling::{rand01, rand_index, rand_range, PointSampling};

/// Default candidate attempts per spawn point.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;

/// Poisson disk sampling over `[0, width) x [0, height)`.
///
/// Produces an approximate blue-noise point set whose pairwise distance is at
/// least `radius`, via active-list dart throwing: a random active point spawns
/// candidates in the annulus `[radius, 2 * radius)` until one is accepted or
/// `max_attempts` is reached, at which point it is retired. A grid with cell
/// size `radius / sqrt(2)` holds at most one point per cell, so each validity
/// check only scans a 5x5 cell neighborhood.
#[derive(Debug, Clone)]
pub struct PoissonDiskSampling {
    /// Minimum distance between samples in world units.
    pub radius: f32,
    /// Candidate attempts per spawn point before it is retired.
    pub max_attempts: u32,
}

impl PoissonDiskSampling {
    /// Create a new PoissonDiskSampling with specified radius.
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Sets the number of candidate attempts per spawn point.
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl PointSampling for PoissonDiskSampling {
    fn generate(
        &self,
        region_extent: Vector2<f32>,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<Vector2<f32>>> {
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "sampling radius must be a positive finite number, got {}",
                self.radius
            )));
        }
        if self.max_attempts == 0 {
            return Err(Error::InvalidParameter(
                "max_attempts must be > 0".to_owned(),
            ));
        }

        let mut sampler = match GridSampler::new(self.radius, Vec2::from(region_extent)) {
            Some(sampler) => sampler,
            None => return Ok(Vec::new()),
        };
        Ok(sampler
            .generate(self.max_attempts, rng)
            .into_iter()
            .map(Into::into)
            .collect())
    }
}

struct GridSampler {
    radius: f32,
    radius_squared: f32,
    cell_size: f32,
    grid_width: usize,
    grid_height: usize,
    /// Index into the accepted-point list of the single point in each cell.
    grid: Vec<Option<usize>>,
    region: Vec2,
}

impl GridSampler {
    /// Returns `None` for a degenerate region, which samples to nothing.
    fn new(radius: f32, region: Vec2) -> Option<Self> {
        debug_assert!(radius > 0.0);
        if !(region.x > 0.0 && region.y > 0.0) {
            return None;
        }

        let cell_size = radius / SQRT_2;
        let grid_width = (region.x / cell_size).ceil() as usize;
        let grid_height = (region.y / cell_size).ceil() as usize;
        if grid_width == 0 || grid_height == 0 {
            return None;
        }

        Some(Self {
            radius,
            radius_squared: radius * radius,
            cell_size,
            grid_width,
            grid_height,
            grid: vec![None; grid_width * grid_height],
            region,
        })
    }

    #[inline]
    fn cell_of(&self, point: Vec2) -> (usize, usize) {
        let x = ((point.x / self.cell_size) as usize).min(self.grid_width - 1);
        let y = ((point.y / self.cell_size) as usize).min(self.grid_height - 1);
        (x, y)
    }

    fn is_valid(&self, candidate: Vec2, points: &[Vec2]) -> bool {
        if candidate.x < 0.0
            || candidate.x >= self.region.x
            || candidate.y < 0.0
            || candidate.y >= self.region.y
        {
            return false;
        }

        let (cx, cy) = self.cell_of(candidate);
        let start_x = cx.saturating_sub(2);
        let end_x = (cx + 2).min(self.grid_width - 1);
        let start_y = cy.saturating_sub(2);
        let end_y = (cy + 2).min(self.grid_height - 1);

        for y in start_y..=end_y {
            for x in start_x..=end_x {
                if let Some(index) = self.grid[y * self.grid_width + x] {
                    if candidate.distance_squared(points[index]) < self.radius_squared {
                        return false;
                    }
                }
            }
        }

        true
    }

    fn record(&mut self, point: Vec2, index: usize) {
        let (x, y) = self.cell_of(point);
        self.grid[y * self.grid_width + x] = Some(index);
    }

    fn generate(&mut self, max_attempts: u32, rng: &mut dyn RngCore) -> Vec<Vec2> {
        let seed = self.region / 2.0;
        let mut points = vec![seed];
        let mut active = vec![seed];
        self.record(seed, 0);

        while !active.is_empty() {
            let spawn_index = rand_index(rng, active.len());
            let spawn_center = active[spawn_index];
            let mut accepted = false;

            for _ in 0..max_attempts {
                let angle = rand01(rng) * 2.0 * PI;
                let distance = rand_range(rng, self.radius, 2.0 * self.radius);
                let candidate = spawn_center + Vec2::new(angle.sin(), angle.cos()) * distance;

                if self.is_valid(candidate, &points) {
                    self.record(candidate, points.len());
                    points.push(candidate);
                    active.push(candidate);
                    accepted = true;
                    break;
                }
            }

            if !accepted {
                active.swap_remove(spawn_index);
            }
        }

        points
    }
}
