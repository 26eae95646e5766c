//! High-level runner executing populate plans over independently sampled
//! point sets.
use glam::Vec2;
use rand::RngCore;
use tracing::info;

use crate::error::Result;
use crate::populate::events::{Placement, PlacementSink};
use crate::populate::plan::{
    AgentLayer, DecorLayer, GroundLayer, PopulateConfig, PopulatePlan, Volumes,
};
use crate::populate::selection::pick_by_threshold;
use crate::populate::volume::is_outside_all;
use crate::sampling::{rand01, rand_index, PointSampling, PoissonDiskSampling};

/// Result of running a populate plan.
#[non_exhaustive]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// Placements produced by the run.
    pub placements: Vec<Placement>,
    /// Total points produced by the samplers.
    pub points_sampled: usize,
    /// Points rejected by the margin, blocked-volume, or safe-zone filters.
    pub points_rejected: usize,
}

impl RunReport {
    /// Creates a new empty [`RunReport`].
    pub fn new() -> Self {
        Self::default()
    }
}

/// Runs populate plans against a fixed configuration and volume sets.
pub struct Populator<'a> {
    /// Configuration applied to every run.
    pub config: PopulateConfig,
    /// Exclusion volume sets supplied by the host.
    pub volumes: &'a Volumes,
}

impl<'a> Populator<'a> {
    pub fn try_new(config: PopulateConfig, volumes: &'a Volumes) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, volumes })
    }

    /// Runs the given plan, returning the report.
    pub fn run(&mut self, plan: &PopulatePlan, rng: &mut impl RngCore) -> Result<RunReport> {
        run_plan(plan, &self.config, self.volumes, rng, &mut ())
    }

    /// Runs the given plan, forwarding each placement to the sink.
    pub fn run_with_sink(
        &mut self,
        plan: &PopulatePlan,
        rng: &mut impl RngCore,
        sink: &mut dyn PlacementSink,
    ) -> Result<RunReport> {
        run_plan(plan, &self.config, self.volumes, rng, sink)
    }
}

/// Runs a populate plan: one independent sampler invocation per present
/// layer, then the per-layer placement policy over each point.
pub fn run_plan<R: RngCore>(
    plan: &PopulatePlan,
    config: &PopulateConfig,
    volumes: &Volumes,
    rng: &mut R,
    sink: &mut dyn PlacementSink,
) -> Result<RunReport> {
    config.validate()?;
    plan.validate()?;

    let mut report = RunReport::new();

    if let Some(decor) = &plan.decor {
        run_decor_layer(decor, config, volumes, rng, sink, &mut report)?;
    }
    if let Some(ground) = &plan.ground {
        run_ground_layer(ground, config, volumes, rng, sink, &mut report)?;
    }
    if let Some(agents) = &plan.agents {
        run_agent_layer(agents, config, volumes, rng, sink, &mut report)?;
    }

    info!(
        "Populate run finished: {} placements from {} sampled points.",
        report.placements.len(),
        report.points_sampled
    );

    Ok(report)
}

fn sample_layer<R: RngCore>(
    radius: f32,
    extent: Vec2,
    max_attempts: u32,
    rng: &mut R,
) -> Result<Vec<Vec2>> {
    let sampling = PoissonDiskSampling::new(radius).with_max_attempts(max_attempts);
    let points = sampling.generate(extent.into(), rng)?;
    Ok(points.into_iter().map(Vec2::from).collect())
}

fn in_margin(point: Vec2, config: &PopulateConfig) -> bool {
    let low = config.margin;
    let high = config.region_extent - Vec2::splat(config.margin);
    point.x >= low && point.x <= high.x && point.y >= low && point.y <= high.y
}

fn emit(sink: &mut dyn PlacementSink, report: &mut RunReport, placement: Placement) {
    sink.place(placement.clone());
    report.placements.push(placement);
}

fn run_decor_layer<R: RngCore>(
    layer: &DecorLayer,
    config: &PopulateConfig,
    volumes: &Volumes,
    rng: &mut R,
    sink: &mut dyn PlacementSink,
    report: &mut RunReport,
) -> Result<()> {
    let extent = config.region_extent + Vec2::splat(layer.region_pad);
    let points = sample_layer(layer.radius, extent, config.max_attempts, rng)?;
    report.points_sampled += points.len();

    let before = report.placements.len();
    for point in points {
        if !in_margin(point, config) || !is_outside_all(point, &volumes.blocked) {
            report.points_rejected += 1;
            continue;
        }

        let v = rand01(rng);
        let category = match pick_by_threshold(&layer.weighted, v) {
            Some(category) => category.clone(),
            None if is_outside_all(point, &volumes.lakes) && !layer.lake_variants.is_empty() => {
                layer.lake_variants[rand_index(rng, layer.lake_variants.len())].clone()
            }
            None => layer.fallback.clone(),
        };
        emit(sink, report, Placement::new(category, point));
    }

    info!(
        "Decor layer placed {} entities (radius {}).",
        report.placements.len() - before,
        layer.radius
    );

    Ok(())
}

fn run_ground_layer<R: RngCore>(
    layer: &GroundLayer,
    config: &PopulateConfig,
    volumes: &Volumes,
    rng: &mut R,
    sink: &mut dyn PlacementSink,
    report: &mut RunReport,
) -> Result<()> {
    let points = sample_layer(layer.radius, config.region_extent, config.max_attempts, rng)?;
    report.points_sampled += points.len();

    let before = report.placements.len();
    for point in points {
        if !in_margin(point, config) || !is_outside_all(point, &volumes.blocked) {
            report.points_rejected += 1;
            continue;
        }

        let category = if rand01(rng) < layer.primary_chance {
            layer.primary.clone()
        } else {
            layer.secondary.clone()
        };
        emit(sink, report, Placement::new(category, point));
    }

    info!(
        "Ground layer placed {} entities (radius {}).",
        report.placements.len() - before,
        layer.radius
    );

    Ok(())
}

fn run_agent_layer<R: RngCore>(
    layer: &AgentLayer,
    config: &PopulateConfig,
    volumes: &Volumes,
    rng: &mut R,
    sink: &mut dyn PlacementSink,
    report: &mut RunReport,
) -> Result<()> {
    let points = sample_layer(layer.radius, config.region_extent, config.max_attempts, rng)?;
    report.points_sampled += points.len();

    let before = report.placements.len();
    for point in points {
        // Inverted sense: presence inside the safe set is required.
        if !in_margin(point, config) || is_outside_all(point, &volumes.safe) {
            report.points_rejected += 1;
            continue;
        }

        emit(sink, report, Placement::new(layer.category.clone(), point));
    }

    info!(
        "Agent layer placed {} entities (radius {}).",
        report.placements.len() - before,
        layer.radius
    );

    Ok(())
}
