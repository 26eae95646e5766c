mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use map_populate::populate::plan::{
    AgentLayer, DecorLayer, GroundLayer, PopulateConfig, PopulatePlan, Volumes,
};
use map_populate::populate::runner::run_plan;
use map_populate::populate::selection::WeightedCategory;
use map_populate::populate::volume::Aabb;
use rand::rngs::StdRng;
use rand::SeedableRng;

const REGION_SIZES: [f32; 3] = [256.0, 512.0, 1024.0];

fn full_plan() -> PopulatePlan {
    PopulatePlan::new()
        .with_decor(DecorLayer::new(
            5.0,
            vec![
                WeightedCategory::new("tree", 0.3),
                WeightedCategory::new("iron_vein", 0.2),
                WeightedCategory::new("gold_vein", 0.1),
            ],
            vec!["lake_small".into(), "lake_wide".into(), "lake_deep".into()],
            "apple",
        ))
        .with_ground(GroundLayer::new(3.0, "rock", 0.4, "stick"))
        .with_agents(AgentLayer::new(12.0, "enemy"))
}

fn populate_run_benches(c: &mut Criterion) {
    let plan = full_plan();

    let mut group = c.benchmark_group("populate/run_plan");

    for &size in &REGION_SIZES {
        let config = PopulateConfig::new(Vec2::new(size, size));
        let volumes = Volumes::new()
            .with_blocked(vec![Aabb::new(
                Vec2::new(size / 2.0, size / 2.0),
                Vec2::new(size / 10.0, size / 10.0),
            )])
            .with_lakes(vec![Aabb::new(
                Vec2::new(size / 4.0, size / 4.0),
                Vec2::new(size / 12.0, size / 12.0),
            )])
            .with_safe(vec![Aabb::new(
                Vec2::new(size / 2.0, size / 2.0),
                Vec2::new(size / 3.0, size / 3.0),
            )]);

        let mut rng_est = StdRng::seed_from_u64(0xF00Du64 ^ (size as u64));
        let expected = run_plan(&plan, &config, &volumes, &mut rng_est, &mut ())
            .expect("valid plan")
            .points_sampled;
        group.throughput(common::elements_throughput(expected));

        let mut rng = StdRng::seed_from_u64(0xFEEDu64 ^ (size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let report =
                    run_plan(&plan, &config, &volumes, &mut rng, &mut ()).expect("valid plan");
                black_box(report.placements.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = populate_run_benches
}
criterion_main!(benches);
