#![allow(clippy::print_stdout, clippy::print_stderr, clippy::dbg_macro)] // ok to use in tests, benches & build scripts

use fieldtrace::Field;
use glam::Vec3;
use tiny_bench::BenchmarkConfig;

const RESOLUTION: usize = 64;

fn camera_rays() -> Vec<fieldtrace::Ray3> {
    let eye = Vec3::new(0.0, 1.5, 6.0);
    (0..RESOLUTION * RESOLUTION)
        .filter_map(|i| {
            let u = (i % RESOLUTION) as f32 / (RESOLUTION - 1) as f32 * 2.0 - 1.0;
            let v = (i / RESOLUTION) as f32 / (RESOLUTION - 1) as f32 * 2.0 - 1.0;
            let target = Vec3::new(3.0 * u, 3.0 * v, 0.0);
            fieldtrace::Ray3::from_points(eye, target)
        })
        .collect()
}

fn grid_points() -> Vec<Vec3> {
    (0..RESOLUTION * RESOLUTION)
        .map(|i| {
            let u = (i % RESOLUTION) as f32 / RESOLUTION as f32;
            let v = (i / RESOLUTION) as f32 / RESOLUTION as f32;
            Vec3::new(6.0 * u - 3.0, 0.3, 6.0 * v - 3.0)
        })
        .collect()
}

pub fn main() {
    let scene: Vec<(&str, fieldtrace::Shape)> = vec![
        ("torus", fieldtrace::Torus::new(2.0, 0.5).unwrap().into()),
        ("tangle", fieldtrace::Tangle::new(1.0).unwrap().into()),
        (
            "mobius",
            fieldtrace::TwistedBand::mobius(2.0, 0.6, 0.1).unwrap().into(),
        ),
        (
            "rounded_cube",
            fieldtrace::RoundedCube::new(Vec3::splat(1.5), -0.5)
                .unwrap()
                .into(),
        ),
    ];

    let rays = camera_rays();
    let points = grid_points();
    let trace_options = fieldtrace::TraceOptions::default();
    let projection_options = fieldtrace::ProjectionOptions::default();

    for (name, shape) in &scene {
        let hits = fieldtrace::march_many(shape, &rays, &trace_options);
        eprintln!(
            "{name} ({:?}): {} of {} rays hit",
            shape.kind(),
            hits.iter().filter(|h| h.is_hit()).count(),
            rays.len()
        );
    }

    let bench_cfg = BenchmarkConfig {
        num_samples: 10,
        ..Default::default()
    };
    for (name, shape) in &scene {
        tiny_bench::bench_with_configuration_labeled(&format!("march_{name}"), &bench_cfg, || {
            fieldtrace::march_many(shape, &rays, &trace_options)
        });
        tiny_bench::bench_with_configuration_labeled(
            &format!("signed_distance_{name}"),
            &bench_cfg,
            || {
                points
                    .iter()
                    .map(|&p| fieldtrace::signed_distance(p, shape, &projection_options))
                    .sum::<f32>()
            },
        );
    }
}
