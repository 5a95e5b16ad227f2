#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the statistic pipeline.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vizstat::prelude::*;

fn synthetic(size: usize) -> Vec<f32> {
    (0..size)
        .map(|i| {
            let x = i as f32 / size as f32;
            // Create bell-curve-like distribution
            (x * std::f32::consts::TAU).sin() * 50.0 + 50.0 + (i % 17) as f32
        })
        .collect()
}

fn histogram_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stat_histogram");

    for size in [100, 1_000, 10_000, 100_000] {
        let data = synthetic(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut aes = Aesthetics::new().with_x(black_box(data.clone()));
                apply_statistics(
                    &[Statistic::histogram(), Statistic::x_ticks()],
                    &ScaleMap::new(),
                    &mut aes,
                )
                .unwrap();
                aes
            });
        });
    }

    group.finish();
}

fn rectbin_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("stat_rectbin");

    let mut scales = ScaleMap::new();
    scales.insert(Channel::Color, Scale::ContinuousColor(ContinuousColorScale::default()));

    for size in [1_000, 10_000, 100_000] {
        let x = synthetic(size);
        let y: Vec<f32> = synthetic(size).into_iter().rev().collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut aes =
                    Aesthetics::new().with_x(black_box(x.clone())).with_y(black_box(y.clone()));
                apply_statistics(&[Statistic::rectbin()], &scales, &mut aes).unwrap();
                aes
            });
        });
    }

    group.finish();
}

criterion_group!(benches, histogram_benchmark, rectbin_benchmark);
criterion_main!(benches);
