//! Benchmark for chaos game sampling.
//!
//! TARGET: 100,000 fern points in under 5ms
//!
//! Run with: cargo bench --package fractum_procedural --bench chaos_game_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fractum_procedural::{presets, ChaosGame, FractalSeed};

fn benchmark_transform_selection(c: &mut Criterion) {
    let set = presets::barnsley_fern_transforms();

    c.bench_function("select_transform", |b| {
        let mut u = 0.0f64;
        b.iter(|| {
            u = (u + 0.013) % 1.0;
            black_box(set.select(black_box(u)))
        });
    });
}

fn benchmark_presets(c: &mut Criterion) {
    let mut group = c.benchmark_group("chaos_game");
    group.throughput(Throughput::Elements(presets::IFS_POINTS as u64));
    group.sample_size(20);

    for (name, set) in [
        ("barnsley_fern", presets::barnsley_fern_transforms()),
        ("probability_tree", presets::probability_tree_transforms()),
    ] {
        let game = ChaosGame::new(set);
        group.bench_function(name, |b| {
            b.iter(|| {
                black_box(game.sample_seeded(
                    presets::IFS_POINTS,
                    presets::IFS_WARMUP,
                    FractalSeed::new(42),
                ))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_transform_selection, benchmark_presets);
criterion_main!(benches);
