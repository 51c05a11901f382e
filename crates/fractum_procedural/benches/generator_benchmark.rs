//! Benchmark for the deterministic generators.
//!
//! TARGET: Koch level 8 (65,537 points) well under 10ms
//!
//! Run with: cargo bench --package fractum_procedural --bench generator_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use fractum_procedural::lsystem::expand;
use fractum_procedural::{presets, CurveFamily, LSystem, SubdivisionCurve};

fn benchmark_subdivision_levels(c: &mut Criterion) {
    let start = presets::unit_segment();

    let mut group = c.benchmark_group("subdivision");
    for family in [CurveFamily::Koch, CurveFamily::Minkowski] {
        let curve = SubdivisionCurve::new(family);
        let levels = 7;
        group.throughput(Throughput::Elements(curve.point_count(2, levels) as u64));

        group.bench_function(format!("{family:?}_level_{levels}"), |b| {
            b.iter(|| black_box(curve.generate(black_box(&start), levels)));
        });
    }
    group.finish();
}

fn benchmark_grammar_expansion(c: &mut Criterion) {
    let tree = presets::binary_tree();

    c.bench_function("binary_tree_expand_10", |b| {
        b.iter(|| black_box(expand(black_box(&tree.axiom), &tree.rules, 10)));
    });
}

fn benchmark_turtle(c: &mut Criterion) {
    let koch = LSystem {
        iterations: 6,
        ..presets::koch_lsystem()
    };
    let instructions = koch.instructions();

    let mut group = c.benchmark_group("turtle");
    group.throughput(Throughput::Elements(instructions.len() as u64));

    group.bench_function("koch_6_interpret", |b| {
        let turtle = fractum_procedural::Turtle::new(koch.turtle);
        b.iter(|| black_box(turtle.interpret(black_box(&instructions))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_subdivision_levels,
    benchmark_grammar_expansion,
    benchmark_turtle
);
criterion_main!(benches);
