//! # Decision Benchmarks
//!
//! Measures rule-table lookup and the full inference cycle
//! (four fuzzifications + five table lookups).
//!
//! Run: `cargo bench --bench decision_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use estufa_core::Level;
use estufa_decision::{evaluate, infer, SensorReadings};

/// Benchmark the rule engine on dominant labels only
fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    group.bench_function("all_medium", |b| {
        b.iter(|| {
            black_box(evaluate(
                black_box(Level::Medium),
                black_box(Level::Medium),
                black_box(Level::Medium),
                black_box(Level::Medium),
            ))
        })
    });

    group.bench_function("extremes", |b| {
        b.iter(|| {
            black_box(evaluate(
                black_box(Level::VeryLow),
                black_box(Level::VeryHigh),
                black_box(Level::VeryLow),
                black_box(Level::VeryHigh),
            ))
        })
    });

    group.finish();
}

/// Benchmark the full inference cycle from raw readings
fn bench_infer(c: &mut Criterion) {
    let mut group = c.benchmark_group("infer");

    let ideal = SensorReadings::default_ideal();
    group.bench_function("ideal", |b| {
        b.iter(|| black_box(infer(black_box(&ideal))))
    });

    let harsh = SensorReadings::new(-10.0, 5.0, 0.0, 10.0);
    group.bench_function("harsh", |b| {
        b.iter(|| black_box(infer(black_box(&harsh))))
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_infer);
criterion_main!(benches);
