//! # Fuzzification Benchmarks
//!
//! Measures membership-shape evaluation and full per-variable fuzzification.
//! Every operation is a fixed-size pure computation, so these mostly guard
//! against accidental allocation or branching regressions.
//!
//! Run: `cargo bench --bench fuzzify_bench`

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use estufa_core::Shape;
use estufa_fuzzy::SensorVariable;

/// Benchmark the three membership shapes in isolation
fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape_membership");

    let rising = Shape::RisingTrapezoid { a: 30.0, b: 40.0, c: 50.0, d: 50.0 };
    let falling = Shape::FallingTrapezoid { a: -10.0, b: -10.0, c: 0.0, d: 10.0 };
    let triangle = Shape::Triangle { a: 14.0, b: 20.0, c: 26.0 };

    group.bench_function("rising_trapezoid", |b| {
        b.iter(|| black_box(rising.membership(black_box(37.0))))
    });

    group.bench_function("falling_trapezoid", |b| {
        b.iter(|| black_box(falling.membership(black_box(5.0))))
    });

    group.bench_function("triangle", |b| {
        b.iter(|| black_box(triangle.membership(black_box(22.0))))
    });

    group.finish();
}

/// Benchmark fuzzification of each sensor variable
fn bench_fuzzify(c: &mut Criterion) {
    let mut group = c.benchmark_group("fuzzify");

    let samples = [
        (SensorVariable::Temperature, 21.5),
        (SensorVariable::Humidity, 57.0),
        (SensorVariable::Light, 9500.0),
        (SensorVariable::SoilMoisture, 66.0),
    ];

    for (variable, raw) in samples {
        group.bench_function(variable.as_str(), |b| {
            b.iter(|| black_box(variable.fuzzify(black_box(raw))))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shapes, bench_fuzzify);
criterion_main!(benches);
