//! Pipeline benchmarks for the epicast estimator.
//!
//! Run with: `cargo bench --package epicast-bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use epicast_bench::{caseload_inputs, period_inputs, reference_input};
use epicast_lib::estimate;

fn period_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_by_period_type");
    for (name, input) in period_inputs() {
        group.bench_function(name, |b| b.iter(|| estimate(black_box(&input))));
    }
    group.finish();
}

fn caseload_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_by_caseload");
    for (cases, input) in caseload_inputs() {
        group.bench_with_input(BenchmarkId::from_parameter(cases), &input, |b, input| {
            b.iter(|| estimate(black_box(input)));
        });
    }
    group.finish();
}

fn serde_benchmark(c: &mut Criterion) {
    let projection = estimate(&reference_input()).unwrap();
    c.bench_function("projection_to_json", |b| {
        b.iter(|| black_box(&projection).to_json());
    });
}

criterion_group!(benches, period_benchmark, caseload_benchmark, serde_benchmark);
criterion_main!(benches);
