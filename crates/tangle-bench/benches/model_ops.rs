//! Criterion micro-benchmarks for parameter splitting and system-matrix
//! assembly.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use tangle_bench::{reference_profile, reference_split};
use tangle_core::Parameters;
use tangle_model::system_matrix;

/// Benchmark: split the flat parameter vector into named parts.
fn bench_parameter_split(c: &mut Criterion) {
    let raw = reference_split();

    c.bench_function("parameter_split", |b| {
        b.iter(|| {
            let params = Parameters::split(black_box(&raw), 1, true).unwrap();
            black_box(&params);
        });
    });
}

/// Benchmark: assemble the 100-region system matrix from one split.
fn bench_system_matrix_100(c: &mut Criterion) {
    let config = reference_profile(42);
    let params = Parameters::split(&reference_split(), 1, true).unwrap();

    c.bench_function("system_matrix_100", |b| {
        b.iter(|| {
            let a = system_matrix(&config.connectome, &config.covariates, &params, None).unwrap();
            black_box(&a);
        });
    });
}

criterion_group!(benches, bench_parameter_split, bench_system_matrix_100);
criterion_main!(benches);
