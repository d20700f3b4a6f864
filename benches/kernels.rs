//! Performance benchmarks for the scan kernels.
//!
//! Run with: `cargo bench`
//!
//! These benchmarks measure throughput across input sizes to validate O(n)
//! complexity and the cost of the optional positive-minimum scan.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use scanstats::{extrema, moments};

/// Deterministic synthetic data so runs are comparable.
fn generate_f64(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| ((i as f64 * 0.1).sin() * 100.0) + ((i as f64 * 0.013).cos() * 40.0))
        .collect()
}

fn generate_u32(size: usize) -> Vec<u32> {
    (0..size).map(|i| (i as u32).wrapping_mul(2_654_435_761)).collect()
}

fn bench_extrema(c: &mut Criterion) {
    let mut group = c.benchmark_group("extrema");

    for size in [1_000, 100_000] {
        let data = generate_f64(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("f64", size), &data, |b, data| {
            b.iter(|| extrema(black_box(data), false).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("f64_min_positive", size), &data, |b, data| {
            b.iter(|| extrema(black_box(data), true).unwrap());
        });

        let ints = generate_u32(size);
        group.bench_with_input(BenchmarkId::new("u32", size), &ints, |b, data| {
            b.iter(|| extrema(black_box(data), false).unwrap());
        });
    }

    group.finish();
}

fn bench_moments(c: &mut Criterion) {
    let mut group = c.benchmark_group("moments");

    for size in [1_000, 100_000] {
        let data = generate_f64(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("f64", size), &data, |b, data| {
            b.iter(|| moments(black_box(data), 0).unwrap());
        });

        let ints = generate_u32(size);
        group.bench_with_input(BenchmarkId::new("u32", size), &ints, |b, data| {
            b.iter(|| moments(black_box(data), 1).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_extrema, bench_moments);
criterion_main!(benches);
