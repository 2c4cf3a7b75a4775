//! Traversal benchmark.
//!
//! Compares `map`, `filter`, `reduce` and `remove` against the equivalent
//! hand-written iterator chains (baseline). Expected: within noise of baseline.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use fusion::traversal::{filter, map, reduce, remove};
use std::hint::black_box;

const SIZES: [i64; 3] = [100, 1000, 10000];

fn generate_values(size: i64) -> Vec<i64> {
    (0..size).collect()
}

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in SIZES {
        let values = generate_values(size);
        group.bench_with_input(BenchmarkId::new("fusion", size), &values, |bencher, values| {
            bencher.iter(|| black_box(map(black_box(values), |_, value, factor| value * factor, &3_i64)));
        });
        group.bench_with_input(BenchmarkId::new("baseline", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(black_box(values).iter().map(|value| value * 3).collect::<Vec<_>>())
            });
        });
    }

    group.finish();
}

fn benchmark_filter(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter");

    for size in SIZES {
        let values = generate_values(size);
        group.bench_with_input(BenchmarkId::new("fusion", size), &values, |bencher, values| {
            bencher.iter(|| black_box(filter(black_box(values), |_, value, _| value % 2 == 0, &())));
        });
        group.bench_with_input(BenchmarkId::new("baseline", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(
                    black_box(values)
                        .iter()
                        .filter(|value| *value % 2 == 0)
                        .copied()
                        .collect::<Vec<_>>(),
                )
            });
        });
    }

    group.finish();
}

fn benchmark_reduce(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reduce");

    for size in SIZES {
        let values = generate_values(size);
        group.bench_with_input(BenchmarkId::new("fusion", size), &values, |bencher, values| {
            bencher.iter(|| {
                black_box(reduce(
                    black_box(values),
                    |accumulator, value, _, _| accumulator + value,
                    0,
                    &(),
                ))
            });
        });
    }

    group.finish();
}

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in SIZES {
        let values = generate_values(size);
        group.bench_with_input(BenchmarkId::new("remove", size), &size, |bencher, _| {
            bencher.iter_batched(
                || values.clone(),
                |mut collection| {
                    let removed = remove(&mut collection, |value, _, _| value % 3 == 0);
                    black_box((collection, removed))
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_map,
    benchmark_filter,
    benchmark_reduce,
    benchmark_remove
);
criterion_main!(benches);
