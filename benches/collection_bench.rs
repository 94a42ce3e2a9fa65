//! Benchmark for Collection, MapCollection and dot-path access.
//!
//! Compares the fluent operations against the equivalent hand-written
//! iterator chains over `Vec` and `HashMap`.

use collecta::{Collection, MapCollection, Value, arr};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::HashMap;
use std::hint::black_box;

// =============================================================================
// filter + map Benchmark
// =============================================================================

fn benchmark_filter_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_map");

    for size in [100, 1000, 10000] {
        let collection: Collection<i64> = (0..size).collect();
        let vector: Vec<i64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("Collection", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| {
                    black_box(collection.filter(|n| n % 3 == 0).map(|n, _| n * 2))
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Vec", size), &vector, |bencher, vector| {
            bencher.iter(|| {
                black_box(
                    vector
                        .iter()
                        .filter(|n| *n % 3 == 0)
                        .map(|n| n * 2)
                        .collect::<Vec<_>>(),
                )
            });
        });
    }

    group.finish();
}

// =============================================================================
// sort_by Benchmark
// =============================================================================

fn benchmark_sort_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort_by");

    for size in [100, 1000, 10000] {
        let collection: Collection<(i64, i64)> =
            (0..size).map(|n| ((n * 7919) % 101, n)).collect();

        group.bench_with_input(
            BenchmarkId::new("Collection", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| black_box(collection.sort_by(|pair| pair.0)));
            },
        );
    }

    group.finish();
}

// =============================================================================
// group_by Benchmark
// =============================================================================

fn benchmark_group_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("group_by");

    for size in [100, 1000, 10000] {
        let collection: Collection<i64> = (0..size).collect();
        let vector: Vec<i64> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("Collection", size),
            &collection,
            |bencher, collection| {
                bencher.iter(|| black_box(collection.group_by(|n| n % 16)));
            },
        );

        group.bench_with_input(BenchmarkId::new("HashMap", size), &vector, |bencher, vector| {
            bencher.iter(|| {
                let mut grouped: HashMap<i64, Vec<i64>> = HashMap::new();
                for item in vector {
                    grouped.entry(item % 16).or_default().push(*item);
                }
                black_box(grouped)
            });
        });
    }

    group.finish();
}

// =============================================================================
// MapCollection put/get Benchmark
// =============================================================================

fn benchmark_map_put_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_put_get");

    for size in [100, 1000, 10000] {
        group.bench_with_input(
            BenchmarkId::new("MapCollection", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    let mut map = MapCollection::new();
                    for key in 0..size {
                        map.put(black_box(key), key);
                    }
                    for key in 0..size {
                        black_box(map.get(&key));
                    }
                    black_box(map)
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Dot-path Benchmark
// =============================================================================

fn benchmark_dot_path(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("dot_path");

    let mut data = Value::object();
    for index in 0..100 {
        arr::set(&mut data, &format!("section{index}.group.leaf"), index);
    }

    group.bench_function("get", |bencher| {
        bencher.iter(|| black_box(arr::get(&data, black_box("section42.group.leaf"))));
    });

    group.bench_function("dot_undot", |bencher| {
        let object = data.as_map().cloned().unwrap_or_default();
        bencher.iter(|| black_box(arr::undot(&arr::dot(&object))));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_filter_map,
    benchmark_sort_by,
    benchmark_group_by,
    benchmark_map_put_get,
    benchmark_dot_path
);

criterion_main!(benches);
