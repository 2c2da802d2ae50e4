//! Heap operation benchmarks
//!
//! # Test Scenarios
//!
//! 1. **Add**: single adds of random and descending priorities
//! 2. **Bulk add**: `add_many` (bottom-up heapify) against repeated `add`
//! 3. **Drain**: `remove_min` until empty, and MinMaxHeap alternating ends
//! 4. **Search**: MinMaxHeap level-pruned `index_of` against a linear scan
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use heapbloom::heap::{MinHeap, MinMaxHeap};

mod common;
use common::*;

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_add");

    for &size in SIZES {
        let random = generate_priorities(size, 1);
        let descending = generate_descending(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("min_heap_random", size), &random, |b, data| {
            b.iter(|| {
                let mut heap = MinHeap::with_capacity(data.len());
                for &v in data {
                    heap.add(black_box(v));
                }
                heap
            });
        });

        group.bench_with_input(
            BenchmarkId::new("min_heap_descending", size),
            &descending,
            |b, data| {
                b.iter(|| {
                    let mut heap = MinHeap::with_capacity(data.len());
                    for &v in data {
                        heap.add(black_box(v));
                    }
                    heap
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("min_max_random", size), &random, |b, data| {
            b.iter(|| {
                let mut heap = MinMaxHeap::with_capacity(data.len());
                for &v in data {
                    heap.add(black_box(v));
                }
                heap
            });
        });
    }

    group.finish();
}

fn bench_bulk_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_bulk_add");

    for &size in SIZES {
        let data = generate_priorities(size, 2);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("min_heap_add_many", size), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |batch| {
                    let mut heap = MinHeap::new();
                    heap.add_many(batch);
                    heap
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("min_max_add_many", size), &data, |b, data| {
            b.iter_batched(
                || data.clone(),
                |batch| {
                    let mut heap = MinMaxHeap::new();
                    heap.add_many(batch);
                    heap
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_drain");

    for &size in SIZES {
        let data = generate_priorities(size, 3);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("min_heap_remove_min", size), &data, |b, data| {
            b.iter_batched(
                || MinHeap::from(data.clone()),
                |mut heap| {
                    while let Ok(v) = heap.remove_min() {
                        black_box(v);
                    }
                },
                BatchSize::LargeInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("min_max_alternating", size), &data, |b, data| {
            b.iter_batched(
                || MinMaxHeap::from(data.clone()),
                |mut heap| {
                    while !heap.is_empty() {
                        black_box(heap.remove_min().ok());
                        black_box(heap.remove_max().ok());
                    }
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("heap_search");
    let size = 10_000;
    let data = generate_priorities(size, 4);
    let heap = MinMaxHeap::from(data.clone());
    let targets: Vec<i64> = data.iter().step_by(97).copied().collect();

    group.bench_function("min_max_index_of", |b| {
        b.iter(|| {
            for t in &targets {
                black_box(heap.index_of(t));
            }
        });
    });

    group.bench_function("linear_scan", |b| {
        b.iter(|| {
            for t in &targets {
                black_box(heap.iter().position(|x| x == t));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_add, bench_bulk_add, bench_drain, bench_search);
criterion_main!(benches);
