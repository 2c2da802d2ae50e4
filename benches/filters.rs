//! Bloom filter add and contains benchmarks
//!
//! # Test Scenarios
//!
//! 1. **Add by FPR**: lower rates mean more probes per add
//! 2. **Contains**: hits and misses on a filter loaded to its design size
//! 3. **Counting**: add followed by remove
//! 4. **Scalable growth**: cost of filling well past the first slice
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use heapbloom::filters::{CountingBloomFilter, ScalableBloomFilter, StandardBloomFilter};

mod common;
use common::*;

fn bench_add_by_fpr(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard_add_by_fpr");
    let size = 10_000;
    let items = generate_strings(size, 32);

    for &fpr in FP_RATES {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(fpr), &fpr, |b, &fpr| {
            let mut filter = StandardBloomFilter::<String>::new(size, fpr).unwrap();
            let mut idx = 0;
            b.iter(|| {
                filter.add(black_box(&items[idx % items.len()]));
                idx += 1;
            });
        });
    }

    group.finish();
}

fn bench_contains(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard_contains");

    for &size in SIZES {
        let present = generate_sequential_strings(size);
        let absent = generate_strings(size, 24);
        let mut filter = StandardBloomFilter::<String>::new(size, 0.01).unwrap();
        for item in &present {
            filter.add(item);
        }

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("hit", size), &present, |b, items| {
            let mut idx = 0;
            b.iter(|| {
                let hit = filter.contains(black_box(&items[idx % items.len()]));
                idx += 1;
                hit
            });
        });
        group.bench_with_input(BenchmarkId::new("miss", size), &absent, |b, items| {
            let mut idx = 0;
            b.iter(|| {
                let hit = filter.contains(black_box(&items[idx % items.len()]));
                idx += 1;
                hit
            });
        });
    }

    group.finish();
}

fn bench_counting(c: &mut Criterion) {
    let mut group = c.benchmark_group("counting_add_remove");

    for &size in SIZES {
        let items = generate_u64s(size);
        let mut filter = CountingBloomFilter::<u64>::new(size, 0.01).unwrap();

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(size), &items, |b, items| {
            let mut idx = 0;
            b.iter(|| {
                let item = &items[idx % items.len()];
                filter.add(black_box(item)).ok();
                filter.remove(black_box(item)).ok();
                idx += 1;
            });
        });
    }

    group.finish();
}

fn bench_scalable_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalable_fill");
    let total = 50_000u64;

    for &capacity in INITIAL_CAPACITIES {
        group.throughput(Throughput::Elements(total));
        group.bench_with_input(BenchmarkId::from_parameter(capacity), &capacity, |b, &capacity| {
            b.iter(|| {
                let mut filter = ScalableBloomFilter::<u64>::new(0.9, capacity, 0.01).unwrap();
                for i in 0..total {
                    filter.add(&i);
                }
                filter.slice_count()
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_add_by_fpr,
    bench_contains,
    bench_counting,
    bench_scalable_growth
);
criterion_main!(benches);
