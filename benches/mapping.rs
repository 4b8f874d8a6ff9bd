//! Benchmarks for computed and table-backed Hilbert mapping.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use hilbert_space::{HilbertSpace, HilbertTable};

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    group.throughput(Throughput::Elements(1));

    for order in [64i64, 1024, 1 << 20] {
        let space = HilbertSpace::new(order, false).unwrap();
        let t = space.len() / 3;
        group.bench_with_input(BenchmarkId::new("computed", order), &t, |b, &t| {
            b.iter(|| black_box(space.map(black_box(t))));
        });
    }

    for order in [64i64, 1024] {
        let table = HilbertTable::new(HilbertSpace::new(order, false).unwrap()).unwrap();
        let t = table.space().len() / 3;
        group.bench_with_input(BenchmarkId::new("table", order), &t, |b, &t| {
            b.iter(|| black_box(table.map(black_box(t))));
        });
    }

    group.finish();
}

fn bench_map_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_inverse");
    group.throughput(Throughput::Elements(1));

    for vertical in [false, true] {
        let space = HilbertSpace::new(1024, vertical).unwrap();
        let table = HilbertTable::new(space).unwrap();
        let label = if vertical { "vertical" } else { "standard" };

        group.bench_function(BenchmarkId::new("computed", label), |b| {
            b.iter(|| black_box(space.map_inverse(black_box(517), black_box(300))));
        });
        group.bench_function(BenchmarkId::new("table", label), |b| {
            b.iter(|| black_box(table.map_inverse(black_box(517), black_box(300))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_map, bench_map_inverse);
criterion_main!(benches);
