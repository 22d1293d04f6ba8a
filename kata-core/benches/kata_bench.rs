use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kata_core::coins::{CombinationCounter, MemoizedCounter, TabulatedCounter};
use kata_core::{brackets_balanced, count_islands, shortest_covering_window, LandGrid};
use std::collections::HashSet;

// Checkerboard-ish grid with diagonal stripes of land.
fn striped_grid(size: usize) -> LandGrid {
    let rows: Vec<Vec<u8>> = (0..size)
        .map(|y| (0..size).map(|x| u8::from((x + y) % 3 != 0)).collect())
        .collect();
    LandGrid::from_rows(&rows).expect("generated rows are rectangular")
}

fn bench_coins(c: &mut Criterion) {
    let mut group = c.benchmark_group("coin combinations");
    let coins: [u32; 8] = [1, 2, 5, 10, 20, 50, 100, 200];

    for amount in [100_i64, 1_000, 5_000] {
        group.bench_with_input(BenchmarkId::new("memoized", amount), &amount, |b, &amount| {
            b.iter(|| MemoizedCounter::new().count(black_box(amount), black_box(&coins)));
        });
        group.bench_with_input(BenchmarkId::new("tabulated", amount), &amount, |b, &amount| {
            b.iter(|| TabulatedCounter::new().count(black_box(amount), black_box(&coins)));
        });
    }
    group.finish();
}

fn bench_islands(c: &mut Criterion) {
    let mut group = c.benchmark_group("islands");
    for size in [32_usize, 128, 512] {
        let grid = striped_grid(size);
        group.throughput(Throughput::Elements((size * size) as u64));
        group.bench_with_input(BenchmarkId::new("count", format!("{size}x{size}")), &grid, |b, grid| {
            b.iter(|| count_islands(black_box(grid)));
        });
    }
    group.finish();
}

fn bench_text(c: &mut Criterion) {
    let expression = "{3*[1+5(6+8)]}".repeat(1_000);
    c.bench_function("brackets 14k chars", |b| {
        b.iter(|| brackets_balanced(black_box(&expression)));
    });

    let text = "abweweffawefcaaaaboiwuroqiwuroiueeeb".repeat(500);
    let required: HashSet<char> = "abc".chars().collect();
    c.bench_function("covering window 18k chars", |b| {
        b.iter(|| shortest_covering_window(black_box(&text), black_box(&required)));
    });
}

criterion_group!(benches, bench_coins, bench_islands, bench_text);
criterion_main!(benches);
