//! Benchmarks for the sliding-block solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use klotski::board::encode;
use klotski::layouts::CLASSIC;
use klotski::moves::successors;
use klotski::search::{best_first, breadth_first};

/// Benchmark enumerating the legal moves of one board.
fn bench_successors(c: &mut Criterion) {
    let state = encode(&CLASSIC).unwrap();

    c.bench_function("successors", |b| b.iter(|| successors(black_box(state))));
}

/// Benchmark computing the canonical form of a board.
fn bench_canonical(c: &mut Criterion) {
    let state = encode(&CLASSIC).unwrap();

    c.bench_function("canonical", |b| b.iter(|| black_box(state).canonical()));
}

/// Benchmark the full load-time BFS solve of the classic opening.
fn bench_solve_bfs(c: &mut Criterion) {
    let state = encode(&CLASSIC).unwrap();

    let mut group = c.benchmark_group("classic");
    group.sample_size(10);
    group.bench_function("bfs", |b| b.iter(|| breadth_first(black_box(state))));
    group.finish();
}

/// Benchmark the per-move A* solve of the classic opening.
fn bench_solve_astar(c: &mut Criterion) {
    let state = encode(&CLASSIC).unwrap();

    let mut group = c.benchmark_group("classic");
    group.sample_size(10);
    group.bench_function("astar", |b| b.iter(|| best_first(black_box(state))));
    group.finish();
}

criterion_group!(
    benches,
    bench_successors,
    bench_canonical,
    bench_solve_bfs,
    bench_solve_astar
);
criterion_main!(benches);
