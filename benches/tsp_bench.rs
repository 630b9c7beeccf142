//! Criterion benchmarks for the TSP solvers.
//!
//! Uses seeded random instances so runs are comparable across commits.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_tsp::bnb::{BnbConfig, BnbSolver, NeighborLookup};
use u_tsp::exhaustive::ExhaustiveSolver;
use u_tsp::matrix::DistanceMatrix;
use u_tsp::solver::TspSolver;

// ===========================================================================
// Branch-and-bound on symmetric instances
// ===========================================================================

fn bench_bnb_symmetric(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnb_symmetric");
    group.sample_size(10);

    for &n in &[8usize, 11, 14] {
        let solver = BnbSolver::new(DistanceMatrix::random_symmetric(n, 1000, 42))
            .expect("non-empty matrix");
        group.bench_with_input(BenchmarkId::from_parameter(n), &solver, |b, s| {
            b.iter(|| black_box(s.solve(black_box(0))))
        });
    }
    group.finish();
}

fn bench_bnb_asymmetric(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnb_asymmetric");
    group.sample_size(10);

    for &n in &[8usize, 10, 12] {
        let solver = BnbSolver::new(DistanceMatrix::random_asymmetric(n, 1000, 42))
            .expect("non-empty matrix");
        group.bench_with_input(BenchmarkId::from_parameter(n), &solver, |b, s| {
            b.iter(|| black_box(s.solve(black_box(0))))
        });
    }
    group.finish();
}

// ===========================================================================
// Neighbor lookup: precomputed table vs. sorting rows on every call
// ===========================================================================

fn bench_neighbor_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("neighbor_lookup");
    group.sample_size(10);

    let matrix = DistanceMatrix::random_symmetric(10, 1000, 7);
    for (name, lookup) in [
        ("precomputed", NeighborLookup::Precomputed),
        ("row_sort", NeighborLookup::RowSort),
    ] {
        let config = BnbConfig::default().with_neighbor_lookup(lookup);
        let solver = BnbSolver::with_config(matrix.clone(), config).expect("non-empty matrix");
        group.bench_function(name, |b| b.iter(|| black_box(solver.solve(black_box(0)))));
    }
    group.finish();
}

// ===========================================================================
// Exhaustive baseline
// ===========================================================================

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");
    group.sample_size(10);

    for &n in &[7usize, 8, 9] {
        let solver = ExhaustiveSolver::new(DistanceMatrix::random_symmetric(n, 1000, 42))
            .expect("non-empty matrix");
        group.bench_with_input(BenchmarkId::from_parameter(n), &solver, |b, s| {
            b.iter(|| black_box(s.solve(black_box(0))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_bnb_symmetric,
    bench_bnb_asymmetric,
    bench_neighbor_lookup,
    bench_exhaustive
);
criterion_main!(benches);
