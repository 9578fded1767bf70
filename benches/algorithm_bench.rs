//! Benchmarks for the encoding and the 2-opt local search.

#[cfg(feature = "bench")]
extern crate criterion;

#[cfg(feature = "bench")]
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use indirect_tsp::encoding::{decode, encode};
use indirect_tsp::local_search::two_opt::best_neighbor;
use indirect_tsp::utils::{random_nodes, seeded_rng};
use indirect_tsp::{Config, IndirectProblem, Problem};

/// Create a benchmark problem of specified size.
fn create_benchmark_problem(size: usize) -> Problem {
    let mut rng = seeded_rng(Some(size as u64));
    Problem::new(
        format!("BenchProblem_{}", size),
        random_nodes(size, 1000.0, &mut rng).unwrap(),
    )
    .unwrap()
}

#[cfg(feature = "bench")]
fn benchmark_decoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("decoding");

    for size in [100, 1000, 10000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let permutation: Vec<usize> = (0..size).rev().collect();
            let vector = encode(&permutation);

            b.iter(|| decode(&vector));
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");

    for size in [20, 50, 100].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let permutation: Vec<usize> = (0..size).collect();

            b.iter(|| best_neighbor(&permutation, problem.distances()));
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("local_search");
    group.sample_size(10);

    for size in [20, 50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let problem = create_benchmark_problem(size);
            let mut rng = seeded_rng(Some(1));
            let solution = problem
                .construct(problem.random_decision_vector(&mut rng))
                .unwrap();

            b.iter(|| {
                let mut solution_clone = solution.clone();
                problem.improve(&mut solution_clone);
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
fn benchmark_parallel_local_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_local_search");
    group.sample_size(10);

    for size in [50].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let mut rng = seeded_rng(Some(size as u64));
            let problem = Problem::with_config(
                format!("BenchProblem_{}", size),
                random_nodes(size, 1000.0, &mut rng).unwrap(),
                Config::new().with_parallel(true),
            )
            .unwrap();
            let solution = problem
                .construct(problem.random_decision_vector(&mut rng))
                .unwrap();

            b.iter(|| {
                let mut solution_clone = solution.clone();
                problem.improve(&mut solution_clone);
            });
        });
    }

    group.finish();
}

#[cfg(feature = "bench")]
criterion_group!(
    benches,
    benchmark_decoding,
    benchmark_sweep,
    benchmark_local_search,
    benchmark_parallel_local_search
);

#[cfg(feature = "bench")]
criterion_main!(benches);
