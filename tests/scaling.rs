mod common;

use common::{random_triangle, seeded};
use std::time::{Duration, Instant};
use tri_path::{
    utils::element_count, IterativeSolver, MaxPathSolver, MemoizedSolver, NaiveSolver,
    PathReconstructor,
};

#[test]
fn memoized_work_is_linear_naive_work_is_exponential() {
    let mut rng = seeded(7);
    for height in [1usize, 2, 5, 10, 14, 18] {
        let t = random_triangle(&mut rng, height, -100, 100);
        let (naive, calls) = NaiveSolver.max_path_counted(&t);
        let (memo, stats) = MemoizedSolver.max_path_with_stats(&t);
        assert_eq!(naive, memo);
        assert_eq!(calls, (1u64 << height) - 1);
        assert_eq!(stats.evaluations, element_count(height) as u64);
    }
}

#[test]
fn memoized_stays_linear_at_height_400() {
    let mut rng = seeded(11);
    let t = random_triangle(&mut rng, 400, -1_000, 1_000);
    let (_, stats) = MemoizedSolver.max_path_with_stats(&t);
    assert_eq!(stats.evaluations, 80_200);
    assert!(stats.cache_hits < stats.evaluations);
}

#[test]
fn linear_solvers_handle_hundreds_of_rows_quickly() {
    let mut rng = seeded(42);
    let t = random_triangle(&mut rng, 500, -1_000, 1_000);
    let start = Instant::now();
    let memo = MemoizedSolver.max_path(&t);
    let iter = IterativeSolver.max_path(&t);
    let path = PathReconstructor.max_path(&t);
    let elapsed = start.elapsed();
    assert_eq!(memo, iter);
    assert_eq!(memo, path);
    // ~125k elements per solver; generous bound for unoptimised builds.
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}
