//! Exponential-time recursion over materialised sub-triangles.
//!
//! Every level splits the triangle into its left and right sub-triangles and
//! solves both independently. Overlapping subproblems are never shared, so a
//! triangle of height `n` costs `2^n - 1` calls. Kept as the baseline the
//! other solvers are checked against; impractical beyond a few dozen rows.

use crate::traits::MaxPathSolver;
use crate::triangle::{Triangle, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveSolver;

impl NaiveSolver {
    /// Maximum path sum together with the number of recursive invocations.
    pub fn max_path_counted(&self, triangle: &Triangle) -> (Value, u64) {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("naive", height = triangle.height()).entered();
        let mut calls = 0u64;
        let best = solve(triangle, &mut calls);
        (best, calls)
    }
}

fn solve(triangle: &Triangle, calls: &mut u64) -> Value {
    *calls += 1;
    match triangle.split() {
        None => triangle.root(),
        Some((left, right)) => {
            let l = solve(&left, calls);
            let r = solve(&right, calls);
            triangle.root() + l.max(r)
        }
    }
}

impl MaxPathSolver for NaiveSolver {
    fn name(&self) -> &'static str {
        "naive"
    }

    fn max_path(&self, triangle: &Triangle) -> Value {
        self.max_path_counted(triangle).0
    }
}

/// Shorthand for `NaiveSolver.max_path(triangle)`.
pub fn max_path_naive(triangle: &Triangle) -> Value {
    NaiveSolver.max_path(triangle)
}
