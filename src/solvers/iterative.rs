//! Bottom-up accumulation with one row of working space.
//!
//! Walking from the bottom row upwards, `acc_row[k] = below[k] + row[k]`
//! holds the best sum from `(i, k)` to the bottom. The accumulator passed to
//! the row above is `below[k] = max(acc_row[k], acc_row[k + 1])`, one element
//! shorter. The root iteration leaves the answer in `acc_row[0]`.

use crate::traits::MaxPathSolver;
use crate::triangle::{Triangle, Value};

#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeSolver;

impl MaxPathSolver for IterativeSolver {
    fn name(&self) -> &'static str {
        "iterative"
    }

    fn max_path(&self, triangle: &Triangle) -> Value {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("iterative", height = triangle.height()).entered();
        let mut below: Vec<Value> = vec![0; triangle.last_row().len()];
        let mut acc_row: Vec<Value> = Vec::with_capacity(below.len());
        for row in triangle.rows().rev() {
            acc_row.clear();
            acc_row.extend(below.iter().zip(row).map(|(b, r)| b + r));
            below.clear();
            below.extend(acc_row.windows(2).map(|w| w[0].max(w[1])));
        }
        // The root row has one element, so the final `acc_row` is `[best]`.
        acc_row[0]
    }
}

/// Shorthand for `IterativeSolver.max_path(triangle)`.
pub fn max_path_iterative(triangle: &Triangle) -> Value {
    IterativeSolver.max_path(triangle)
}
