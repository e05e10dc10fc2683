//! Top-down recursion over `(row, col)` with a per-call memo table.
//!
//! `max_from(i, j)` is the best sum from element `(i, j)` down to the bottom
//! row. The table has one value slot and one filled flag per element,
//! flat-indexed by [`flat_index`](crate::utils::flat_index), and is dropped
//! when the call returns, so nothing computed for one triangle can leak into
//! another.

use crate::traits::MaxPathSolver;
use crate::triangle::{Triangle, Value};
use crate::utils::flat_index;

#[derive(Debug, Clone, Copy, Default)]
pub struct MemoizedSolver;

/// Work done by a single memoized solve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Distinct `(row, col)` pairs computed; equals the element count.
    pub evaluations: u64,
    /// Requests answered from the table.
    pub cache_hits: u64,
}

struct Memo<'t> {
    triangle: &'t Triangle,
    last_row: usize,
    values: Vec<Value>,
    filled: Vec<bool>,
    stats: MemoStats,
}

impl<'t> Memo<'t> {
    fn new(triangle: &'t Triangle) -> Self {
        Self {
            triangle,
            last_row: triangle.height() - 1,
            values: vec![0; triangle.len()],
            filled: vec![false; triangle.len()],
            stats: MemoStats::default(),
        }
    }

    fn max_from(&mut self, i: usize, j: usize) -> Value {
        let slot = flat_index(i, j);
        if self.filled[slot] {
            self.stats.cache_hits += 1;
            return self.values[slot];
        }
        let here = self.triangle.row(i)[j];
        let v = if i < self.last_row {
            let left = self.max_from(i + 1, j);
            let right = self.max_from(i + 1, j + 1);
            here + left.max(right)
        } else {
            here
        };
        self.stats.evaluations += 1;
        self.values[slot] = v;
        self.filled[slot] = true;
        v
    }
}

impl MemoizedSolver {
    /// Maximum path sum together with the work counters of this call.
    pub fn max_path_with_stats(&self, triangle: &Triangle) -> (Value, MemoStats) {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("memoized", height = triangle.height()).entered();
        let mut memo = Memo::new(triangle);
        let best = memo.max_from(0, 0);
        #[cfg(feature = "tracing")]
        tracing::trace!(
            evaluations = memo.stats.evaluations,
            cache_hits = memo.stats.cache_hits,
            "memo table filled"
        );
        (best, memo.stats)
    }
}

impl MaxPathSolver for MemoizedSolver {
    fn name(&self) -> &'static str {
        "memoized"
    }

    fn max_path(&self, triangle: &Triangle) -> Value {
        self.max_path_with_stats(triangle).0
    }
}

/// Shorthand for `MemoizedSolver.max_path(triangle)`.
pub fn max_path_memoized(triangle: &Triangle) -> Value {
    MemoizedSolver.max_path(triangle)
}
