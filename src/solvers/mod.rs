//! Maximum-path solvers.
//!
//! All of them implement [`MaxPathSolver`](crate::traits::MaxPathSolver) and
//! return the same value for the same triangle:
//! - [`naive`]     : recursion over split sub-triangles, `O(2^n)`.
//! - [`memoized`]  : recursion over `(row, col)` with a per-call table, `O(n^2)`.
//! - [`iterative`] : bottom-up, `O(n^2)` time and one row of space.
//! - [`path`]      : bottom-up with choice bits, also returns the optimal path.

pub mod iterative;
pub mod memoized;
pub mod naive;
pub mod path;

use crate::traits::MaxPathSolver;

/// Every solver, slowest first.
pub fn all() -> [&'static dyn MaxPathSolver; 4] {
    [
        &naive::NaiveSolver,
        &memoized::MemoizedSolver,
        &iterative::IterativeSolver,
        &path::PathReconstructor,
    ]
}

/// Solvers that stay near-linear in the element count.
pub fn linear() -> [&'static dyn MaxPathSolver; 3] {
    [
        &memoized::MemoizedSolver,
        &iterative::IterativeSolver,
        &path::PathReconstructor,
    ]
}
