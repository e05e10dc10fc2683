//! The common seam shared by every solver.
//!
//! Each solver is a zero-sized unit struct implementing [`MaxPathSolver`].
//! The trait carries no state: it lets tests, benches and the probe binary
//! iterate over the solvers uniformly, e.g. to cross-check their answers.

use crate::triangle::{Triangle, Value};

/// Computes the maximum top-to-bottom path sum of a triangle.
///
/// Contract shared by all implementations:
/// - the input is only read, never mutated;
/// - no state survives between calls, so repeated calls on the same triangle
///   return the same value;
/// - every implementation returns the same value for the same triangle.
pub trait MaxPathSolver {
    /// Short, stable identifier used in reports and bench names.
    fn name(&self) -> &'static str;

    /// Maximum sum over all paths from the root to the bottom row.
    fn max_path(&self, triangle: &Triangle) -> Value;
}
