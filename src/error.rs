//! Construction errors for [`Triangle`](crate::triangle::Triangle).
//!
//! Solvers never fail: every shape check happens once, when the triangle is
//! built, so a `&Triangle` handed to a solver is always well formed.

use thiserror::Error;

/// A malformed triangle was rejected at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriangleError {
    /// The input had no rows at all.
    #[error("triangle must have at least one row")]
    Empty,

    /// Row `row` did not hold `row + 1` values.
    #[error("row {row} must hold {expected} values, found {found}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A path could leave the `i64` range: `height * max |value|` exceeds
    /// `i64::MAX`.
    #[error("path sums may overflow: {height} rows with a value of magnitude {max_abs}")]
    Overflow { height: usize, max_abs: u64 },
}

pub type Result<T> = std::result::Result<T, TriangleError>;
