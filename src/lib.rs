//! Maximum-sum top-to-bottom paths through numeric triangles.
//!
//! A triangle has rows `0..n`, row `i` holding `i + 1` integers. A path starts
//! at the root and from `(i, j)` steps to `(i + 1, j)` or `(i + 1, j + 1)`;
//! its value is the sum of the visited elements.
//!
//! ## Quick start
//! ```
//! use tri_path::{max_path_iterative, Triangle};
//!
//! let t = Triangle::from_slices(&[&[3], &[7, 4], &[2, 4, 6], &[8, 5, 9, 3]]).unwrap();
//! assert_eq!(max_path_iterative(&t), 23);
//! ```
//!
//! ## Solvers
//! Three classic formulations with very different costs, plus a path
//! reconstructor:
//! - [`NaiveSolver`]: splits into sub-triangles and recurses, exponential.
//! - [`MemoizedSolver`]: caches `max_from(i, j)` in a table local to the call.
//! - [`IterativeSolver`]: bottom-up, one row of accumulators.
//! - [`PathReconstructor`]: bottom-up with choice bits, returns a [`MaxPath`].
//!
//! Shape and the `i64` sum bound are validated once by [`Triangle::new`];
//! solvers over `&Triangle` cannot fail or overflow.

pub mod builder;
pub mod error;
pub mod solvers;
pub mod traits;
pub mod triangle;
pub mod utils;

pub use crate::builder::TriangleBuilder;
pub use crate::error::TriangleError;
pub use crate::solvers::iterative::{max_path_iterative, IterativeSolver};
pub use crate::solvers::memoized::{max_path_memoized, MemoStats, MemoizedSolver};
pub use crate::solvers::naive::{max_path_naive, NaiveSolver};
pub use crate::solvers::path::{best_path, MaxPath, PathReconstructor};
pub use crate::traits::MaxPathSolver;
pub use crate::triangle::{Triangle, Value};
