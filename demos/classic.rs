//! Example: the three solvers on the classic four-row triangle.
//!
//! Run with:
//! `cargo run --example classic`

use tri_path::{solvers, Triangle};

fn main() {
    let triangle = Triangle::from_slices(&[&[3], &[7, 4], &[2, 4, 6], &[8, 5, 9, 3]])
        .expect("rows are triangular");

    for solver in solvers::all() {
        println!("{:<10} {}", solver.name(), solver.max_path(&triangle));
    }
}
