#![cfg(feature = "heavy")]
mod common;

use common::{random_triangle, seeded};
use tri_path::{max_path_iterative, NaiveSolver};

#[test]
fn heavy_naive_height_24() {
    let mut rng = seeded(123);
    let t = random_triangle(&mut rng, 24, -100, 100);
    let (naive, calls) = NaiveSolver.max_path_counted(&t);
    assert_eq!(naive, max_path_iterative(&t));
    assert_eq!(calls, (1u64 << 24) - 1);
}
