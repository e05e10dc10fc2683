#![allow(dead_code)]

use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use tri_path::{utils::element_count, Triangle, Value};

fn reshape(flat: &[Value], height: usize) -> Triangle {
    let rows = (0..height)
        .map(|i| flat[element_count(i)..element_count(i + 1)].to_vec())
        .collect();
    Triangle::new(rows).expect("reshaped rows are triangular")
}

/// Triangles of height `1..max_height` with values in `values`.
pub fn triangle_strategy(
    max_height: usize,
    values: std::ops::Range<Value>,
) -> impl Strategy<Value = Triangle> {
    (1..max_height).prop_flat_map(move |height| {
        prop::collection::vec(values.clone(), element_count(height))
            .prop_map(move |flat| reshape(&flat, height))
    })
}

pub fn random_triangle(rng: &mut StdRng, height: usize, lo: Value, hi: Value) -> Triangle {
    let rows = (0..height)
        .map(|i| (0..=i).map(|_| rng.gen_range(lo..hi)).collect())
        .collect();
    Triangle::new(rows).expect("generated rows are triangular")
}

pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Exhaustive enumeration of every path, independent of all solvers.
pub fn brute_force(t: &Triangle) -> Value {
    let height = t.height();
    let mut best = Value::MIN;
    for mask in 0u64..(1u64 << (height - 1)) {
        let mut col = 0;
        let mut sum = t.root();
        for row in 1..height {
            if mask >> (row - 1) & 1 == 1 {
                col += 1;
            }
            sum += t.row(row)[col];
        }
        best = best.max(sum);
    }
    best
}
