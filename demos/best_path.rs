//! Example: reconstruct the optimal path through a generated triangle.
//!
//! Run with:
//! `cargo run --example best_path`

use tri_path::{best_path, TriangleBuilder};

fn main() {
    let height = 8;
    let mut builder = TriangleBuilder::with_capacity(height);
    for i in 0..height {
        builder.push_row((0..=i).map(|j| ((i * 7 + j * 13) % 10) as i64));
    }
    let triangle = builder.build().expect("rows are triangular");

    for (i, row) in triangle.rows().enumerate() {
        let pad = " ".repeat((height - i - 1) * 2);
        let cells: Vec<String> = row.iter().map(|v| format!("{v:>3}")).collect();
        println!("{pad}{}", cells.join(" "));
    }

    let path = best_path(&triangle);
    println!("\nmax sum: {}", path.sum);
    println!("columns: {:?}", path.columns);
    println!("values:  {:?}", path.values(&triangle));
}
