//! Optimal sum plus the path that achieves it.
//!
//! Same bottom-up pass as the iterative solver, but every non-bottom element
//! records which child it took. The path is then read top-down from the root
//! by following those choices. Ties step to the same column.

use crate::traits::MaxPathSolver;
use crate::triangle::{Triangle, Value};

/// A maximum-sum path: `columns[i]` is the column visited in row `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaxPath {
    pub sum: Value,
    pub columns: Vec<usize>,
}

impl MaxPath {
    /// The visited values, top to bottom.
    ///
    /// # Panics
    /// Panics if `triangle` is not the one this path was computed for and a
    /// column falls outside it.
    pub fn values(&self, triangle: &Triangle) -> Vec<Value> {
        self.columns
            .iter()
            .enumerate()
            .map(|(row, &col)| triangle.row(row)[col])
            .collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PathReconstructor;

impl PathReconstructor {
    pub fn best_path(&self, triangle: &Triangle) -> MaxPath {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("path", height = triangle.height()).entered();
        let height = triangle.height();
        let mut best: Vec<Value> = triangle.last_row().to_vec();
        // step_right[i][k]: from (i, k) the optimal move goes to (i + 1, k + 1).
        let mut step_right: Vec<Vec<bool>> = vec![Vec::new(); height - 1];
        for i in (0..height - 1).rev() {
            let row = triangle.row(i);
            let choices: Vec<bool> = (0..row.len()).map(|k| best[k + 1] > best[k]).collect();
            best = row
                .iter()
                .zip(&choices)
                .enumerate()
                .map(|(k, (&v, &right))| v + if right { best[k + 1] } else { best[k] })
                .collect();
            step_right[i] = choices;
        }

        let mut columns = Vec::with_capacity(height);
        let mut col = 0usize;
        columns.push(col);
        for choices in &step_right {
            if choices[col] {
                col += 1;
            }
            columns.push(col);
        }
        MaxPath {
            sum: best[0],
            columns,
        }
    }
}

impl MaxPathSolver for PathReconstructor {
    fn name(&self) -> &'static str {
        "path"
    }

    fn max_path(&self, triangle: &Triangle) -> Value {
        self.best_path(triangle).sum
    }
}

/// Shorthand for `PathReconstructor.best_path(triangle)`.
pub fn best_path(triangle: &Triangle) -> MaxPath {
    PathReconstructor.best_path(triangle)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_path() {
        let t = Triangle::from_slices(&[&[3], &[7, 4], &[2, 4, 6], &[8, 5, 9, 3]]).unwrap();
        let p = best_path(&t);
        assert_eq!(p.sum, 23);
        assert_eq!(p.columns, vec![0, 0, 1, 2]);
        assert_eq!(p.values(&t), vec![3, 7, 4, 9]);
    }

    #[test]
    fn single_row_path() {
        let p = best_path(&Triangle::filled(1, 5));
        assert_eq!(p, MaxPath { sum: 5, columns: vec![0] });
    }

    #[test]
    fn ties_keep_the_column() {
        let p = best_path(&Triangle::filled(5, 0));
        assert_eq!(p.sum, 0);
        assert_eq!(p.columns, vec![0; 5]);
    }

    #[test]
    #[should_panic]
    fn values_panics_on_a_shorter_triangle() {
        let t = Triangle::from_slices(&[&[1], &[0, 1], &[0, 0, 1]]).unwrap();
        let p = best_path(&t);
        p.values(&Triangle::filled(1, 1));
    }

    #[test]
    fn right_edge_path() {
        let t = Triangle::from_slices(&[&[1], &[0, 1], &[0, 0, 1]]).unwrap();
        let p = best_path(&t);
        assert_eq!(p.columns, vec![0, 1, 2]);
        assert_eq!(t.path_sum(&p.columns), Some(p.sum));
    }
}
