//! The triangle data model.
//!
//! A [`Triangle`] is an ordered sequence of rows, row `i` holding exactly
//! `i + 1` values. The shape is checked once in [`Triangle::new`]; after that
//! the value is immutable and every solver reads it through `&Triangle`.

use crate::error::{Result, TriangleError};
use crate::utils::element_count;

/// Element type carried by triangles and returned by solvers.
pub type Value = i64;

/// An immutable, well-formed numeric triangle.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Triangle {
    rows: Vec<Vec<Value>>,
}

impl Triangle {
    /// Validate `rows` and wrap them.
    ///
    /// # Errors
    /// [`TriangleError::Empty`] if there are no rows, and
    /// [`TriangleError::RowLength`] for the first row whose length is not its
    /// index plus one, and [`TriangleError::Overflow`] when a path sum could
    /// leave the [`Value`] range.
    pub fn new(rows: Vec<Vec<Value>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(TriangleError::Empty);
        }
        for (row, values) in rows.iter().enumerate() {
            if values.len() != row + 1 {
                return Err(TriangleError::RowLength {
                    row,
                    expected: row + 1,
                    found: values.len(),
                });
            }
        }
        check_sum_bound(rows.len(), rows.iter().flatten().copied())?;
        Ok(Self { rows })
    }

    /// Build from borrowed rows, e.g. `Triangle::from_slices(&[&[3], &[7, 4]])`.
    pub fn from_slices(rows: &[&[Value]]) -> Result<Self> {
        Self::new(rows.iter().map(|r| r.to_vec()).collect())
    }

    /// A triangle of `height` rows with every element set to `value`.
    ///
    /// # Panics
    /// Panics if `height == 0` or if `height * |value|` exceeds `i64::MAX`.
    pub fn filled(height: usize, value: Value) -> Self {
        assert!(height > 0, "height must be positive");
        if let Err(e) = check_sum_bound(height, std::iter::once(value)) {
            panic!("{e}");
        }
        Self {
            rows: (0..height).map(|i| vec![value; i + 1]).collect(),
        }
    }

    /// Callers guarantee the triangular shape.
    fn from_rows_trusted(rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(!rows.is_empty());
        debug_assert!(rows.iter().enumerate().all(|(i, r)| r.len() == i + 1));
        Self { rows }
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Total number of elements, `height * (height + 1) / 2`.
    #[inline]
    pub fn len(&self) -> usize {
        element_count(self.height())
    }

    /// Always false: a triangle has at least one element.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The single element of row 0.
    #[inline]
    pub fn root(&self) -> Value {
        self.rows[0][0]
    }

    /// Row `i`.
    ///
    /// # Panics
    /// Panics if `i >= height()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[Value] {
        &self.rows[i]
    }

    /// The bottom row.
    #[inline]
    pub fn last_row(&self) -> &[Value] {
        &self.rows[self.rows.len() - 1]
    }

    /// Element at `(row, col)`, or `None` when outside the triangle.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Value> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl DoubleEndedIterator<Item = &[Value]> + ExactSizeIterator {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Give back the rows, top to bottom.
    pub fn into_rows(self) -> Vec<Vec<Value>> {
        self.rows
    }

    /// Split into the two overlapping sub-triangles below the root.
    ///
    /// `left` drops the last element of every row below the first, `right`
    /// drops the first. Paths through `left` correspond to a first step that
    /// keeps the column; paths through `right` step to column + 1.
    ///
    /// Returns `None` for a single-row triangle, which has nothing below the
    /// root.
    pub fn split(&self) -> Option<(Triangle, Triangle)> {
        if self.height() < 2 {
            return None;
        }
        let (left, right): (Vec<_>, Vec<_>) = self.rows[1..]
            .iter()
            .map(|row| (row[..row.len() - 1].to_vec(), row[1..].to_vec()))
            .unzip();
        Some((
            Triangle::from_rows_trusted(left),
            Triangle::from_rows_trusted(right),
        ))
    }

    /// Sum of the elements visited by `columns`, one per row.
    ///
    /// Returns `None` unless `columns` describes a valid top-to-bottom path:
    /// one entry per row, starting at column 0, each step moving by 0 or 1.
    pub fn path_sum(&self, columns: &[usize]) -> Option<Value> {
        if columns.len() != self.height() || columns[0] != 0 {
            return None;
        }
        if columns
            .windows(2)
            .any(|w| w[1] < w[0] || w[1] - w[0] > 1)
        {
            return None;
        }
        Some(
            self.rows
                .iter()
                .zip(columns)
                .map(|(row, &col)| row[col])
                .sum(),
        )
    }
}

/// Every partial path sum is bounded by `height * max |v|`; rejecting
/// triangles where that bound exceeds `Value::MAX` keeps all solver arithmetic
/// in range.
fn check_sum_bound<I>(height: usize, values: I) -> Result<()>
where
    I: IntoIterator<Item = Value>,
{
    let max_abs = values.into_iter().map(Value::unsigned_abs).max().unwrap_or(0);
    let fits = (height as u64)
        .checked_mul(max_abs)
        .is_some_and(|bound| bound <= Value::MAX as u64);
    if fits {
        Ok(())
    } else {
        Err(TriangleError::Overflow { height, max_abs })
    }
}

impl TryFrom<Vec<Vec<Value>>> for Triangle {
    type Error = TriangleError;

    fn try_from(rows: Vec<Vec<Value>>) -> Result<Self> {
        Self::new(rows)
    }
}
