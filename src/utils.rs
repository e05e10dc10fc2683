//! Index arithmetic shared by the solvers.
//!
//! A triangle of height `n` stored row by row occupies `n(n+1)/2` slots, and
//! row `i` starts at slot `i(i+1)/2`.

/// Number of elements in a triangle with `height` rows.
#[inline]
pub fn element_count(height: usize) -> usize {
    height * (height + 1) / 2
}

/// Flat index of the first element of `row`.
#[inline]
pub fn row_offset(row: usize) -> usize {
    element_count(row)
}

/// Flat index of `(row, col)`; `col` must be `<= row`.
#[inline]
pub fn flat_index(row: usize, col: usize) -> usize {
    debug_assert!(col <= row, "column {col} outside row {row}");
    row_offset(row) + col
}

#[cfg(test)]
mod tests {
    use super::{element_count, flat_index, row_offset};

    #[test]
    fn counts_small_heights() {
        assert_eq!(element_count(0), 0);
        assert_eq!(element_count(1), 1);
        assert_eq!(element_count(2), 3);
        assert_eq!(element_count(4), 10);
        assert_eq!(element_count(100), 5050);
    }

    #[test]
    fn offsets_are_contiguous() {
        for row in 0..200 {
            assert_eq!(row_offset(row + 1), row_offset(row) + row + 1);
        }
    }

    #[test]
    fn flat_index_covers_every_slot_once() {
        let height = 30;
        let mut seen = vec![false; element_count(height)];
        for row in 0..height {
            for col in 0..=row {
                let idx = flat_index(row, col);
                assert!(!seen[idx], "slot {idx} visited twice");
                seen[idx] = true;
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
