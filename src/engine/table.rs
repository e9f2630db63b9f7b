//! LCS length table construction.
//!
//! The classic O(n·m) dynamic program: cell `[i][j]` holds the LCS length of
//! `A[0..i)` and `B[0..j)`. The full dense table is kept because the
//! backtrace needs every cell; linear-space refinements (Hirschberg) are a
//! deliberate non-goal.

use crate::engine::Comparator;
use crate::error::{DiffError, Result};

/// Dense `(n+1) × (m+1)` LCS length table, row-major.
///
/// Immutable once built. Row 0 and column 0 are all zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LcsTable {
    cells: Vec<usize>,
    rows: usize,
    cols: usize,
}

impl LcsTable {
    /// Build the table for sequences `a` and `b`.
    ///
    /// Invokes the comparator exactly `|a| * |b|` times. A comparator fault
    /// aborts construction; no partial table is returned.
    pub fn build<T>(a: &[T], b: &[T], equal: &Comparator<T>) -> Result<Self> {
        let rows = a.len() + 1;
        let cols = b.len() + 1;
        let mut table = Self {
            cells: vec![0; rows * cols],
            rows,
            cols,
        };

        for i in 1..rows {
            for j in 1..cols {
                let same = equal.equal(&a[i - 1], &b[j - 1]).map_err(|fault| {
                    DiffError::comparison(
                        format!("comparing A[{}] with B[{}]", i - 1, j - 1),
                        fault,
                    )
                })?;
                let value = if same {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                table.set(i, j, value);
            }
        }

        Ok(table)
    }

    /// Cell `[i][j]`: LCS length of `A[0..i)` and `B[0..j)`.
    ///
    /// # Panics
    ///
    /// Out-of-range indices are a programming error, not a user-facing one.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        self.cells[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: usize) {
        self.cells[i * self.cols + j] = value;
    }

    /// Number of rows, `|A| + 1`.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `|B| + 1`.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// The LCS length of the full sequences, `table[n][m]`.
    #[must_use]
    pub fn lcs_length(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ComparisonFault;

    fn str_table(a: &[&str], b: &[&str]) -> LcsTable {
        let a: Vec<String> = a.iter().map(ToString::to_string).collect();
        let b: Vec<String> = b.iter().map(ToString::to_string).collect();
        LcsTable::build(&a, &b, &Comparator::default()).unwrap()
    }

    #[test]
    fn test_empty_sequences_yield_zero_table() {
        let table = str_table(&[], &[]);
        assert_eq!(table.rows(), 1);
        assert_eq!(table.cols(), 1);
        assert_eq!(table.lcs_length(), 0);
    }

    #[test]
    fn test_one_empty_side() {
        let table = str_table(&["a", "b"], &[]);
        assert_eq!(table.lcs_length(), 0);
        let table = str_table(&[], &["a", "b"]);
        assert_eq!(table.lcs_length(), 0);
    }

    #[test]
    fn test_identical_sequences() {
        let table = str_table(&["x", "y", "z"], &["x", "y", "z"]);
        assert_eq!(table.lcs_length(), 3);
    }

    #[test]
    fn test_classic_example() {
        // LCS of abcd / acbd is length 3 ("acd" or "abd")
        let table = str_table(&["a", "b", "c", "d"], &["a", "c", "b", "d"]);
        assert_eq!(table.lcs_length(), 3);
    }

    #[test]
    fn test_recurrence_invariant_holds() {
        let a: Vec<String> = ["a", "b", "c", "a", "b"].iter().map(ToString::to_string).collect();
        let b: Vec<String> = ["b", "a", "c", "b"].iter().map(ToString::to_string).collect();
        let table = LcsTable::build(&a, &b, &Comparator::default()).unwrap();

        for i in 0..table.rows() {
            assert_eq!(table.get(i, 0), 0);
        }
        for j in 0..table.cols() {
            assert_eq!(table.get(0, j), 0);
        }
        for i in 1..table.rows() {
            for j in 1..table.cols() {
                let expected = if a[i - 1] == b[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                assert_eq!(table.get(i, j), expected, "cell [{i}][{j}]");
            }
        }
    }

    #[test]
    fn test_faulting_comparator_aborts_build() {
        let cmp: Comparator<i32> =
            Comparator::fallible(|_, _| Err(ComparisonFault("boom".to_string())));
        let result = LcsTable::build(&[1, 2], &[3], &cmp);
        assert!(matches!(result, Err(DiffError::Comparison { .. })));
    }
}
