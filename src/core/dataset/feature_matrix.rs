use crate::core::dataset::DataError;
use std::ops::Range;

/// Dense, row-major table of numeric features (rows = samples).
///
/// Values are validated once at construction: the table is rectangular,
/// non-empty and every value is finite.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    n_rows: usize,
    n_cols: usize,
    values: Vec<f64>,
}

impl FeatureMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DataError> {
        let Some(first) = rows.first() else {
            return Err(DataError::Empty);
        };
        let n_cols = first.len();
        if n_cols == 0 {
            return Err(DataError::Empty);
        }

        let n_rows = rows.len();
        let mut values = Vec::with_capacity(n_rows * n_cols);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != n_cols {
                return Err(DataError::RaggedRow {
                    row,
                    expected: n_cols,
                    found: r.len(),
                });
            }
            if let Some(col) = r.iter().position(|v| !v.is_finite()) {
                return Err(DataError::NonFinite { row, col });
            }
            values.extend(r);
        }

        Ok(Self {
            n_rows,
            n_cols,
            values,
        })
    }

    /// Builds a single-column matrix from a flat sequence of samples.
    pub fn from_column(values: Vec<f64>) -> Result<Self, DataError> {
        if values.is_empty() {
            return Err(DataError::Empty);
        }
        if let Some(row) = values.iter().position(|v| !v.is_finite()) {
            return Err(DataError::NonFinite { row, col: 0 });
        }
        Ok(Self {
            n_rows: values.len(),
            n_cols: 1,
            values,
        })
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    #[inline]
    pub fn row(&self, index: usize) -> &[f64] {
        let start = index * self.n_cols;
        &self.values[start..start + self.n_cols]
    }

    #[inline]
    pub fn value(&self, row: usize, col: usize) -> f64 {
        self.values[row * self.n_cols + col]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(self.n_cols)
    }

    /// Copies the given rows, in the given order, into a new matrix.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let mut values = Vec::with_capacity(indices.len() * self.n_cols);
        for &i in indices {
            values.extend_from_slice(self.row(i));
        }
        Self {
            n_rows: indices.len(),
            n_cols: self.n_cols,
            values,
        }
    }

    pub fn slice_rows(&self, range: Range<usize>) -> Self {
        let values = self.values[range.start * self.n_cols..range.end * self.n_cols].to_vec();
        Self {
            n_rows: range.len(),
            n_cols: self.n_cols,
            values,
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for FeatureMatrix {
    type Error = DataError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl TryFrom<Vec<f64>> for FeatureMatrix {
    type Error = DataError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_column(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_input_becomes_one_column() {
        let m = FeatureMatrix::try_from(vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(m.n_rows(), 3);
        assert_eq!(m.n_cols(), 1);
        assert_eq!(m.row(2), &[3.0]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = FeatureMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert_eq!(
            err,
            DataError::RaggedRow {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn empty_and_non_finite_are_rejected() {
        assert_eq!(FeatureMatrix::from_rows(vec![]), Err(DataError::Empty));
        assert_eq!(FeatureMatrix::from_rows(vec![vec![]]), Err(DataError::Empty));
        assert_eq!(
            FeatureMatrix::from_rows(vec![vec![0.0, f64::NAN]]),
            Err(DataError::NonFinite { row: 0, col: 1 })
        );
    }

    #[test]
    fn select_and_slice_rows() {
        let m = FeatureMatrix::from_rows(vec![
            vec![0.0, 0.5],
            vec![1.0, 1.5],
            vec![2.0, 2.5],
            vec![3.0, 3.5],
        ])
        .unwrap();

        let picked = m.select_rows(&[3, 0]);
        assert_eq!(picked.n_rows(), 2);
        assert_eq!(picked.row(0), &[3.0, 3.5]);
        assert_eq!(picked.row(1), &[0.0, 0.5]);

        let tail = m.slice_rows(1..4);
        assert_eq!(tail.n_rows(), 3);
        assert_eq!(tail.value(0, 1), 1.5);
        assert_eq!(tail.rows().count(), 3);
    }
}
