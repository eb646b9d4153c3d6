use crate::core::dataset::DataError;
use crate::utils::math::unique_sorted;
use std::ops::Range;

/// One-dimensional target vector.
///
/// Class labels are expected to be integer codes (`0.0`, `1.0`, ...);
/// regression targets are arbitrary finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Labels(Vec<f64>);

impl Labels {
    pub fn new(values: Vec<f64>) -> Result<Self, DataError> {
        if values.is_empty() {
            return Err(DataError::Empty);
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(DataError::NonFiniteLabel(i));
        }
        Ok(Self(values))
    }

    /// Flattens a rectangular label matrix in row-major order.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, DataError> {
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(DataError::RaggedRow {
                row,
                expected: width,
                found: r.len(),
            });
        }
        Self::new(rows.into_iter().flatten().collect())
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Distinct label values in ascending order.
    pub fn unique(&self) -> Vec<f64> {
        unique_sorted(&self.0)
    }

    pub fn class_count(&self) -> usize {
        self.unique().len()
    }

    pub fn select(&self, indices: &[usize]) -> Vec<f64> {
        indices.iter().map(|&i| self.0[i]).collect()
    }

    pub fn slice(&self, range: Range<usize>) -> Vec<f64> {
        self.0[range].to_vec()
    }
}

impl TryFrom<Vec<f64>> for Labels {
    type Error = DataError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Labels {
    type Error = DataError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_matrix_is_flattened() {
        let y = Labels::from_rows(vec![vec![1.0], vec![0.0], vec![1.0]]).unwrap();
        assert_eq!(y.as_slice(), &[1.0, 0.0, 1.0]);
    }

    #[test]
    fn class_count_counts_distinct_values() {
        let y = Labels::new(vec![2.0, 0.0, 1.0, 2.0, 0.0]).unwrap();
        assert_eq!(y.unique(), vec![0.0, 1.0, 2.0]);
        assert_eq!(y.class_count(), 3);
    }

    #[test]
    fn rejects_empty_and_nan() {
        assert_eq!(Labels::new(vec![]), Err(DataError::Empty));
        assert_eq!(
            Labels::new(vec![0.0, f64::NAN]),
            Err(DataError::NonFiniteLabel(1))
        );
    }

    #[test]
    fn select_keeps_requested_order() {
        let y = Labels::new(vec![10.0, 11.0, 12.0, 13.0]).unwrap();
        assert_eq!(y.select(&[3, 1]), vec![13.0, 11.0]);
        assert_eq!(y.slice(2..4), vec![12.0, 13.0]);
    }
}
