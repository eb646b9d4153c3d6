/// Row-major class-probability table.
///
/// Column `j` holds the probability of `classes()[j]`; classes are ascending.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbabilityMatrix {
    classes: Vec<f64>,
    n_rows: usize,
    values: Vec<f64>,
}

impl ProbabilityMatrix {
    pub fn from_rows(classes: Vec<f64>, rows: Vec<Vec<f64>>) -> Self {
        let n_rows = rows.len();
        let mut values = Vec::with_capacity(n_rows * classes.len());
        for row in rows {
            debug_assert_eq!(row.len(), classes.len());
            values.extend(row);
        }
        Self {
            classes,
            n_rows,
            values,
        }
    }

    #[inline]
    pub fn classes(&self) -> &[f64] {
        &self.classes
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    #[inline]
    pub fn n_cols(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn row(&self, index: usize) -> &[f64] {
        let k = self.n_cols();
        &self.values[index * k..(index + 1) * k]
    }

    pub fn column(&self, index: usize) -> Vec<f64> {
        (0..self.n_rows).map(|r| self.row(r)[index]).collect()
    }

    /// Probabilities for `class`, if that class was seen during fitting.
    pub fn column_of(&self, class: f64) -> Option<Vec<f64>> {
        self.classes
            .iter()
            .position(|&c| c == class)
            .map(|j| self.column(j))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_follow_classes() {
        let p = ProbabilityMatrix::from_rows(
            vec![0.0, 1.0],
            vec![vec![0.8, 0.2], vec![0.1, 0.9], vec![0.5, 0.5]],
        );
        assert_eq!(p.n_rows(), 3);
        assert_eq!(p.n_cols(), 2);
        assert_eq!(p.row(1), &[0.1, 0.9]);
        assert_eq!(p.column_of(1.0), Some(vec![0.2, 0.9, 0.5]));
        assert_eq!(p.column_of(2.0), None);
    }
}
