use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum DataError {
    #[error("dataset is empty")]
    Empty,

    #[error("row {row} has {found} values, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("non-finite feature value at row {row}, column {col}")]
    NonFinite { row: usize, col: usize },

    #[error("non-finite label at position {0}")]
    NonFiniteLabel(usize),

    #[error("features have {features} rows but labels have {labels}")]
    RowCountMismatch { features: usize, labels: usize },
}
