use crate::core::ProblemType;
use crate::core::dataset::DataError;
use crate::evaluation::splitters::SplitError;
use crate::learners::LearnerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("unsupported problem type: {0}")]
    UnsupportedProblemType(String),

    #[error("unsupported evaluation kind: {0}")]
    UnsupportedEvaluationKind(String),

    #[error("invalid evaluation parameters: {0}")]
    InvalidParameters(String),

    #[error("train_size must be in 1..{rows}, got {train_size}")]
    InvalidTrainSize { train_size: usize, rows: usize },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("evaluator expects a {expected} learner, got {found}")]
    LearnerMismatch {
        expected: ProblemType,
        found: ProblemType,
    },

    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Split(#[from] SplitError),

    #[error(transparent)]
    Learner(#[from] LearnerError),
}
