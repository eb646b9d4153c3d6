use crate::core::ProblemType;
use crate::core::dataset::FeatureMatrix;
use crate::learners::ProbabilityMatrix;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LearnerError {
    #[error("cannot fit on an empty training set")]
    EmptyTrainingSet,

    #[error("features have {features} rows but targets have {targets}")]
    LengthMismatch { features: usize, targets: usize },

    #[error("learner has not been fitted")]
    NotFitted,

    #[error("expected {expected} features, got {found}")]
    FeatureCountMismatch { expected: usize, found: usize },

    #[error("{0} does not produce class probabilities")]
    ProbabilitiesUnsupported(&'static str),
}

/// Batch learner re-fitted from scratch on every call to [`fit`].
///
/// [`fit`]: Learner::fit
pub trait Learner {
    /// Task this learner solves; fixed for the lifetime of the instance.
    fn problem_type(&self) -> ProblemType;

    /// Discards any previous model and trains on `x` / `y`.
    fn fit(&mut self, x: &FeatureMatrix, y: &[f64]) -> Result<(), LearnerError>;

    /// One prediction per row: a class label or a regression value.
    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, LearnerError>;

    /// Per-class probabilities, one row per sample and one column per
    /// class seen during [`fit`](Learner::fit).
    fn predict_proba(&self, x: &FeatureMatrix) -> Result<ProbabilityMatrix, LearnerError>;
}
