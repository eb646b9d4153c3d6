use crate::evaluation::scoring::PredictionMode;
use thiserror::Error;

/// A scoring function could not produce a value for the given labels and
/// predictions. Always recoverable: the metric is reported as absent.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    #[error("cannot score an empty set of predictions")]
    EmptyInput,

    #[error("{expected} true labels but {found} predictions")]
    LengthMismatch { expected: usize, found: usize },

    #[error("only one class present in true labels; ROC AUC is not defined in that case")]
    SingleClass,

    #[error("target is multiclass ({classes} labels) but aggregation is binary-average")]
    MulticlassWithBinaryAverage { classes: usize },

    #[error("positive label 1 is not among the observed labels {present:?}")]
    PositiveLabelMissing { present: Vec<f64> },

    #[error("no probability column for class {0}")]
    MissingProbabilityColumn(f64),

    #[error("expected probabilities for classes 0..{expected}, got columns for {found:?}")]
    ProbabilityShape { expected: usize, found: Vec<f64> },

    #[error("scorer needs {expected:?} but received {found:?}")]
    WrongPredictionMode {
        expected: PredictionMode,
        found: PredictionMode,
    },

    #[error("R^2 is not well-defined with fewer than two samples")]
    TooFewSamples,
}
