pub mod config;
pub mod core;
pub mod evaluation;
pub mod learners;
pub mod tasks;
pub mod utils;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use crate::config::{EvaluationChoice, EvaluatorConfig};
pub use crate::core::ProblemType;
pub use crate::core::dataset::{FeatureMatrix, Labels};
pub use crate::evaluation::{Metric, MetricCollection};
pub use crate::tasks::{CvScores, EvaluationError, Evaluator};
