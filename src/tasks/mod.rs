mod cross_validation;
mod error;
mod evaluator;

pub use cross_validation::CvScores;
pub use error::EvaluationError;
pub use evaluator::Evaluator;
