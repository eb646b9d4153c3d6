use crate::core::ProblemType;
use crate::core::dataset::FeatureMatrix;
use crate::learners::{Learner, LearnerError, ProbabilityMatrix};

/// Predicts one fixed label for every row.
///
/// Its probabilities have a single column for that label, so any ROC AUC
/// that needs the positive class (or every class) fails to compute.
pub struct ConstantClassifier {
    label: f64,
}

impl ConstantClassifier {
    pub fn new(label: f64) -> Self {
        Self { label }
    }
}

impl Learner for ConstantClassifier {
    fn problem_type(&self) -> ProblemType {
        ProblemType::Classification
    }

    fn fit(&mut self, _x: &FeatureMatrix, _y: &[f64]) -> Result<(), LearnerError> {
        Ok(())
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, LearnerError> {
        Ok(vec![self.label; x.n_rows()])
    }

    fn predict_proba(&self, x: &FeatureMatrix) -> Result<ProbabilityMatrix, LearnerError> {
        Ok(ProbabilityMatrix::from_rows(
            vec![self.label],
            vec![vec![1.0]; x.n_rows()],
        ))
    }
}
