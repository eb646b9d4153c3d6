use crate::learners::ProbabilityMatrix;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictionMode {
    /// `Learner::predict`: class labels or regression values.
    Labels,
    /// `Learner::predict_proba`.
    Probabilities,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    Labels(Vec<f64>),
    Probabilities(ProbabilityMatrix),
}

impl Prediction {
    pub fn mode(&self) -> PredictionMode {
        match self {
            Prediction::Labels(_) => PredictionMode::Labels,
            Prediction::Probabilities(_) => PredictionMode::Probabilities,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Prediction::Labels(v) => v.len(),
            Prediction::Probabilities(p) => p.n_rows(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
