use crate::evaluation::scoring::{
    Aggregation, Prediction, PredictionMode, ScoringError, ScoringId, accuracy_score,
    mean_squared_error, precision_score, r2_score, recall_score, roc_auc_score,
};

/// A scoring id bound to the aggregation mode and class count of one
/// evaluation call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scorer {
    Accuracy,
    Precision(Aggregation),
    Recall(Aggregation),
    RocAuc {
        aggregation: Aggregation,
        class_count: usize,
    },
    MeanSquaredError,
    R2,
}

impl Scorer {
    pub fn resolve(id: ScoringId, aggregation: Aggregation, class_count: usize) -> Self {
        match id {
            ScoringId::Accuracy => Scorer::Accuracy,
            ScoringId::Precision => Scorer::Precision(aggregation),
            ScoringId::Recall => Scorer::Recall(aggregation),
            ScoringId::RocAuc => Scorer::RocAuc {
                aggregation,
                class_count,
            },
            ScoringId::MeanSquaredError => Scorer::MeanSquaredError,
            ScoringId::R2 => Scorer::R2,
        }
    }

    pub fn id(&self) -> ScoringId {
        match self {
            Scorer::Accuracy => ScoringId::Accuracy,
            Scorer::Precision(_) => ScoringId::Precision,
            Scorer::Recall(_) => ScoringId::Recall,
            Scorer::RocAuc { .. } => ScoringId::RocAuc,
            Scorer::MeanSquaredError => ScoringId::MeanSquaredError,
            Scorer::R2 => ScoringId::R2,
        }
    }

    /// Which learner output this scorer consumes.
    pub fn prediction_mode(&self) -> PredictionMode {
        match self {
            Scorer::RocAuc { .. } => PredictionMode::Probabilities,
            _ => PredictionMode::Labels,
        }
    }

    /// Aggregation this scorer applies, if it aggregates over classes at all.
    pub fn aggregation(&self) -> Option<Aggregation> {
        match self {
            Scorer::Precision(a) | Scorer::Recall(a) => Some(*a),
            Scorer::RocAuc { aggregation, .. } => Some(*aggregation),
            _ => None,
        }
    }

    pub fn score(&self, y_true: &[f64], prediction: &Prediction) -> Result<f64, ScoringError> {
        match (self, prediction) {
            (Scorer::Accuracy, Prediction::Labels(y_pred)) => accuracy_score(y_true, y_pred),
            (Scorer::Precision(a), Prediction::Labels(y_pred)) => {
                precision_score(y_true, y_pred, *a)
            }
            (Scorer::Recall(a), Prediction::Labels(y_pred)) => recall_score(y_true, y_pred, *a),
            (
                Scorer::RocAuc {
                    aggregation,
                    class_count,
                },
                Prediction::Probabilities(proba),
            ) => roc_auc_score(y_true, proba, *aggregation, *class_count),
            (Scorer::MeanSquaredError, Prediction::Labels(y_pred)) => {
                mean_squared_error(y_true, y_pred)
            }
            (Scorer::R2, Prediction::Labels(y_pred)) => r2_score(y_true, y_pred),
            (scorer, prediction) => Err(ScoringError::WrongPredictionMode {
                expected: scorer.prediction_mode(),
                found: prediction.mode(),
            }),
        }
    }
}
