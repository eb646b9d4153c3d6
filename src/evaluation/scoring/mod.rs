mod aggregation;
mod error;
mod prediction;
mod scorer;
mod scoring_functions;
mod scoring_id;

pub use aggregation::Aggregation;
pub use error::ScoringError;
pub use prediction::{Prediction, PredictionMode};
pub use scorer::Scorer;
pub use scoring_functions::{
    accuracy_score, binary_roc_auc, label_binarize, mean_squared_error, precision_score,
    r2_score, recall_score, roc_auc_score,
};
pub use scoring_id::ScoringId;
