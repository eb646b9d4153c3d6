mod estimators;
mod metric;
pub mod scoring;
pub mod splitters;

pub use estimators::{BasicEstimator, Estimator};
pub use metric::{CLASSIFICATION_SCORING, Metric, MetricCollection, MetricSpec, REGRESSION_SCORING};
