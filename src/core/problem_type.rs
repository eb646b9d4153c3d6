use crate::evaluation::{CLASSIFICATION_SCORING, MetricSpec, REGRESSION_SCORING};
use crate::tasks::EvaluationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

/// Declared kind of supervised problem; decides the learner family and the
/// metric table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ProblemType {
    Classification,
    Regression,
}

impl ProblemType {
    /// Parses `"classification"` or `"regression"`.
    pub fn parse(s: &str) -> Result<Self, EvaluationError> {
        Self::from_str(s).map_err(|_| EvaluationError::UnsupportedProblemType(s.to_string()))
    }

    /// Metrics reported for this problem type, in output order.
    #[inline]
    pub fn scorings(self) -> &'static [MetricSpec] {
        match self {
            ProblemType::Classification => &CLASSIFICATION_SCORING,
            ProblemType::Regression => &REGRESSION_SCORING,
        }
    }
}
