use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Canonical identifier of a scoring computation, distinct from the
/// human-readable metric name.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScoringId {
    Accuracy,
    Precision,
    Recall,
    RocAuc,
    MeanSquaredError,
    #[serde(rename = "r2")]
    #[strum(serialize = "r2")]
    R2,
}
