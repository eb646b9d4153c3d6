use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

/// How per-class precision, recall and ROC AUC collapse into one scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, IntoStaticStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Aggregation {
    /// Score the positive class (label `1`) only.
    BinaryAverage,
    /// Pool every class decision before computing the ratio.
    Micro,
}

impl Aggregation {
    /// `Micro` for more than two observed classes, `BinaryAverage` otherwise.
    #[inline]
    pub fn for_class_count(class_count: usize) -> Self {
        if class_count > 2 {
            Aggregation::Micro
        } else {
            Aggregation::BinaryAverage
        }
    }
}
