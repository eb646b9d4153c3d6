use crate::config::ConfigChoice;
use anyhow::Result;
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct CvParameters {
    #[serde(default)]
    #[schemars(
        title = "Folds",
        description = "Number of folds; the evaluator's configured count when absent.",
        range(min = 2)
    )]
    pub n_folds: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TrainTestParameters {
    #[schemars(
        title = "Train size",
        description = "Rows [0, train_size) train the model; the rest are held out.",
        range(min = 1)
    )]
    pub train_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
#[strum_discriminants(name(EvaluationKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "snake_case"))]
pub enum EvaluationChoice {
    #[strum_discriminants(strum(
        message = "Cross-validation",
        detailed_message = "Mean of per-fold scores over (stratified) k-fold splits."
    ))]
    Cv(CvParameters),
    #[strum_discriminants(strum(
        message = "Train/test split",
        detailed_message = "Single fit on a leading block of rows, scored on the remainder."
    ))]
    TrainTest(TrainTestParameters),
}

impl EvaluationChoice {
    #[inline]
    pub fn kind(&self) -> EvaluationKind {
        EvaluationKind::from(self)
    }
}

impl ConfigChoice for EvaluationChoice {
    type Kind = EvaluationKind;

    fn schema() -> Schema {
        schema_for!(EvaluationChoice)
    }

    fn default_params(kind: Self::Kind) -> Result<Value> {
        match kind {
            EvaluationKind::Cv => Ok(serde_json::to_value(CvParameters::default())?),
            EvaluationKind::TrainTest => {
                anyhow::bail!("train_test has no default train_size")
            }
        }
    }
}
