use crate::config::TreeParameters;
use crate::tasks::EvaluationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Base random state the default seeds are derived from.
pub const DEFAULT_RANDOM_STATE: u64 = 1754;

fn default_n_folds() -> usize {
    5
}

/// Fixed seeds for every source of randomness in an evaluation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct Seeds {
    #[schemars(title = "Classifier seed")]
    pub classifier: u64,
    #[schemars(title = "Regressor seed")]
    pub regressor: u64,
    #[schemars(title = "Stratified split seed")]
    pub stratified_split: u64,
    #[schemars(title = "Split seed")]
    pub split: u64,
}

impl Seeds {
    pub fn from_random_state(base: u64) -> Self {
        Self {
            classifier: base.wrapping_add(1),
            regressor: base.wrapping_add(2),
            stratified_split: base.wrapping_add(3),
            split: base.wrapping_add(4),
        }
    }

    fn all(&self) -> [u64; 4] {
        [
            self.classifier,
            self.regressor,
            self.stratified_split,
            self.split,
        ]
    }
}

impl Default for Seeds {
    fn default() -> Self {
        Self::from_random_state(DEFAULT_RANDOM_STATE)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EvaluatorConfig {
    #[serde(default)]
    pub seeds: Seeds,

    #[serde(default = "default_n_folds")]
    #[schemars(
        title = "Folds",
        description = "Cross-validation fold count.",
        range(min = 2),
        default = "default_n_folds"
    )]
    pub n_folds: usize,

    #[serde(default)]
    pub tree: TreeParameters,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            seeds: Seeds::default(),
            n_folds: default_n_folds(),
            tree: TreeParameters::default(),
        }
    }
}

impl EvaluatorConfig {
    pub fn with_random_state(base: u64) -> Self {
        Self {
            seeds: Seeds::from_random_state(base),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), EvaluationError> {
        let seeds = self.seeds.all();
        for (i, a) in seeds.iter().enumerate() {
            if seeds[i + 1..].contains(a) {
                return Err(EvaluationError::InvalidConfig(format!(
                    "seeds must be distinct, {a} is used twice"
                )));
            }
        }
        if self.n_folds < 2 {
            return Err(EvaluationError::InvalidConfig(format!(
                "n_folds must be at least 2, got {}",
                self.n_folds
            )));
        }
        self.tree.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_derive_from_random_state() {
        let c = EvaluatorConfig::default();
        assert_eq!(c.n_folds, 5);
        assert_eq!(
            c.seeds,
            Seeds {
                classifier: 1755,
                regressor: 1756,
                stratified_split: 1757,
                split: 1758,
            }
        );
        assert!(c.validate().is_ok());
    }

    #[test]
    fn empty_json_is_default() {
        let c: EvaluatorConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(c, EvaluatorConfig::default());

        let c: EvaluatorConfig =
            serde_json::from_value(json!({ "seeds": { "split": 99 }, "n_folds": 3 })).unwrap();
        assert_eq!(c.seeds.split, 99);
        assert_eq!(c.seeds.classifier, 1755);
        assert_eq!(c.n_folds, 3);
    }

    #[test]
    fn validate_rejects_shared_seeds_and_one_fold() {
        let mut c = EvaluatorConfig::with_random_state(7);
        c.seeds.split = c.seeds.classifier;
        assert!(matches!(
            c.validate(),
            Err(EvaluationError::InvalidConfig(_))
        ));

        let c = EvaluatorConfig {
            n_folds: 1,
            ..EvaluatorConfig::default()
        };
        assert!(matches!(
            c.validate(),
            Err(EvaluationError::InvalidConfig(_))
        ));
    }
}
