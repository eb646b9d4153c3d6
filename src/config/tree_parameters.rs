use crate::tasks::EvaluationError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_min_samples_split() -> usize {
    2
}
fn default_min_samples_leaf() -> usize {
    1
}

/// Growth limits shared by the classification and regression trees.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TreeParameters {
    #[serde(default)]
    #[schemars(
        title = "Max depth",
        description = "Maximum tree depth; unbounded when absent.",
        range(min = 1)
    )]
    pub max_depth: Option<usize>,

    #[serde(default = "default_min_samples_split")]
    #[schemars(
        title = "Min samples to split",
        description = "Smallest node that may still be split.",
        range(min = 2),
        default = "default_min_samples_split"
    )]
    pub min_samples_split: usize,

    #[serde(default = "default_min_samples_leaf")]
    #[schemars(
        title = "Min samples per leaf",
        description = "Smallest number of rows either child of a split may hold.",
        range(min = 1),
        default = "default_min_samples_leaf"
    )]
    pub min_samples_leaf: usize,
}

impl Default for TreeParameters {
    fn default() -> Self {
        Self {
            max_depth: None,
            min_samples_split: default_min_samples_split(),
            min_samples_leaf: default_min_samples_leaf(),
        }
    }
}

impl TreeParameters {
    pub fn validate(&self) -> Result<(), EvaluationError> {
        if self.max_depth == Some(0) {
            return Err(EvaluationError::InvalidConfig(
                "max_depth must be at least 1".into(),
            ));
        }
        if self.min_samples_split < 2 {
            return Err(EvaluationError::InvalidConfig(
                "min_samples_split must be at least 2".into(),
            ));
        }
        if self.min_samples_leaf < 1 {
            return Err(EvaluationError::InvalidConfig(
                "min_samples_leaf must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_apply_defaults() {
        let p: TreeParameters = serde_json::from_value(json!({})).unwrap();
        assert_eq!(p, TreeParameters::default());
        assert_eq!(p.max_depth, None);
        assert_eq!(p.min_samples_split, 2);
        assert_eq!(p.min_samples_leaf, 1);
    }

    #[test]
    fn validate_rejects_degenerate_limits() {
        assert!(TreeParameters::default().validate().is_ok());
        for bad in [
            TreeParameters {
                max_depth: Some(0),
                ..TreeParameters::default()
            },
            TreeParameters {
                min_samples_split: 1,
                ..TreeParameters::default()
            },
            TreeParameters {
                min_samples_leaf: 0,
                ..TreeParameters::default()
            },
        ] {
            assert!(matches!(
                bad.validate(),
                Err(EvaluationError::InvalidConfig(_))
            ));
        }
    }
}
