use crate::config::TreeParameters;
use crate::core::ProblemType;
use crate::core::dataset::FeatureMatrix;
use crate::learners::decision_tree::builder::TreeBuilder;
use crate::learners::decision_tree::node::Node;
use crate::learners::decision_tree::split_criteria::VarianceSplitCriterion;
use crate::learners::{Learner, LearnerError, ProbabilityMatrix};

/// CART regressor minimizing within-node squared error. Leaves predict the
/// mean target of their training rows.
pub struct DecisionTreeRegressor {
    params: TreeParameters,
    seed: u64,
    n_features: usize,
    root: Option<Node>,
}

impl DecisionTreeRegressor {
    pub fn new(params: TreeParameters, seed: u64) -> Self {
        Self {
            params,
            seed,
            n_features: 0,
            root: None,
        }
    }

    pub fn depth(&self) -> Option<usize> {
        self.root.as_ref().map(Node::depth)
    }
}

impl Learner for DecisionTreeRegressor {
    fn problem_type(&self) -> ProblemType {
        ProblemType::Regression
    }

    fn fit(&mut self, x: &FeatureMatrix, y: &[f64]) -> Result<(), LearnerError> {
        if x.n_rows() != y.len() {
            return Err(LearnerError::LengthMismatch {
                features: x.n_rows(),
                targets: y.len(),
            });
        }
        if y.is_empty() {
            return Err(LearnerError::EmptyTrainingSet);
        }

        let criterion = VarianceSplitCriterion::new();
        self.root = Some(TreeBuilder::new(&criterion, &self.params, x, y, self.seed).build());
        self.n_features = x.n_cols();
        Ok(())
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, LearnerError> {
        let root = self.root.as_ref().ok_or(LearnerError::NotFitted)?;
        if x.n_cols() != self.n_features {
            return Err(LearnerError::FeatureCountMismatch {
                expected: self.n_features,
                found: x.n_cols(),
            });
        }
        Ok(x.rows()
            .map(|row| VarianceSplitCriterion::mean(root.leaf_distribution(row)))
            .collect())
    }

    fn predict_proba(&self, _x: &FeatureMatrix) -> Result<ProbabilityMatrix, LearnerError> {
        Err(LearnerError::ProbabilitiesUnsupported("decision tree regressor"))
    }
}
