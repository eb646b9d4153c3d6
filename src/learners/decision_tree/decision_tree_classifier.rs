use crate::config::TreeParameters;
use crate::core::ProblemType;
use crate::core::dataset::FeatureMatrix;
use crate::learners::decision_tree::builder::TreeBuilder;
use crate::learners::decision_tree::node::Node;
use crate::learners::decision_tree::split_criteria::GiniSplitCriterion;
use crate::learners::{Learner, LearnerError, ProbabilityMatrix};
use crate::utils::math::unique_sorted;

/// CART classifier using Gini impurity.
///
/// Classes are the distinct training labels in ascending order; leaf
/// probabilities are the class frequencies of the training rows that reached
/// the leaf.
pub struct DecisionTreeClassifier {
    params: TreeParameters,
    seed: u64,
    classes: Vec<f64>,
    n_features: usize,
    root: Option<Node>,
}

impl DecisionTreeClassifier {
    pub fn new(params: TreeParameters, seed: u64) -> Self {
        Self {
            params,
            seed,
            classes: Vec::new(),
            n_features: 0,
            root: None,
        }
    }

    /// Classes seen by the last fit.
    pub fn classes(&self) -> &[f64] {
        &self.classes
    }

    pub fn depth(&self) -> Option<usize> {
        self.root.as_ref().map(Node::depth)
    }

    fn fitted_root(&self, x: &FeatureMatrix) -> Result<&Node, LearnerError> {
        let root = self.root.as_ref().ok_or(LearnerError::NotFitted)?;
        if x.n_cols() != self.n_features {
            return Err(LearnerError::FeatureCountMismatch {
                expected: self.n_features,
                found: x.n_cols(),
            });
        }
        Ok(root)
    }

    fn normalized(counts: &[f64]) -> Vec<f64> {
        let total: f64 = counts.iter().sum();
        if total > 0.0 {
            counts.iter().map(|c| c / total).collect()
        } else {
            vec![1.0 / counts.len() as f64; counts.len()]
        }
    }

    #[inline]
    fn argmax(v: &[f64]) -> usize {
        let mut best = 0;
        for (i, &p) in v.iter().enumerate() {
            if p > v[best] {
                best = i;
            }
        }
        best
    }
}

impl Learner for DecisionTreeClassifier {
    fn problem_type(&self) -> ProblemType {
        ProblemType::Classification
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

        let classes = unique_sorted(y);
        let targets: Vec<f64> = y
            .iter()
            .map(|v| {
                let idx = classes
                    .binary_search_by(|c| c.total_cmp(v))
                    .unwrap_or_else(|i| i);
                idx as f64
            })
            .collect();

        let criterion = GiniSplitCriterion::new(classes.len());
        let root = TreeBuilder::new(&criterion, &self.params, x, &targets, self.seed).build();

        self.classes = classes;
        self.n_features = x.n_cols();
        self.root = Some(root);
        Ok(())
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, LearnerError> {
        let root = self.fitted_root(x)?;
        Ok(x.rows()
            .map(|row| self.classes[Self::argmax(root.leaf_distribution(row))])
            .collect())
    }

    fn predict_proba(&self, x: &FeatureMatrix) -> Result<ProbabilityMatrix, LearnerError> {
        let root = self.fitted_root(x)?;
        let rows = x
            .rows()
            .map(|row| Self::normalized(root.leaf_distribution(row)))
            .collect();
        Ok(ProbabilityMatrix::from_rows(self.classes.clone(), rows))
    }
}
