use crate::learners::decision_tree::split_criteria::SplitCriterion;

/// Gini impurity over per-class counts. Targets are class indices.
pub struct GiniSplitCriterion {
    num_classes: usize,
}

impl GiniSplitCriterion {
    pub fn new(num_classes: usize) -> Self {
        Self { num_classes }
    }

    pub fn compute_gini(&self, distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        let mut gini = 1.0;
        for i in distribution {
            let rel_freq = i / distribution_sum_of_weights;
            gini -= rel_freq.powi(2);
        }
        gini
    }
}

impl SplitCriterion for GiniSplitCriterion {
    fn distribution_len(&self) -> usize {
        self.num_classes
    }

    #[inline]
    fn observe(&self, distribution: &mut [f64], target: f64) {
        distribution[target as usize] += 1.0;
    }

    fn impurity(&self, distribution: &[f64]) -> f64 {
        let total = self.weight(distribution);
        if total > 0.0 {
            self.compute_gini(distribution, total)
        } else {
            0.0
        }
    }

    #[inline]
    fn weight(&self, distribution: &[f64]) -> f64 {
        distribution.iter().sum()
    }
}
