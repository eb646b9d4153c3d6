/// Impurity measure over a node's target distribution.
///
/// A distribution is a fixed-length vector of additive sufficient
/// statistics, so the statistics of a right child are the parent's minus
/// the left child's.
pub trait SplitCriterion {
    fn distribution_len(&self) -> usize;

    /// Adds one target to `distribution`.
    fn observe(&self, distribution: &mut [f64], target: f64);

    fn impurity(&self, distribution: &[f64]) -> f64;

    /// Number of samples summarized by `distribution`.
    fn weight(&self, distribution: &[f64]) -> f64;

    /// Impurity decrease obtained by splitting `pre_split_distribution`
    /// into `post_split_dists`.
    fn merit_of_split(&self, pre_split_distribution: &[f64], post_split_dists: &[Vec<f64>]) -> f64 {
        let total = self.weight(pre_split_distribution);
        if total <= 0.0 {
            return 0.0;
        }
        let weighted: f64 = post_split_dists
            .iter()
            .map(|d| self.weight(d) / total * self.impurity(d))
            .sum();
        self.impurity(pre_split_distribution) - weighted
    }
}
