use crate::learners::decision_tree::split_criteria::SplitCriterion;

const COUNT: usize = 0;
const SUM: usize = 1;
const SUM_SQ: usize = 2;

/// Mean squared error around the node mean, kept as `[n, sum, sum of squares]`.
#[derive(Default)]
pub struct VarianceSplitCriterion;

impl VarianceSplitCriterion {
    pub fn new() -> Self {
        Self
    }

    #[inline]
    pub fn mean(distribution: &[f64]) -> f64 {
        if distribution[COUNT] > 0.0 {
            distribution[SUM] / distribution[COUNT]
        } else {
            0.0
        }
    }
}

impl SplitCriterion for VarianceSplitCriterion {
    fn distribution_len(&self) -> usize {
        3
    }

    #[inline]
    fn observe(&self, distribution: &mut [f64], target: f64) {
        distribution[COUNT] += 1.0;
        distribution[SUM] += target;
        distribution[SUM_SQ] += target * target;
    }

    fn impurity(&self, distribution: &[f64]) -> f64 {
        let n = distribution[COUNT];
        if n <= 0.0 {
            return 0.0;
        }
        let mean = distribution[SUM] / n;
        (distribution[SUM_SQ] / n - mean * mean).max(0.0)
    }

    #[inline]
    fn weight(&self, distribution: &[f64]) -> f64 {
        distribution[COUNT]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist(values: &[f64]) -> Vec<f64> {
        let c = VarianceSplitCriterion::new();
        let mut d = vec![0.0; c.distribution_len()];
        for &v in values {
            c.observe(&mut d, v);
        }
        d
    }

    #[test]
    fn impurity_is_population_variance() {
        let c = VarianceSplitCriterion::new();
        let d = dist(&[1.0, 2.0, 3.0, 4.0]);
        assert!((c.impurity(&d) - 1.25).abs() < 1e-12);
        assert!((VarianceSplitCriterion::mean(&d) - 2.5).abs() < 1e-12);
    }

    #[test]
    fn separating_two_levels_removes_variance() {
        let c = VarianceSplitCriterion::new();
        let pre = dist(&[0.0, 0.0, 10.0, 10.0]);
        let merit = c.merit_of_split(&pre, &[dist(&[0.0, 0.0]), dist(&[10.0, 10.0])]);
        assert!((merit - 25.0).abs() < 1e-9);
    }
}
