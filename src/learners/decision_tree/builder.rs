use crate::config::TreeParameters;
use crate::core::dataset::FeatureMatrix;
use crate::learners::decision_tree::node::Node;
use crate::learners::decision_tree::split_criteria::SplitCriterion;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

const MIN_IMPURITY: f64 = 1e-12;

struct SplitCandidate {
    feature: usize,
    threshold: f64,
    merit: f64,
}

/// Greedy depth-first CART growth shared by both tree flavours.
///
/// Features are visited in a seeded random order at every node and a
/// candidate only replaces the incumbent when strictly better, so ties are
/// resolved by the seed alone.
pub(crate) struct TreeBuilder<'a, C: SplitCriterion> {
    criterion: &'a C,
    params: &'a TreeParameters,
    x: &'a FeatureMatrix,
    targets: &'a [f64],
    rng: StdRng,
}

impl<'a, C: SplitCriterion> TreeBuilder<'a, C> {
    pub fn new(
        criterion: &'a C,
        params: &'a TreeParameters,
        x: &'a FeatureMatrix,
        targets: &'a [f64],
        seed: u64,
    ) -> Self {
        Self {
            criterion,
            params,
            x,
            targets,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn build(mut self) -> Node {
        let indices: Vec<usize> = (0..self.targets.len()).collect();
        self.grow(indices, 0)
    }

    fn distribution(&self, indices: &[usize]) -> Vec<f64> {
        let mut d = vec![0.0; self.criterion.distribution_len()];
        for &i in indices {
            self.criterion.observe(&mut d, self.targets[i]);
        }
        d
    }

    fn grow(&mut self, indices: Vec<usize>, depth: usize) -> Node {
        let distribution = self.distribution(&indices);
        let n = indices.len();

        let depth_reached = self.params.max_depth.is_some_and(|max| depth >= max);
        if depth_reached
            || n < self.params.min_samples_split
            || n < 2 * self.params.min_samples_leaf
            || self.criterion.impurity(&distribution) <= MIN_IMPURITY
        {
            return Node::Leaf { distribution };
        }

        let Some(split) = self.best_split(&indices, &distribution) else {
            return Node::Leaf { distribution };
        };

        let (left, right): (Vec<usize>, Vec<usize>) = indices
            .into_iter()
            .partition(|&i| self.x.value(i, split.feature) <= split.threshold);

        Node::Split {
            feature: split.feature,
            threshold: split.threshold,
            left: Box::new(self.grow(left, depth + 1)),
            right: Box::new(self.grow(right, depth + 1)),
        }
    }

    fn best_split(&mut self, indices: &[usize], distribution: &[f64]) -> Option<SplitCandidate> {
        let mut features: Vec<usize> = (0..self.x.n_cols()).collect();
        features.shuffle(&mut self.rng);

        let min_leaf = self.params.min_samples_leaf;
        let mut sorted = indices.to_vec();
        let mut best: Option<SplitCandidate> = None;

        for feature in features {
            sorted.sort_by(|&a, &b| self.x.value(a, feature).total_cmp(&self.x.value(b, feature)));

            let mut left = vec![0.0; self.criterion.distribution_len()];
            for pos in 0..sorted.len().saturating_sub(1) {
                self.criterion.observe(&mut left, self.targets[sorted[pos]]);

                let here = self.x.value(sorted[pos], feature);
                let next = self.x.value(sorted[pos + 1], feature);
                if next <= here {
                    continue;
                }
                let n_left = pos + 1;
                if n_left < min_leaf || sorted.len() - n_left < min_leaf {
                    continue;
                }

                let right: Vec<f64> = distribution.iter().zip(&left).map(|(t, l)| t - l).collect();
                let merit = self
                    .criterion
                    .merit_of_split(distribution, &[left.clone(), right]);

                if best.as_ref().is_none_or(|b| merit > b.merit) {
                    best = Some(SplitCandidate {
                        feature,
                        threshold: midpoint(here, next),
                        merit,
                    });
                }
            }
        }
        best
    }
}

#[inline]
fn midpoint(low: f64, high: f64) -> f64 {
    let mid = low / 2.0 + high / 2.0;
    // rounding can land the midpoint on `high`, which would send it left
    if mid >= high || !mid.is_finite() { low } else { mid }
}
