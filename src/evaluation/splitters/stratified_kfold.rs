use crate::evaluation::splitters::splitter::{check_sizes, folds_from_assignment};
use crate::evaluation::splitters::{Fold, SplitError, Splitter};
use crate::utils::math::unique_sorted;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// K-fold splitter that preserves the class mix in every fold.
///
/// Members of each class are shuffled, the classes are laid end to end and
/// samples are dealt to folds round-robin, so per-class counts of any two
/// folds differ by at most one.
#[derive(Debug, Clone)]
pub struct StratifiedKFold {
    n_splits: usize,
    shuffle: bool,
    seed: u64,
}

impl StratifiedKFold {
    pub fn new(n_splits: usize, seed: u64) -> Self {
        Self {
            n_splits,
            shuffle: true,
            seed,
        }
    }

    pub fn without_shuffle(mut self) -> Self {
        self.shuffle = false;
        self
    }
}

impl Splitter for StratifiedKFold {
    fn n_splits(&self) -> usize {
        self.n_splits
    }

    fn split(&self, labels: &[f64]) -> Result<Vec<Fold>, SplitError> {
        check_sizes(self.n_splits, labels.len())?;

        let classes = unique_sorted(labels);
        let mut members: Vec<Vec<usize>> = vec![Vec::new(); classes.len()];
        for (i, y) in labels.iter().enumerate() {
            let c = classes
                .binary_search_by(|probe| probe.total_cmp(y))
                .unwrap_or_else(|c| c);
            members[c].push(i);
        }

        let largest_class = members.iter().map(Vec::len).max().unwrap_or(0);
        if largest_class < self.n_splits {
            return Err(SplitError::ClassesTooSmall {
                n_folds: self.n_splits,
                largest_class,
            });
        }

        if self.shuffle {
            let mut rng = StdRng::seed_from_u64(self.seed);
            for class_members in &mut members {
                class_members.shuffle(&mut rng);
            }
        }

        let mut assignment = vec![0; labels.len()];
        for (pos, &i) in members.iter().flatten().enumerate() {
            assignment[i] = pos % self.n_splits;
        }
        Ok(folds_from_assignment(&assignment, self.n_splits))
    }
}
