use crate::evaluation::splitters::splitter::{check_sizes, folds_from_assignment};
use crate::evaluation::splitters::{Fold, SplitError, Splitter};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// K-fold splitter over shuffled indices. The first `n % k` folds hold one
/// extra sample.
#[derive(Debug, Clone)]
pub struct KFold {
    n_splits: usize,
    shuffle: bool,
    seed: u64,
}

impl KFold {
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

impl Splitter for KFold {
    fn n_splits(&self) -> usize {
        self.n_splits
    }

    fn split(&self, labels: &[f64]) -> Result<Vec<Fold>, SplitError> {
        let n_samples = labels.len();
        check_sizes(self.n_splits, n_samples)?;

        let mut indices: Vec<usize> = (0..n_samples).collect();
        if self.shuffle {
            indices.shuffle(&mut StdRng::seed_from_u64(self.seed));
        }

        let fold_size = n_samples / self.n_splits;
        let remainder = n_samples % self.n_splits;

        let mut assignment = vec![0; n_samples];
        let mut start = 0;
        for k in 0..self.n_splits {
            let end = start + fold_size + usize::from(k < remainder);
            for &i in &indices[start..end] {
                assignment[i] = k;
            }
            start = end;
        }

        Ok(folds_from_assignment(&assignment, self.n_splits))
    }
}
