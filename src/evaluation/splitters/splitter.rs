use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SplitError {
    #[error("at least 2 folds are required, got {0}")]
    TooFewFolds(usize),

    #[error("cannot make {n_folds} folds from {n_samples} samples")]
    TooFewSamples { n_folds: usize, n_samples: usize },

    #[error("no class has at least {n_folds} members (largest has {largest_class})")]
    ClassesTooSmall { n_folds: usize, largest_class: usize },
}

/// Train/held-out row indices of one fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fold {
    pub train: Vec<usize>,
    pub test: Vec<usize>,
}

/// Partitions sample indices into folds. Every index appears in exactly
/// one fold's `test`; `train` is its complement.
pub trait Splitter {
    fn n_splits(&self) -> usize;

    fn split(&self, labels: &[f64]) -> Result<Vec<Fold>, SplitError>;
}

/// Turns a per-sample fold assignment into train/test index lists.
pub(crate) fn folds_from_assignment(assignment: &[usize], n_splits: usize) -> Vec<Fold> {
    (0..n_splits)
        .map(|k| {
            let (test, train): (Vec<usize>, Vec<usize>) =
                (0..assignment.len()).partition(|&i| assignment[i] == k);
            Fold { train, test }
        })
        .collect()
}

pub(crate) fn check_sizes(n_splits: usize, n_samples: usize) -> Result<(), SplitError> {
    if n_splits < 2 {
        return Err(SplitError::TooFewFolds(n_splits));
    }
    if n_splits > n_samples {
        return Err(SplitError::TooFewSamples {
            n_folds: n_splits,
            n_samples,
        });
    }
    Ok(())
}
