use crate::core::ProblemType;
use crate::core::dataset::FeatureMatrix;
use crate::learners::{Learner, LearnerError, ProbabilityMatrix};
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct SpyLog {
    fits: Vec<usize>,
    predicts: Vec<usize>,
}

/// Wraps a learner and records the row count of every `fit` and every
/// prediction call (`predict` or `predict_proba`).
pub struct SpyLearner<L> {
    inner: L,
    log: Rc<RefCell<SpyLog>>,
}

/// Read side of a [`SpyLearner`], usable after the learner was boxed.
#[derive(Clone)]
pub struct SpyHandle {
    log: Rc<RefCell<SpyLog>>,
}

impl<L: Learner> SpyLearner<L> {
    pub fn new(inner: L) -> (Self, SpyHandle) {
        let log = Rc::new(RefCell::new(SpyLog::default()));
        let handle = SpyHandle {
            log: Rc::clone(&log),
        };
        (Self { inner, log }, handle)
    }
}

impl SpyHandle {
    pub fn fit_rows(&self) -> Vec<usize> {
        self.log.borrow().fits.clone()
    }

    pub fn predict_rows(&self) -> Vec<usize> {
        self.log.borrow().predicts.clone()
    }
}

impl<L: Learner> Learner for SpyLearner<L> {
    fn problem_type(&self) -> ProblemType {
        self.inner.problem_type()
    }

    fn fit(&mut self, x: &FeatureMatrix, y: &[f64]) -> Result<(), LearnerError> {
        self.log.borrow_mut().fits.push(x.n_rows());
        self.inner.fit(x, y)
    }

    fn predict(&self, x: &FeatureMatrix) -> Result<Vec<f64>, LearnerError> {
        self.log.borrow_mut().predicts.push(x.n_rows());
        self.inner.predict(x)
    }

    fn predict_proba(&self, x: &FeatureMatrix) -> Result<ProbabilityMatrix, LearnerError> {
        self.log.borrow_mut().predicts.push(x.n_rows());
        self.inner.predict_proba(x)
    }
}
