use crate::core::ProblemType;
use crate::core::dataset::{FeatureMatrix, Labels};
use crate::evaluation::scoring::{Aggregation, ScoringId};
use crate::evaluation::splitters::{KFold, Splitter, StratifiedKFold};
use crate::evaluation::{BasicEstimator, MetricCollection};
use crate::tasks::EvaluationError;
use crate::tasks::evaluator::{Evaluator, Stage};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Per-fold scores of one cross-validation run.
///
/// A fold score is `None` when the scoring function failed on that fold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CvScores {
    aggregation: Aggregation,
    class_count: usize,
    n_folds: usize,
    fold_scores: BTreeMap<ScoringId, Vec<Option<f64>>>,
}

impl CvScores {
    #[inline]
    pub fn aggregation(&self) -> Aggregation {
        self.aggregation
    }

    #[inline]
    pub fn class_count(&self) -> usize {
        self.class_count
    }

    #[inline]
    pub fn n_folds(&self) -> usize {
        self.n_folds
    }

    /// Scores of `scoring` in fold order; empty if it was not evaluated.
    pub fn fold_scores(&self, scoring: ScoringId) -> &[Option<f64>] {
        self.fold_scores
            .get(&scoring)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Mean of the available fold scores; `None` if every fold failed.
    pub fn mean(&self, scoring: ScoringId) -> Option<f64> {
        BasicEstimator::mean_of_available(self.fold_scores(scoring))
    }

    pub fn means(&self) -> BTreeMap<ScoringId, Option<f64>> {
        self.fold_scores
            .keys()
            .map(|&id| (id, self.mean(id)))
            .collect()
    }
}

impl Evaluator {
    /// Cross-validates with the configured fold count and returns the raw
    /// per-fold scores.
    pub fn cross_validate(
        &mut self,
        x: &FeatureMatrix,
        y: &Labels,
    ) -> Result<CvScores, EvaluationError> {
        let n_folds = self.config().n_folds;
        self.cross_validate_with_folds(x, y, n_folds)
    }

    pub fn cross_validate_with_folds(
        &mut self,
        x: &FeatureMatrix,
        y: &Labels,
        n_folds: usize,
    ) -> Result<CvScores, EvaluationError> {
        Self::check_rows(x, y)?;
        let resolved = self.resolve_scoring(y);

        let seeds = self.config().seeds;
        let splitter: Box<dyn Splitter> = match self.problem_type() {
            ProblemType::Classification => {
                Box::new(StratifiedKFold::new(n_folds, seeds.stratified_split))
            }
            ProblemType::Regression => Box::new(KFold::new(n_folds, seeds.split)),
        };
        let folds = splitter.split(y.as_slice())?;

        let mut fold_scores: BTreeMap<ScoringId, Vec<Option<f64>>> = resolved
            .scorers
            .iter()
            .map(|(spec, _)| (spec.scoring, Vec::with_capacity(folds.len())))
            .collect();

        for (i, fold) in folds.iter().enumerate() {
            debug!(
                fold = i,
                train = fold.train.len(),
                test = fold.test.len(),
                "fitting fold"
            );
            let x_train = x.select_rows(&fold.train);
            let y_train = y.select(&fold.train);
            self.fit(&x_train, &y_train)?;

            let x_test = x.select_rows(&fold.test);
            let y_test = y.select(&fold.test);
            for (spec, scorer) in &resolved.scorers {
                let score = self.score_on(scorer, &x_test, &y_test, Stage::Fold(i))?;
                if let Some(scores) = fold_scores.get_mut(&spec.scoring) {
                    scores.push(score);
                }
            }
        }

        Ok(CvScores {
            aggregation: resolved.aggregation,
            class_count: resolved.class_count,
            n_folds: folds.len(),
            fold_scores,
        })
    }

    /// Cross-validated metrics: each metric is the mean of its available
    /// fold scores.
    pub fn evaluate_cv(
        &mut self,
        x: &FeatureMatrix,
        y: &Labels,
    ) -> Result<MetricCollection, EvaluationError> {
        let n_folds = self.config().n_folds;
        self.evaluate_cv_with_folds(x, y, n_folds)
    }

    pub fn evaluate_cv_with_folds(
        &mut self,
        x: &FeatureMatrix,
        y: &Labels,
        n_folds: usize,
    ) -> Result<MetricCollection, EvaluationError> {
        let scores = self.cross_validate_with_folds(x, y, n_folds)?;
        let metrics = MetricCollection::from_scores(self.problem_type().scorings(), &scores.means());
        info!(
            problem_type = %self.problem_type(),
            n_folds = scores.n_folds(),
            available = metrics.iter().filter(|m| m.is_available()).count(),
            "cross-validation finished"
        );
        Ok(metrics)
    }
}
