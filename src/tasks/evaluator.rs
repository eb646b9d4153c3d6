use crate::config::{ConfigChoice, EvaluationChoice, EvaluationKind, EvaluatorConfig};
use crate::core::ProblemType;
use crate::core::dataset::{DataError, FeatureMatrix, Labels};
use crate::evaluation::scoring::{Aggregation, Prediction, PredictionMode, Scorer};
use crate::evaluation::{MetricCollection, MetricSpec};
use crate::learners::{DecisionTreeClassifier, DecisionTreeRegressor, Learner, LearnerError};
use crate::tasks::EvaluationError;
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, error};

/// Evaluates one learner for a declared problem type.
///
/// The learner is refitted on every split; entry points take `&mut self`, so
/// one evaluator runs one evaluation at a time.
pub struct Evaluator {
    problem_type: ProblemType,
    learner: Box<dyn Learner>,
    config: EvaluatorConfig,
}

/// Which pass a score belongs to, for diagnostics.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Stage {
    Fold(usize),
    TrainTest,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Fold(i) => write!(f, "{i}"),
            Stage::TrainTest => f.write_str("train_test"),
        }
    }
}

/// Scorers resolved for a single evaluation call.
pub(crate) struct ResolvedScoring {
    pub(crate) aggregation: Aggregation,
    pub(crate) class_count: usize,
    pub(crate) scorers: Vec<(MetricSpec, Scorer)>,
}

impl Evaluator {
    pub fn new(problem_type: ProblemType, config: EvaluatorConfig) -> Result<Self, EvaluationError> {
        config.validate()?;
        let learner = Self::default_learner(problem_type, &config);
        Ok(Self {
            problem_type,
            learner,
            config,
        })
    }

    /// Evaluator with the default configuration.
    pub fn for_problem(problem_type: ProblemType) -> Self {
        let config = EvaluatorConfig::default();
        let learner = Self::default_learner(problem_type, &config);
        Self {
            problem_type,
            learner,
            config,
        }
    }

    /// Parses `"classification"` / `"regression"`.
    pub fn from_problem_type_str(problem_type: &str) -> Result<Self, EvaluationError> {
        Ok(Self::for_problem(ProblemType::parse(problem_type)?))
    }

    /// Evaluator around a caller-supplied learner, which must solve the same
    /// problem type.
    pub fn with_learner(
        problem_type: ProblemType,
        learner: Box<dyn Learner>,
        config: EvaluatorConfig,
    ) -> Result<Self, EvaluationError> {
        config.validate()?;
        let found = learner.problem_type();
        if found != problem_type {
            return Err(EvaluationError::LearnerMismatch {
                expected: problem_type,
                found,
            });
        }
        Ok(Self {
            problem_type,
            learner,
            config,
        })
    }

    fn default_learner(problem_type: ProblemType, config: &EvaluatorConfig) -> Box<dyn Learner> {
        match problem_type {
            ProblemType::Classification => Box::new(DecisionTreeClassifier::new(
                config.tree.clone(),
                config.seeds.classifier,
            )),
            ProblemType::Regression => Box::new(DecisionTreeRegressor::new(
                config.tree.clone(),
                config.seeds.regressor,
            )),
        }
    }

    #[inline]
    pub fn problem_type(&self) -> ProblemType {
        self.problem_type
    }

    #[inline]
    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    #[inline]
    pub fn learner(&self) -> &dyn Learner {
        self.learner.as_ref()
    }

    /// Runs the evaluation described by `choice`.
    pub fn evaluate(
        &mut self,
        x: &FeatureMatrix,
        y: &Labels,
        choice: &EvaluationChoice,
    ) -> Result<MetricCollection, EvaluationError> {
        match choice {
            EvaluationChoice::Cv(params) => {
                let n_folds = params.n_folds.unwrap_or(self.config.n_folds);
                self.evaluate_cv_with_folds(x, y, n_folds)
            }
            EvaluationChoice::TrainTest(params) => self.evaluate_train_test(x, y, params.train_size),
        }
    }

    /// String-keyed dispatch: `kind` is `"cv"` or `"train_test"`, `params`
    /// the matching parameter object (`null` counts as `{}`).
    pub fn compute_metrics(
        &mut self,
        x: &FeatureMatrix,
        y: &Labels,
        kind: &str,
        params: Value,
    ) -> Result<MetricCollection, EvaluationError> {
        let kind = EvaluationKind::from_str(kind)
            .map_err(|_| EvaluationError::UnsupportedEvaluationKind(kind.to_string()))?;
        let params = if params.is_null() {
            Value::Object(Map::new())
        } else {
            params
        };
        let choice = EvaluationChoice::from_parts(kind, params)
            .map_err(|e| EvaluationError::InvalidParameters(format!("{kind}: {e}")))?;
        self.evaluate(x, y, &choice)
    }

    pub(crate) fn check_rows(x: &FeatureMatrix, y: &Labels) -> Result<(), EvaluationError> {
        if x.n_rows() != y.len() {
            return Err(DataError::RowCountMismatch {
                features: x.n_rows(),
                labels: y.len(),
            }
            .into());
        }
        Ok(())
    }

    /// Resolves this problem type's scorers against the labels of the call.
    pub(crate) fn resolve_scoring(&self, y: &Labels) -> ResolvedScoring {
        let class_count = y.class_count();
        let aggregation = Aggregation::for_class_count(class_count);
        debug!(%aggregation, class_count, "resolved metric aggregation");
        let scorers = self
            .problem_type
            .scorings()
            .iter()
            .map(|spec| (*spec, Scorer::resolve(spec.scoring, aggregation, class_count)))
            .collect();
        ResolvedScoring {
            aggregation,
            class_count,
            scorers,
        }
    }

    #[inline]
    pub(crate) fn fit(&mut self, x: &FeatureMatrix, y: &[f64]) -> Result<(), LearnerError> {
        self.learner.fit(x, y)
    }

    fn predict(&self, mode: PredictionMode, x: &FeatureMatrix) -> Result<Prediction, LearnerError> {
        Ok(match mode {
            PredictionMode::Labels => Prediction::Labels(self.learner.predict(x)?),
            PredictionMode::Probabilities => {
                Prediction::Probabilities(self.learner.predict_proba(x)?)
            }
        })
    }

    /// Predicts `x_test` in the scorer's mode and scores it. A scoring
    /// failure is logged and yields `None`; learner failures propagate.
    pub(crate) fn score_on(
        &self,
        scorer: &Scorer,
        x_test: &FeatureMatrix,
        y_test: &[f64],
        stage: Stage,
    ) -> Result<Option<f64>, EvaluationError> {
        let prediction = self.predict(scorer.prediction_mode(), x_test)?;
        match scorer.score(y_test, &prediction) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                error!(scoring = %scorer.id(), fold = %stage, error = %e, "metric computation failed");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{binary_dataset, regression_dataset};
    use crate::testing::stubs::ConstantClassifier;
    use serde_json::json;

    #[test]
    fn default_learner_matches_problem_type() {
        for pt in [ProblemType::Classification, ProblemType::Regression] {
            let ev = Evaluator::for_problem(pt);
            assert_eq!(ev.problem_type(), pt);
            assert_eq!(ev.learner().problem_type(), pt);
        }
    }

    #[test]
    fn unknown_problem_type_is_rejected() {
        assert!(matches!(
            Evaluator::from_problem_type_str("ranking"),
            Err(EvaluationError::UnsupportedProblemType(ref s)) if s == "ranking"
        ));
        let ev = Evaluator::from_problem_type_str("regression").unwrap();
        assert_eq!(ev.problem_type(), ProblemType::Regression);
    }

    #[test]
    fn injected_learner_must_match() {
        let err = Evaluator::with_learner(
            ProblemType::Regression,
            Box::new(ConstantClassifier::new(0.0)),
            EvaluatorConfig::default(),
        )
        .err()
        .unwrap();
        assert!(matches!(
            err,
            EvaluationError::LearnerMismatch {
                expected: ProblemType::Regression,
                found: ProblemType::Classification
            }
        ));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = EvaluatorConfig {
            n_folds: 1,
            ..EvaluatorConfig::default()
        };
        assert!(matches!(
            Evaluator::new(ProblemType::Classification, config),
            Err(EvaluationError::InvalidConfig(_))
        ));
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let (x, y) = binary_dataset(20, 1);
        let mut ev = Evaluator::for_problem(ProblemType::Classification);
        assert!(matches!(
            ev.compute_metrics(&x, &y, "bootstrap", Value::Null),
            Err(EvaluationError::UnsupportedEvaluationKind(ref k)) if k == "bootstrap"
        ));
    }

    #[test]
    fn string_dispatch_matches_typed_dispatch() {
        let (x, y) = regression_dataset(60, 4);
        let mut a = Evaluator::for_problem(ProblemType::Regression);
        let mut b = Evaluator::for_problem(ProblemType::Regression);

        let by_str = a.compute_metrics(&x, &y, "cv", Value::Null).unwrap();
        let typed = b.evaluate_cv(&x, &y).unwrap();
        assert_eq!(by_str, typed);

        let by_str = a
            .compute_metrics(&x, &y, "train_test", json!({ "train_size": 45 }))
            .unwrap();
        let typed = b.evaluate_train_test(&x, &y, 45).unwrap();
        assert_eq!(by_str, typed);
    }

    #[test]
    fn bad_params_are_invalid_parameters() {
        let (x, y) = regression_dataset(30, 4);
        let mut ev = Evaluator::for_problem(ProblemType::Regression);
        assert!(matches!(
            ev.compute_metrics(&x, &y, "train_test", json!({})),
            Err(EvaluationError::InvalidParameters(_))
        ));
    }

    #[test]
    fn row_count_mismatch_is_a_data_error() {
        let (x, _) = binary_dataset(20, 1);
        let (_, y) = binary_dataset(10, 1);
        let mut ev = Evaluator::for_problem(ProblemType::Classification);
        assert!(matches!(
            ev.evaluate_cv(&x, &y),
            Err(EvaluationError::Data(DataError::RowCountMismatch {
                features: 20,
                labels: 10
            }))
        ));
    }
}
