use crate::evaluation::scoring::ScoringId;
use serde::Serialize;
use std::collections::BTreeMap;

/// Display name paired with the scoring computation behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricSpec {
    pub name: &'static str,
    pub scoring: ScoringId,
}

pub const CLASSIFICATION_SCORING: [MetricSpec; 4] = [
    MetricSpec {
        name: "Accuracy",
        scoring: ScoringId::Accuracy,
    },
    MetricSpec {
        name: "Precision",
        scoring: ScoringId::Precision,
    },
    MetricSpec {
        name: "Recall",
        scoring: ScoringId::Recall,
    },
    MetricSpec {
        name: "ROC AUC",
        scoring: ScoringId::RocAuc,
    },
];

pub const REGRESSION_SCORING: [MetricSpec; 2] = [
    MetricSpec {
        name: "Mean Squared Error",
        scoring: ScoringId::MeanSquaredError,
    },
    MetricSpec {
        name: "R-squared",
        scoring: ScoringId::R2,
    },
];

/// One reported metric. `value` is `None` when the score could not be
/// computed, which is distinct from a zero or NaN score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    name: String,
    scoring: ScoringId,
    value: Option<f64>,
}

impl Metric {
    #[inline]
    pub fn new<N: Into<String>>(name: N, scoring: ScoringId, value: Option<f64>) -> Self {
        Self {
            name: name.into(),
            scoring,
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scoring(&self) -> ScoringId {
        self.scoring
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn is_available(&self) -> bool {
        self.value.is_some()
    }
}

/// Ordered, appendable list of metrics produced by one evaluation call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct MetricCollection {
    metrics: Vec<Metric>,
}

impl MetricCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Packages `scores` in the order of `specs`; a spec with no score is
    /// reported as absent.
    pub fn from_scores(specs: &[MetricSpec], scores: &BTreeMap<ScoringId, Option<f64>>) -> Self {
        let mut out = Self::new();
        for spec in specs {
            let value = scores.get(&spec.scoring).copied().flatten();
            out.push(Metric::new(spec.name, spec.scoring, value));
        }
        out
    }

    pub fn push(&mut self, metric: Metric) {
        self.metrics.push(metric);
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Metric> {
        self.metrics.iter()
    }

    pub fn get(&self, name: &str) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.name == name)
    }

    pub fn by_scoring(&self, scoring: ScoringId) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.scoring == scoring)
    }

    /// Value of the named metric; `None` if missing or absent.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Metric::value)
    }

    pub fn names(&self) -> Vec<&str> {
        self.metrics.iter().map(Metric::name).collect()
    }
}

impl IntoIterator for MetricCollection {
    type Item = Metric;
    type IntoIter = std::vec::IntoIter<Metric>;

    fn into_iter(self) -> Self::IntoIter {
        self.metrics.into_iter()
    }
}

impl<'a> IntoIterator for &'a MetricCollection {
    type Item = &'a Metric;
    type IntoIter = std::slice::Iter<'a, Metric>;

    fn into_iter(self) -> Self::IntoIter {
        self.metrics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_scores_keeps_spec_order_and_marks_missing_absent() {
        let mut scores = BTreeMap::new();
        scores.insert(ScoringId::RocAuc, Some(0.9));
        scores.insert(ScoringId::Accuracy, Some(0.8));
        scores.insert(ScoringId::Recall, None);

        let m = MetricCollection::from_scores(&CLASSIFICATION_SCORING, &scores);
        assert_eq!(m.names(), vec!["Accuracy", "Precision", "Recall", "ROC AUC"]);
        assert_eq!(m.value("Accuracy"), Some(0.8));
        assert_eq!(m.value("Precision"), None);
        assert_eq!(m.value("Recall"), None);
        assert_eq!(m.by_scoring(ScoringId::RocAuc).unwrap().value(), Some(0.9));
        assert!(!m.get("Recall").unwrap().is_available());
    }

    #[test]
    fn serializes_absent_as_null() {
        let mut m = MetricCollection::new();
        m.push(Metric::new("R-squared", ScoringId::R2, None));
        m.push(Metric::new("Mean Squared Error", ScoringId::MeanSquaredError, Some(1.5)));
        let v = serde_json::to_value(&m).unwrap();
        assert_eq!(
            v,
            json!([
                { "name": "R-squared", "scoring": "r2", "value": null },
                { "name": "Mean Squared Error", "scoring": "mean_squared_error", "value": 1.5 }
            ])
        );
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mut m = MetricCollection::new();
        m.push(Metric::new("b", ScoringId::Recall, Some(1.0)));
        m.push(Metric::new("a", ScoringId::Accuracy, Some(0.0)));
        let names: Vec<String> = m.into_iter().map(|x| x.name().to_string()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
