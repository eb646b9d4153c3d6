use crate::evaluation::estimators::Estimator;

/// Running mean that ignores NaN observations: `mean = sum / len`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: f64,
    sum: f64,
}

impl BasicEstimator {
    /// Mean of the available scores; `None` when every score is missing.
    pub fn mean_of_available(scores: &[Option<f64>]) -> Option<f64> {
        let mut est = Self::default();
        for v in scores.iter().flatten() {
            est.add(*v);
        }
        est.estimation()
    }
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1.0;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> Option<f64> {
        if self.len > 0.0 {
            Some(self.sum / self.len)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_has_no_estimate() {
        assert_eq!(BasicEstimator::default().estimation(), None);
    }

    #[test]
    fn nan_is_skipped() {
        let mut e = BasicEstimator::default();
        e.add(1.0);
        e.add(f64::NAN);
        e.add(0.0);
        assert!((e.estimation().unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn missing_scores_are_excluded_from_mean() {
        let m = BasicEstimator::mean_of_available(&[Some(0.5), None, Some(1.0), None]);
        assert!((m.unwrap() - 0.75).abs() < 1e-12);
    }

    #[test]
    fn all_missing_is_absent_not_zero() {
        assert_eq!(BasicEstimator::mean_of_available(&[None, None, None]), None);
        assert_eq!(BasicEstimator::mean_of_available(&[Some(f64::NAN), None]), None);
    }
}
