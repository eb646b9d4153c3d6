//! Scoring functions over true labels and predictions.
//!
//! Every function returns a [`ScoringError`] instead of a value when the
//! score is not defined for its input.

use crate::evaluation::scoring::{Aggregation, ScoringError};
use crate::learners::ProbabilityMatrix;
use crate::utils::math::{average_ranks, unique_sorted};

const POSITIVE_LABEL: f64 = 1.0;

#[inline]
fn check_lengths(y_true: &[f64], found: usize) -> Result<(), ScoringError> {
    if y_true.is_empty() {
        return Err(ScoringError::EmptyInput);
    }
    if y_true.len() != found {
        return Err(ScoringError::LengthMismatch {
            expected: y_true.len(),
            found,
        });
    }
    Ok(())
}

/// Fraction of exact label matches.
pub fn accuracy_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64, ScoringError> {
    check_lengths(y_true, y_pred.len())?;
    let correct = y_true.iter().zip(y_pred).filter(|(t, p)| t == p).count();
    Ok(correct as f64 / y_true.len() as f64)
}

/// True/false positive and false negative counts, either for the positive
/// label only or pooled over every observed label.
fn confusion_counts(
    y_true: &[f64],
    y_pred: &[f64],
    aggregation: Aggregation,
) -> Result<(f64, f64, f64), ScoringError> {
    check_lengths(y_true, y_pred.len())?;
    let present = unique_sorted(&[y_true, y_pred].concat());

    let labels = match aggregation {
        Aggregation::BinaryAverage => {
            if present.len() > 2 {
                return Err(ScoringError::MulticlassWithBinaryAverage {
                    classes: present.len(),
                });
            }
            if present.len() == 2 && !present.contains(&POSITIVE_LABEL) {
                return Err(ScoringError::PositiveLabelMissing { present });
            }
            vec![POSITIVE_LABEL]
        }
        Aggregation::Micro => present,
    };

    let (mut tp, mut fp, mut fn_) = (0.0, 0.0, 0.0);
    for label in labels {
        for (t, p) in y_true.iter().zip(y_pred) {
            match (*t == label, *p == label) {
                (true, true) => tp += 1.0,
                (false, true) => fp += 1.0,
                (true, false) => fn_ += 1.0,
                (false, false) => {}
            }
        }
    }
    Ok((tp, fp, fn_))
}

/// `tp / (tp + fp)`; zero when nothing was predicted positive.
pub fn precision_score(
    y_true: &[f64],
    y_pred: &[f64],
    aggregation: Aggregation,
) -> Result<f64, ScoringError> {
    let (tp, fp, _) = confusion_counts(y_true, y_pred, aggregation)?;
    Ok(if tp + fp > 0.0 { tp / (tp + fp) } else { 0.0 })
}

/// `tp / (tp + fn)`; zero when there are no true positives to find.
pub fn recall_score(
    y_true: &[f64],
    y_pred: &[f64],
    aggregation: Aggregation,
) -> Result<f64, ScoringError> {
    let (tp, _, fn_) = confusion_counts(y_true, y_pred, aggregation)?;
    Ok(if tp + fn_ > 0.0 { tp / (tp + fn_) } else { 0.0 })
}

/// One-vs-rest indicator matrix of `y` against classes `0..class_count`.
///
/// With two or fewer classes a single indicator column for the positive
/// label is produced.
pub fn label_binarize(y: &[f64], class_count: usize) -> Vec<Vec<f64>> {
    if class_count <= 2 {
        return y
            .iter()
            .map(|&v| vec![if v == POSITIVE_LABEL { 1.0 } else { 0.0 }])
            .collect();
    }
    y.iter()
        .map(|&v| {
            (0..class_count)
                .map(|c| if v == c as f64 { 1.0 } else { 0.0 })
                .collect()
        })
        .collect()
}

/// Area under the ROC curve for 0/1 targets, via the Mann-Whitney U
/// statistic with tied scores sharing their average rank.
pub fn binary_roc_auc(y_true: &[f64], scores: &[f64]) -> Result<f64, ScoringError> {
    check_lengths(y_true, scores.len())?;
    let n_pos = y_true.iter().filter(|&&t| t == 1.0).count();
    let n_neg = y_true.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return Err(ScoringError::SingleClass);
    }

    let ranks = average_ranks(scores);
    let pos_rank_sum: f64 = ranks
        .iter()
        .zip(y_true)
        .filter(|(_, t)| **t == 1.0)
        .map(|(r, _)| r)
        .sum();
    let (n_pos, n_neg) = (n_pos as f64, n_neg as f64);
    Ok((pos_rank_sum - n_pos * (n_pos + 1.0) / 2.0) / (n_pos * n_neg))
}

/// ROC AUC of class probabilities after binarizing `y_true` against
/// `0..class_count`.
///
/// - `BinaryAverage`: AUC of the positive-class column.
/// - `Micro`: AUC over the flattened indicator and probability matrices,
///   which must cover exactly the classes `0..class_count`.
///
/// Class labels must therefore be 0-based codes: with labels `1..=k` the
/// micro score is a [`ScoringError::ProbabilityShape`] failure.
pub fn roc_auc_score(
    y_true: &[f64],
    proba: &ProbabilityMatrix,
    aggregation: Aggregation,
    class_count: usize,
) -> Result<f64, ScoringError> {
    check_lengths(y_true, proba.n_rows())?;
    let indicator = label_binarize(y_true, class_count);

    match aggregation {
        Aggregation::BinaryAverage => {
            let truth: Vec<f64> = indicator.into_iter().map(|row| row[0]).collect();
            let scores = proba
                .column_of(POSITIVE_LABEL)
                .ok_or(ScoringError::MissingProbabilityColumn(POSITIVE_LABEL))?;
            binary_roc_auc(&truth, &scores)
        }
        Aggregation::Micro => {
            let expected = (0..class_count).map(|c| c as f64);
            if proba.n_cols() != class_count || !expected.eq(proba.classes().iter().copied()) {
                return Err(ScoringError::ProbabilityShape {
                    expected: class_count,
                    found: proba.classes().to_vec(),
                });
            }
            let truth: Vec<f64> = indicator.into_iter().flatten().collect();
            let scores: Vec<f64> = (0..proba.n_rows())
                .flat_map(|r| proba.row(r).iter().copied())
                .collect();
            binary_roc_auc(&truth, &scores)
        }
    }
}

pub fn mean_squared_error(y_true: &[f64], y_pred: &[f64]) -> Result<f64, ScoringError> {
    check_lengths(y_true, y_pred.len())?;
    let sse: f64 = y_true.iter().zip(y_pred).map(|(t, p)| (t - p).powi(2)).sum();
    Ok(sse / y_true.len() as f64)
}

/// Coefficient of determination `1 - SS_res / SS_tot`.
///
/// A constant target scores `1.0` when predicted exactly and `0.0`
/// otherwise.
pub fn r2_score(y_true: &[f64], y_pred: &[f64]) -> Result<f64, ScoringError> {
    check_lengths(y_true, y_pred.len())?;
    if y_true.len() < 2 {
        return Err(ScoringError::TooFewSamples);
    }
    let mean = y_true.iter().sum::<f64>() / y_true.len() as f64;
    let ss_res: f64 = y_true.iter().zip(y_pred).map(|(t, p)| (t - p).powi(2)).sum();
    let ss_tot: f64 = y_true.iter().map(|t| (t - mean).powi(2)).sum();

    if ss_tot == 0.0 {
        return Ok(if ss_res == 0.0 { 1.0 } else { 0.0 });
    }
    Ok(1.0 - ss_res / ss_tot)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn accuracy_counts_matches() {
        let acc = accuracy_score(&[0.0, 1.0, 1.0, 0.0], &[0.0, 1.0, 0.0, 0.0]).unwrap();
        assert!((acc - 0.75).abs() < EPS);
        assert_eq!(accuracy_score(&[], &[]), Err(ScoringError::EmptyInput));
        assert_eq!(
            accuracy_score(&[0.0], &[0.0, 1.0]),
            Err(ScoringError::LengthMismatch {
                expected: 1,
                found: 2
            })
        );
    }

    #[test]
    fn binary_precision_and_recall_use_positive_label() {
        let y_true = [1.0, 1.0, 1.0, 0.0, 0.0, 0.0];
        let y_pred = [1.0, 1.0, 0.0, 1.0, 0.0, 0.0];
        let p = precision_score(&y_true, &y_pred, Aggregation::BinaryAverage).unwrap();
        let r = recall_score(&y_true, &y_pred, Aggregation::BinaryAverage).unwrap();
        assert!((p - 2.0 / 3.0).abs() < EPS);
        assert!((r - 2.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn binary_precision_with_no_positive_predictions_is_zero() {
        let p = precision_score(&[1.0, 0.0], &[0.0, 0.0], Aggregation::BinaryAverage).unwrap();
        assert_eq!(p, 0.0);
    }

    #[test]
    fn binary_average_rejects_multiclass_and_missing_positive() {
        assert_eq!(
            precision_score(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0], Aggregation::BinaryAverage),
            Err(ScoringError::MulticlassWithBinaryAverage { classes: 3 })
        );
        assert_eq!(
            recall_score(&[2.0, 3.0], &[2.0, 3.0], Aggregation::BinaryAverage),
            Err(ScoringError::PositiveLabelMissing {
                present: vec![2.0, 3.0]
            })
        );
    }

    #[test]
    fn micro_precision_and_recall_equal_accuracy_for_single_label_targets() {
        let y_true = [0.0, 1.0, 2.0, 2.0, 1.0, 0.0, 2.0];
        let y_pred = [0.0, 2.0, 2.0, 1.0, 1.0, 0.0, 2.0];
        let acc = accuracy_score(&y_true, &y_pred).unwrap();
        let p = precision_score(&y_true, &y_pred, Aggregation::Micro).unwrap();
        let r = recall_score(&y_true, &y_pred, Aggregation::Micro).unwrap();
        assert!((p - acc).abs() < EPS);
        assert!((r - acc).abs() < EPS);
    }

    #[test]
    fn label_binarize_shapes() {
        assert_eq!(
            label_binarize(&[0.0, 1.0, 1.0], 2),
            vec![vec![0.0], vec![1.0], vec![1.0]]
        );
        assert_eq!(
            label_binarize(&[2.0, 0.0], 3),
            vec![vec![0.0, 0.0, 1.0], vec![1.0, 0.0, 0.0]]
        );
    }

    #[test]
    fn auc_perfect_random_and_worst() {
        let labels = [1.0, 1.0, 0.0, 0.0];
        assert!((binary_roc_auc(&labels, &[0.9, 0.8, 0.3, 0.2]).unwrap() - 1.0).abs() < EPS);
        assert!((binary_roc_auc(&labels, &[0.5, 0.5, 0.5, 0.5]).unwrap() - 0.5).abs() < EPS);
        assert!(binary_roc_auc(&labels, &[0.1, 0.2, 0.8, 0.9]).unwrap().abs() < EPS);
    }

    #[test]
    fn auc_matches_pairwise_count() {
        let labels = [1.0, 0.0, 1.0, 0.0, 1.0];
        let scores = [0.8, 0.6, 0.6, 0.1, 0.3];
        // positives 0.8, 0.6, 0.3 vs negatives 0.6, 0.1:
        // 0.8 wins twice, 0.6 ties once and wins once, 0.3 wins once
        let want = (2.0 + 1.5 + 1.0) / 6.0;
        assert!((binary_roc_auc(&labels, &scores).unwrap() - want).abs() < EPS);
    }

    #[test]
    fn auc_single_class_is_an_error() {
        assert_eq!(
            binary_roc_auc(&[1.0, 1.0], &[0.3, 0.7]),
            Err(ScoringError::SingleClass)
        );
        let proba = ProbabilityMatrix::from_rows(
            vec![0.0, 1.0],
            vec![vec![0.4, 0.6], vec![0.9, 0.1]],
        );
        assert_eq!(
            roc_auc_score(&[0.0, 0.0], &proba, Aggregation::BinaryAverage, 2),
            Err(ScoringError::SingleClass)
        );
    }

    #[test]
    fn binary_auc_uses_positive_column() {
        let proba = ProbabilityMatrix::from_rows(
            vec![0.0, 1.0],
            vec![vec![0.1, 0.9], vec![0.8, 0.2], vec![0.3, 0.7], vec![0.6, 0.4]],
        );
        let auc = roc_auc_score(&[1.0, 0.0, 1.0, 0.0], &proba, Aggregation::BinaryAverage, 2).unwrap();
        assert!((auc - 1.0).abs() < EPS);

        let only_negative = ProbabilityMatrix::from_rows(vec![0.0], vec![vec![1.0], vec![1.0]]);
        assert_eq!(
            roc_auc_score(&[1.0, 0.0], &only_negative, Aggregation::BinaryAverage, 2),
            Err(ScoringError::MissingProbabilityColumn(1.0))
        );
    }

    #[test]
    fn micro_auc_pools_all_classes() {
        let proba = ProbabilityMatrix::from_rows(
            vec![0.0, 1.0, 2.0],
            vec![
                vec![0.7, 0.2, 0.1],
                vec![0.1, 0.8, 0.1],
                vec![0.2, 0.2, 0.6],
            ],
        );
        let auc = roc_auc_score(&[0.0, 1.0, 2.0], &proba, Aggregation::Micro, 3).unwrap();
        assert!((auc - 1.0).abs() < EPS);

        let two_cols = ProbabilityMatrix::from_rows(vec![0.0, 1.0], vec![vec![0.5, 0.5]; 3]);
        assert!(matches!(
            roc_auc_score(&[0.0, 1.0, 2.0], &two_cols, Aggregation::Micro, 3),
            Err(ScoringError::ProbabilityShape { expected: 3, .. })
        ));
    }

    #[test]
    fn micro_auc_differs_from_per_class_average() {
        let proba = ProbabilityMatrix::from_rows(
            vec![0.0, 1.0, 2.0],
            vec![
                vec![0.5, 0.3, 0.2],
                vec![0.4, 0.4, 0.2],
                vec![0.3, 0.3, 0.4],
            ],
        );
        let y = [0.0, 1.0, 2.0];

        // every column ranks its own class first
        let macro_auc = (0..3)
            .map(|c| {
                let truth: Vec<f64> = y.iter().map(|&t| f64::from(t == c as f64)).collect();
                binary_roc_auc(&truth, &proba.column(c)).unwrap()
            })
            .sum::<f64>()
            / 3.0;
        assert!((macro_auc - 1.0).abs() < EPS);

        // pooled: 3 positives x 6 negatives, positives 0.4 beat five
        // negatives and tie with the 0.4 negative, 0.5 beats all six
        let micro = roc_auc_score(&y, &proba, Aggregation::Micro, 3).unwrap();
        assert!((micro - 17.0 / 18.0).abs() < EPS);
    }

    #[test]
    fn micro_auc_needs_zero_based_labels() {
        let proba = ProbabilityMatrix::from_rows(
            vec![1.0, 2.0, 3.0],
            vec![
                vec![0.7, 0.2, 0.1],
                vec![0.1, 0.8, 0.1],
                vec![0.2, 0.2, 0.6],
            ],
        );
        assert_eq!(
            roc_auc_score(&[1.0, 2.0, 3.0], &proba, Aggregation::Micro, 3),
            Err(ScoringError::ProbabilityShape {
                expected: 3,
                found: vec![1.0, 2.0, 3.0]
            })
        );
    }

    #[test]
    fn regression_scores() {
        let y_true = [3.0, -0.5, 2.0, 7.0];
        let y_pred = [2.5, 0.0, 2.0, 8.0];
        assert!((mean_squared_error(&y_true, &y_pred).unwrap() - 0.375).abs() < EPS);
        let r2 = r2_score(&y_true, &y_pred).unwrap();
        assert!((r2 - 0.948_608_137_044_967_9).abs() < 1e-9);
    }

    #[test]
    fn r2_edge_cases() {
        assert_eq!(r2_score(&[1.0], &[1.0]), Err(ScoringError::TooFewSamples));
        assert_eq!(r2_score(&[2.0, 2.0], &[2.0, 2.0]), Ok(1.0));
        assert_eq!(r2_score(&[2.0, 2.0], &[2.0, 3.0]), Ok(0.0));
    }
}
