use crate::core::dataset::{FeatureMatrix, Labels};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const N_FEATURES: usize = 3;

fn noisy_rows(rng: &mut StdRng, signal: &[f64]) -> Vec<Vec<f64>> {
    signal
        .iter()
        .map(|&s| {
            let mut row = Vec::with_capacity(N_FEATURES);
            row.push(s + rng.random_range(-0.75..0.75));
            for _ in 1..N_FEATURES {
                row.push(rng.random_range(-1.0..1.0));
            }
            row
        })
        .collect()
}

fn build(rows: Vec<Vec<f64>>, labels: Vec<f64>) -> (FeatureMatrix, Labels) {
    let x = FeatureMatrix::from_rows(rows).expect("dummy features are rectangular");
    let y = Labels::new(labels).expect("dummy labels are finite");
    (x, y)
}

/// `n_rows` x 3 features with a 70/30 split of labels `0`/`1`
/// (`i % 10 < 3` is positive). The first feature carries the signal.
pub fn binary_dataset(n_rows: usize, seed: u64) -> (FeatureMatrix, Labels) {
    let mut rng = StdRng::seed_from_u64(seed);
    let labels: Vec<f64> = (0..n_rows)
        .map(|i| if i % 10 < 3 { 1.0 } else { 0.0 })
        .collect();
    build(noisy_rows(&mut rng, &labels), labels)
}

/// `n_rows` x 3 features with labels `i % 3`. Neighbouring classes overlap
/// on the signal feature, so no model separates them perfectly.
pub fn multiclass_dataset(n_rows: usize, seed: u64) -> (FeatureMatrix, Labels) {
    let mut rng = StdRng::seed_from_u64(seed);
    let labels: Vec<f64> = (0..n_rows).map(|i| (i % 3) as f64).collect();
    build(noisy_rows(&mut rng, &labels), labels)
}

/// `n_rows` x 3 features with `y = 3 * x0 - 2 * x1 + noise`.
pub fn regression_dataset(n_rows: usize, seed: u64) -> (FeatureMatrix, Labels) {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows: Vec<Vec<f64>> = (0..n_rows)
        .map(|_| {
            (0..N_FEATURES)
                .map(|_| rng.random_range(-5.0..5.0))
                .collect()
        })
        .collect();
    let targets = rows
        .iter()
        .map(|r| 3.0 * r[0] - 2.0 * r[1] + rng.random_range(-0.5..0.5))
        .collect();
    build(rows, targets)
}
