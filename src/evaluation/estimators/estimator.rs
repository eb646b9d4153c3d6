/// Incremental scalar estimator (e.g., running mean over folds).
///
/// Implementations accept values via [`add`] and expose the current
/// estimate via [`estimation`], which is `None` until something usable has
/// been observed.
///
/// [`add`]: Estimator::add
/// [`estimation`]: Estimator::estimation
pub trait Estimator {
    /// Incorporates a new observation.
    fn add(&mut self, v: f64);

    /// Returns the current estimate.
    fn estimation(&self) -> Option<f64>;
}
