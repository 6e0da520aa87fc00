/// Incremental scalar estimator.
pub trait Estimator {
    /// Incorporates a new observation. `NaN` observations are ignored.
    fn add(&mut self, v: f64);

    /// Current estimate, `NaN` while nothing has been observed.
    fn estimation(&self) -> f64;

    fn estimation_or(&self, fallback: f64) -> f64 {
        let e = self.estimation();
        if e.is_finite() { e } else { fallback }
    }
}
