use crate::core::instances::DenseInstance;
use crate::evaluation::{Estimator, Measurement, PerformanceEvaluator};
use crate::utils::math::argmax;

/// Hold-out evaluator for binary labels with class `1` as the positive class.
///
/// Reports:
/// - `accuracy`: fraction of exact label matches;
/// - `precision`, `recall`, `f1` for the positive class.
///
/// Metrics whose denominator is zero are `NaN`; callers pick the fallback.
pub struct BinaryClassificationEvaluator<E: Estimator + Default> {
    weight_correct: E,
    true_positives: f64,
    false_positives: f64,
    false_negatives: f64,
    seen: usize,
}

impl<E: Estimator + Default> Default for BinaryClassificationEvaluator<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Estimator + Default> BinaryClassificationEvaluator<E> {
    pub fn new() -> Self {
        Self {
            weight_correct: E::default(),
            true_positives: 0.0,
            false_positives: 0.0,
            false_negatives: 0.0,
            seen: 0,
        }
    }

    pub fn seen(&self) -> usize {
        self.seen
    }

    #[inline]
    fn ratio(num: f64, den: f64) -> f64 {
        if den > 0.0 { num / den } else { f64::NAN }
    }

    pub fn precision(&self) -> f64 {
        Self::ratio(
            self.true_positives,
            self.true_positives + self.false_positives,
        )
    }

    pub fn recall(&self) -> f64 {
        Self::ratio(
            self.true_positives,
            self.true_positives + self.false_negatives,
        )
    }

    /// `2 * tp / (2 * tp + fp + fn)`, the harmonic mean of precision and recall.
    pub fn f1(&self) -> f64 {
        Self::ratio(
            2.0 * self.true_positives,
            2.0 * self.true_positives + self.false_positives + self.false_negatives,
        )
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for BinaryClassificationEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new();
    }

    fn add_result(&mut self, example: &DenseInstance, class_votes: &[f64]) {
        let Some(y) = example.class_value() else {
            return;
        };
        let Some(yhat) = argmax(class_votes) else {
            return;
        };

        self.seen += 1;
        self.weight_correct.add(if yhat == y { 1.0 } else { 0.0 });

        match (y == 1, yhat == 1) {
            (true, true) => self.true_positives += 1.0,
            (false, true) => self.false_positives += 1.0,
            (true, false) => self.false_negatives += 1.0,
            (false, false) => {}
        }
    }

    fn performance(&self) -> Vec<Measurement> {
        vec![
            Measurement::new("accuracy", self.weight_correct.estimation()),
            Measurement::new("precision", self.precision()),
            Measurement::new("recall", self.recall()),
            Measurement::new("f1", self.f1()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{BasicEstimator, PerformanceEvaluatorExt};

    type Eval = BinaryClassificationEvaluator<BasicEstimator>;

    fn inst(y: usize) -> DenseInstance {
        DenseInstance::new(vec![0.0], Some(y))
    }

    fn votes(pred: usize) -> Vec<f64> {
        if pred == 0 { vec![0.9, 0.1] } else { vec![0.2, 0.8] }
    }

    #[test]
    fn empty_evaluator_reports_nan() {
        let ev = Eval::new();
        let perf = ev.performance();
        assert_eq!(perf.len(), 4);
        assert!(perf.iter().all(|m| !m.is_defined()));
    }

    #[test]
    fn confusion_counts_drive_metrics() {
        let mut ev = Eval::new();
        // tp, tp, fp, fn, tn
        ev.add_result(&inst(1), &votes(1));
        ev.add_result(&inst(1), &votes(1));
        ev.add_result(&inst(0), &votes(1));
        ev.add_result(&inst(1), &votes(0));
        ev.add_result(&inst(0), &votes(0));

        assert_eq!(ev.seen(), 5);
        assert!((ev.metric("accuracy").unwrap() - 0.6).abs() < 1e-12);
        assert!((ev.metric("precision").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((ev.metric("recall").unwrap() - 2.0 / 3.0).abs() < 1e-12);
        assert!((ev.metric("f1").unwrap() - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn no_positives_anywhere_leaves_f1_undefined() {
        let mut ev = Eval::new();
        ev.add_result(&inst(0), &votes(0));
        ev.add_result(&inst(0), &votes(0));
        assert_eq!(ev.metric("accuracy"), Some(1.0));
        assert!(ev.metric("f1").unwrap().is_nan());
    }

    #[test]
    fn unlabeled_or_voteless_examples_are_skipped() {
        let mut ev = Eval::new();
        ev.add_result(&DenseInstance::unlabeled(vec![1.0]), &votes(1));
        ev.add_result(&inst(1), &[]);
        ev.add_result(&inst(1), &[f64::NAN, f64::NAN]);
        assert_eq!(ev.seen(), 0);
    }

    #[test]
    fn reset_clears_counts() {
        let mut ev = Eval::new();
        ev.add_result(&inst(1), &votes(1));
        ev.reset();
        assert_eq!(ev.seen(), 0);
        assert!(ev.metric("accuracy").unwrap().is_nan());
        assert_eq!(ev.metric("kappa"), None);
    }
}
