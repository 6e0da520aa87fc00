use crate::core::instances::DenseInstance;
use crate::utils::math::argmax;

/// Labels are `0` (no downtime) and `1` (downtime).
pub const NUM_CLASSES: usize = 2;

/// Batch binary classifier over dense numeric feature vectors.
pub trait Classifier {
    /// Fits from scratch on `instances`, discarding any previous fit.
    ///
    /// Instances without a class value are ignored.
    fn train_on_instances(&mut self, instances: &[DenseInstance]);

    /// Class-membership probabilities, one per class, summing to 1.
    fn get_votes_for_features(&self, features: &[f64]) -> Vec<f64>;

    fn predict(&self, features: &[f64]) -> usize {
        argmax(&self.get_votes_for_features(features)).unwrap_or(0)
    }

    fn predict_batch(&self, rows: &[Vec<f64>]) -> Vec<usize> {
        rows.iter().map(|r| self.predict(r)).collect()
    }

    fn predict_proba_batch(&self, rows: &[Vec<f64>]) -> Vec<Vec<f64>> {
        rows.iter().map(|r| self.get_votes_for_features(r)).collect()
    }
}
