use crate::classifiers::Classifier;
use crate::core::instances::DenseInstance;
use crate::evaluation::{
    BasicEstimator, BinaryClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Hold-out metrics of one training run.
///
/// Undefined values are reported as `0.0`: accuracy when the evaluation
/// subset is empty (`evaluation_rows == 0`), F1 when there are no true
/// positives, false positives or false negatives to speak of.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrainingMetrics {
    pub accuracy: f64,
    pub f1_score: f64,
    pub training_rows: usize,
    pub evaluation_rows: usize,
}

/// Scores `model` on the held-out `test` instances.
pub fn evaluate(
    model: &dyn Classifier,
    test: &[DenseInstance],
    training_rows: usize,
) -> TrainingMetrics {
    let mut evaluator = BinaryClassificationEvaluator::<BasicEstimator>::new();
    for instance in test {
        let votes = model.get_votes_for_features(&instance.values);
        evaluator.add_result(instance, &votes);
    }

    TrainingMetrics {
        accuracy: defined_or_zero(evaluator.metric("accuracy")),
        f1_score: defined_or_zero(evaluator.metric("f1")),
        training_rows,
        evaluation_rows: evaluator.seen(),
    }
}

#[inline]
fn defined_or_zero(v: Option<f64>) -> f64 {
    v.filter(|x| x.is_finite()).unwrap_or(0.0)
}
