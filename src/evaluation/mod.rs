mod estimators;
mod evaluators;
mod measurement;
mod training_metrics;

pub use estimators::{BasicEstimator, Estimator};
pub use evaluators::{BinaryClassificationEvaluator, PerformanceEvaluator, PerformanceEvaluatorExt};
pub use measurement::Measurement;
pub use training_metrics::{TrainingMetrics, evaluate};
