mod binary_classification_evaluator;
mod performance_evaluator;

pub use binary_classification_evaluator::BinaryClassificationEvaluator;
pub use performance_evaluator::{PerformanceEvaluator, PerformanceEvaluatorExt};
