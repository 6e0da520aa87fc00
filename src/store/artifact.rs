use crate::classifiers::{ModelType, TrainedModel};
use crate::core::dataset::FeatureColumns;
use crate::evaluation::TrainingMetrics;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The fitted model together with the feature contract it was trained against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_columns: FeatureColumns,
    pub trained_at: DateTime<Utc>,
    pub metrics: TrainingMetrics,
    pub model: TrainedModel,
}

impl ModelArtifact {
    pub fn new(model: TrainedModel, feature_columns: FeatureColumns, metrics: TrainingMetrics) -> Self {
        Self {
            feature_columns,
            trained_at: Utc::now(),
            metrics,
            model,
        }
    }

    pub fn model_type(&self) -> ModelType {
        self.model.model_type()
    }
}
