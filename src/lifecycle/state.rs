use crate::classifiers::ModelType;
use crate::core::dataset::FeatureColumns;
use crate::evaluation::TrainingMetrics;
use crate::store::ModelArtifact;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Process-wide mutable state owned by the coordinator.
#[derive(Debug, Default)]
pub struct LifecycleState {
    /// Set by the last successful upload.
    pub feature_columns: Option<FeatureColumns>,
    /// `None` until a train succeeds or a predict lazily loads the artifact.
    pub active_model: Option<Arc<ModelArtifact>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActiveModelInfo {
    pub model_type: ModelType,
    pub trained_at: DateTime<Utc>,
    pub metrics: TrainingMetrics,
}

impl From<&ModelArtifact> for ActiveModelInfo {
    fn from(a: &ModelArtifact) -> Self {
        Self {
            model_type: a.model_type(),
            trained_at: a.trained_at,
            metrics: a.metrics,
        }
    }
}

/// Read-only view of the coordinator for status reporting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LifecycleStatus {
    pub feature_columns: Option<FeatureColumns>,
    pub active_model: Option<ActiveModelInfo>,
    pub artifact_location: String,
    pub artifact_on_disk: bool,
}
