use crate::error::LifecycleError;
use crate::predictor::{DowntimeLabel, Prediction, PredictionInput};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UploadRequest {
    /// Original file name; only the bare name is kept and it must end in `.csv`.
    pub filename: String,
    /// CSV text of the dataset.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UploadResponse {
    pub message: String,
    /// Dataset reference to pass to train.
    pub file_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrainRequest {
    pub file_path: String,
    /// `logistic_regression` (default) or `decision_tree`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrainResponse {
    pub message: String,
    pub accuracy: f64,
    pub f1_score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PredictRequest {
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Run_Time")]
    pub run_time: f64,
}

impl From<PredictRequest> for PredictionInput {
    fn from(r: PredictRequest) -> Self {
        PredictionInput::new(r.temperature, r.run_time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PredictResponse {
    #[serde(rename = "Downtime")]
    pub downtime: DowntimeLabel,
    #[serde(rename = "Confidence")]
    pub confidence: f64,
}

impl From<Prediction> for PredictResponse {
    fn from(p: Prediction) -> Self {
        Self {
            downtime: p.downtime,
            confidence: p.confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ErrorResponse {
    pub status: u16,
    pub code: String,
    pub detail: String,
}

impl From<&LifecycleError> for ErrorResponse {
    fn from(e: &LifecycleError) -> Self {
        Self {
            status: e.status_code(),
            code: e.error_code().to_string(),
            detail: e.to_string(),
        }
    }
}

impl From<LifecycleError> for ErrorResponse {
    fn from(e: LifecycleError) -> Self {
        Self::from(&e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn predict_request_uses_column_names() {
        let r: PredictRequest =
            serde_json::from_value(json!({ "Temperature": 95.0, "Run_Time": 150 })).unwrap();
        assert_eq!(PredictionInput::from(r), PredictionInput::new(95.0, 150.0));
    }

    #[test]
    fn predict_response_shape() {
        let r = PredictResponse {
            downtime: DowntimeLabel::Yes,
            confidence: 0.84,
        };
        assert_eq!(
            serde_json::to_value(r).unwrap(),
            json!({ "Downtime": "Yes", "Confidence": 0.84 })
        );
    }

    #[test]
    fn train_request_model_type_is_optional() {
        let r: TrainRequest = serde_json::from_value(json!({ "file_path": "uploads/a.csv" })).unwrap();
        assert_eq!(r.model_type, None);
        assert_eq!(serde_json::to_value(&r).unwrap(), json!({ "file_path": "uploads/a.csv" }));
    }

    #[test]
    fn error_response_from_lifecycle_error() {
        let r = ErrorResponse::from(LifecycleError::DatasetNotFound("x.csv".into()));
        assert_eq!(r.status, 404);
        assert_eq!(r.code, "DATASET_NOT_FOUND");
        assert!(r.detail.contains("x.csv"));
    }
}
