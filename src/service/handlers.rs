use crate::error::LifecycleError;
use crate::lifecycle::{LifecycleCoordinator, LifecycleStatus};
use crate::service::types::{
    ErrorResponse, PredictRequest, PredictResponse, TrainRequest, TrainResponse, UploadRequest,
    UploadResponse,
};
use std::sync::Arc;
use tracing::{error, warn};

type Response<T> = Result<T, ErrorResponse>;

/// Maps requests onto the coordinator and its errors onto [`ErrorResponse`].
#[derive(Clone)]
pub struct DowntimeService {
    coordinator: Arc<LifecycleCoordinator>,
}

impl DowntimeService {
    pub fn new(coordinator: Arc<LifecycleCoordinator>) -> Self {
        Self { coordinator }
    }

    pub fn coordinator(&self) -> &LifecycleCoordinator {
        &self.coordinator
    }

    pub fn upload(&self, req: &UploadRequest) -> Response<UploadResponse> {
        self.upload_bytes(&req.filename, req.content.as_bytes())
    }

    /// Upload of raw file bytes, for callers that read the file themselves.
    pub fn upload_bytes(&self, filename: &str, content: &[u8]) -> Response<UploadResponse> {
        let out = self
            .coordinator
            .upload(filename, content)
            .map_err(|e| reject("upload", e))?;
        Ok(UploadResponse {
            message: format!(
                "File uploaded and validated successfully; feature columns {}",
                out.feature_columns
            ),
            file_path: out.dataset_path.to_string_lossy().into_owned(),
        })
    }

    pub fn train(&self, req: &TrainRequest) -> Response<TrainResponse> {
        let out = self
            .coordinator
            .train(&req.file_path, req.model_type.as_deref())
            .map_err(|e| reject("train", e))?;
        Ok(TrainResponse {
            message: format!("Model trained successfully using {}", out.model_type),
            accuracy: out.metrics.accuracy,
            f1_score: out.metrics.f1_score,
        })
    }

    pub fn predict(&self, req: &PredictRequest) -> Response<PredictResponse> {
        self.coordinator
            .predict(&(*req).into())
            .map(PredictResponse::from)
            .map_err(|e| reject("predict", e))
    }

    pub fn status(&self) -> LifecycleStatus {
        self.coordinator.status()
    }
}

fn reject(operation: &'static str, e: LifecycleError) -> ErrorResponse {
    let response = ErrorResponse::from(&e);
    if e.is_client_error() {
        warn!(operation, code = %response.code, status = response.status, detail = %response.detail, "request rejected");
    } else {
        error!(operation, code = %response.code, status = response.status, detail = %response.detail, "request failed");
    }
    response
}
