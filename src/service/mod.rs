//! Request/response boundary over the lifecycle coordinator.
//!
//! Transport is left to the caller: the binary prints these types as JSON, and
//! an HTTP layer would map [`ErrorResponse::status`] onto its status line.

mod handlers;
mod schema;
mod types;

pub use handlers::DowntimeService;
pub use schema::request_schemas;
pub use types::{
    ErrorResponse, PredictRequest, PredictResponse, TrainRequest, TrainResponse, UploadRequest,
    UploadResponse,
};
