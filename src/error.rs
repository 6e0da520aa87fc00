use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = LifecycleError> = std::result::Result<T, E>;

/// Dataset shape or content problems found while parsing or validating.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("dataset is not parseable as CSV: {0}")]
    Unparseable(String),

    #[error("dataset contains no data rows")]
    EmptyDataset,

    #[error("line {line}: column {column} has invalid value '{value}'")]
    InvalidValue {
        line: usize,
        column: String,
        value: String,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no model artifact at {}", .0.display())]
    NotFound(PathBuf),

    #[error("model artifact serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Every failure the lifecycle coordinator reports to its callers.
///
/// None of these leave the coordinator unusable.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("invalid file type '{0}': only .csv files are accepted")]
    InvalidFileType(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("dataset not found: {0}")]
    DatasetNotFound(String),

    #[error("no dataset has been validated yet; upload a dataset first")]
    DatasetNotValidated,

    #[error("invalid model type '{0}': expected one of logistic_regression, decision_tree")]
    InvalidModelType(String),

    #[error("no trained model available; train a model first")]
    NoModelAvailable,

    #[error("invalid prediction input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(StoreError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<StoreError> for LifecycleError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => LifecycleError::NoModelAvailable,
            other => LifecycleError::Store(other),
        }
    }
}

impl LifecycleError {
    /// HTTP-equivalent status for the boundary adapter.
    pub fn status_code(&self) -> u16 {
        match self {
            LifecycleError::InvalidFileType(_)
            | LifecycleError::Schema(_)
            | LifecycleError::DatasetNotValidated
            | LifecycleError::InvalidModelType(_)
            | LifecycleError::NoModelAvailable
            | LifecycleError::InvalidInput(_) => 400,
            LifecycleError::DatasetNotFound(_) => 404,
            LifecycleError::Store(_) | LifecycleError::Io(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            LifecycleError::InvalidFileType(_) => "INVALID_FILE_TYPE",
            LifecycleError::Schema(_) => "SCHEMA_ERROR",
            LifecycleError::DatasetNotFound(_) => "DATASET_NOT_FOUND",
            LifecycleError::DatasetNotValidated => "DATASET_NOT_VALIDATED",
            LifecycleError::InvalidModelType(_) => "INVALID_MODEL_TYPE",
            LifecycleError::NoModelAvailable => "NO_MODEL_AVAILABLE",
            LifecycleError::InvalidInput(_) => "INVALID_INPUT",
            LifecycleError::Store(_) => "MODEL_STORE_ERROR",
            LifecycleError::Io(_) => "IO_ERROR",
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
