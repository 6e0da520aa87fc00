use crate::classifiers::{ModelType, TrainedModel};
use crate::config::ServiceConfig;
use crate::core::dataset::{
    Dataset, DatasetSplitter, FeatureColumns, LABEL_COLUMN, validate_schema,
};
use crate::error::{LifecycleError, Result, SchemaError};
use crate::evaluation::{TrainingMetrics, evaluate};
use crate::lifecycle::{ActiveModelInfo, LifecycleState, LifecycleStatus};
use crate::predictor::{self, Prediction, PredictionInput};
use crate::store::{FileModelStore, ModelArtifact, ModelStore};
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadOutcome {
    pub dataset_path: PathBuf,
    pub feature_columns: FeatureColumns,
    pub rows: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrainingOutcome {
    pub model_type: ModelType,
    pub metrics: TrainingMetrics,
}

/// Owns the active model and feature-column state and sequences
/// upload → train → predict over them.
///
/// Train holds the exclusive guard for its whole run, so concurrent trains
/// serialise and the in-memory model always matches the last artifact
/// written. Predict clones the active model out under a shared guard; the
/// lazy load after a restart happens under an upgradable guard so only one
/// caller reads the store.
pub struct LifecycleCoordinator {
    store: Box<dyn ModelStore>,
    splitter: DatasetSplitter,
    upload_dir: PathBuf,
    state: RwLock<LifecycleState>,
}

impl LifecycleCoordinator {
    pub fn new<P: Into<PathBuf>>(
        store: Box<dyn ModelStore>,
        splitter: DatasetSplitter,
        upload_dir: P,
    ) -> Self {
        Self {
            store,
            splitter,
            upload_dir: upload_dir.into(),
            state: RwLock::new(LifecycleState::default()),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(
            Box::new(FileModelStore::new(&config.model_path)),
            DatasetSplitter::new(config.test_fraction, config.split_seed),
            &config.upload_dir,
        )
    }

    pub fn feature_columns(&self) -> Option<FeatureColumns> {
        self.state.read().feature_columns.clone()
    }

    /// Validates an uploaded CSV and stores it under the upload directory.
    ///
    /// Nothing is written and the feature columns are left untouched unless
    /// the file is a `.csv` with all required columns.
    pub fn upload(&self, filename: &str, content: &[u8]) -> Result<UploadOutcome> {
        let name = csv_file_name(filename)?;

        let dataset = Dataset::from_bytes(content).inspect_err(|e| {
            warn!(file = %name, error = %e, "upload rejected");
        })?;
        let feature_columns = validate_schema(&dataset).inspect_err(|e| {
            warn!(file = %name, error = %e, "upload rejected");
        })?;

        fs::create_dir_all(&self.upload_dir)?;
        let dataset_path = self.upload_dir.join(&name);
        fs::write(&dataset_path, content)?;

        self.state.write().feature_columns = Some(feature_columns.clone());
        info!(
            path = %dataset_path.display(),
            rows = dataset.len(),
            features = %feature_columns,
            "dataset uploaded"
        );

        Ok(UploadOutcome {
            dataset_path,
            feature_columns,
            rows: dataset.len(),
        })
    }

    /// Fits a fresh model on the referenced dataset, persists it and makes it active.
    ///
    /// On any failure the previously active model and artifact stay in place.
    pub fn train(&self, dataset_ref: &str, model_type: Option<&str>) -> Result<TrainingOutcome> {
        let path = Path::new(dataset_ref);
        if !path.is_file() {
            return Err(LifecycleError::DatasetNotFound(dataset_ref.to_string()));
        }
        let kind = ModelType::from_selector(model_type)?;

        let mut state = self.state.write();
        if state.feature_columns.is_none() {
            return Err(LifecycleError::DatasetNotValidated);
        }

        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LifecycleError::DatasetNotFound(dataset_ref.to_string()),
            _ => LifecycleError::Io(e),
        })?;
        let dataset = Dataset::from_bytes(&bytes)?;
        let feature_columns = validate_schema(&dataset)?;

        let instances = dataset.labeled_instances(&feature_columns, LABEL_COLUMN)?;
        if instances.is_empty() {
            return Err(SchemaError::EmptyDataset.into());
        }

        let split = self.splitter.split(instances);
        info!(
            model_type = %kind,
            train = split.train.len(),
            test = split.test.len(),
            seed = self.splitter.seed(),
            "training started"
        );
        if split.test.is_empty() {
            warn!("evaluation subset is empty; metrics reported as 0");
        }

        let model = TrainedModel::fit(kind, &split.train);
        let metrics = evaluate(&model, &split.test, split.train.len());
        let artifact = ModelArtifact::new(model, feature_columns, metrics);

        self.store.write(&artifact)?;
        state.active_model = Some(Arc::new(artifact));

        info!(
            model_type = %kind,
            accuracy = metrics.accuracy,
            f1_score = metrics.f1_score,
            artifact = %self.store.location(),
            "training finished"
        );
        Ok(TrainingOutcome {
            model_type: kind,
            metrics,
        })
    }

    pub fn predict(&self, input: &PredictionInput) -> Result<Prediction> {
        let artifact = self.active_model()?;
        let prediction = predictor::predict(&artifact, input)?;
        debug!(
            temperature = input.temperature,
            run_time = input.run_time,
            downtime = %prediction.downtime,
            confidence = prediction.confidence,
            "prediction served"
        );
        Ok(prediction)
    }

    /// The active model, loading it from the store on first use.
    fn active_model(&self) -> Result<Arc<ModelArtifact>> {
        if let Some(model) = self.state.read().active_model.clone() {
            return Ok(model);
        }

        let guard = self.state.upgradable_read();
        if let Some(model) = guard.active_model.clone() {
            return Ok(model);
        }

        let artifact = Arc::new(self.store.read()?);
        info!(
            model_type = %artifact.model_type(),
            artifact = %self.store.location(),
            "model artifact loaded"
        );
        let mut state = RwLockUpgradableReadGuard::upgrade(guard);
        state.active_model = Some(Arc::clone(&artifact));
        Ok(artifact)
    }

    pub fn status(&self) -> LifecycleStatus {
        let state = self.state.read();
        LifecycleStatus {
            feature_columns: state.feature_columns.clone(),
            active_model: state
                .active_model
                .as_deref()
                .map(ActiveModelInfo::from),
            artifact_location: self.store.location(),
            artifact_on_disk: self.store.exists(),
        }
    }
}

/// Bare file name of an upload, which must carry a `.csv` extension.
fn csv_file_name(filename: &str) -> Result<String> {
    let path = Path::new(filename.trim());
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) if is_csv => Ok(name.to_string()),
        _ => Err(LifecycleError::InvalidFileType(filename.to_string())),
    }
}
