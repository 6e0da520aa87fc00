use crate::core::dataset::{DEFAULT_SPLIT_SEED, DEFAULT_TEST_FRACTION};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const UPLOAD_DIR_ENV: &str = "DOWNTIME_UPLOAD_DIR";
pub const MODEL_PATH_ENV: &str = "DOWNTIME_MODEL_PATH";
pub const SPLIT_SEED_ENV: &str = "DOWNTIME_SPLIT_SEED";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("config file {} is not valid: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{name} must be an unsigned integer, got '{value}'")]
    InvalidEnv { name: &'static str, value: String },

    #[error("test_fraction must lie in [0, 1), got {0}")]
    InvalidTestFraction(f64),
}

/// Runtime settings for the lifecycle coordinator and the binary.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub upload_dir: PathBuf,
    pub model_path: PathBuf,
    pub split_seed: u64,
    pub test_fraction: f64,
    pub log_filter: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            model_path: PathBuf::from("model.json"),
            split_seed: DEFAULT_SPLIT_SEED,
            test_fraction: DEFAULT_TEST_FRACTION,
            log_filter: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Defaults, then the optional JSON file, then the process environment.
    pub fn load(file: Option<&Path>) -> Result<Self, ConfigError> {
        let base = match file {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        base.with_overrides(|name| std::env::var(name).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Applies `DOWNTIME_*` overrides looked up through `lookup`, then validates.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(UPLOAD_DIR_ENV) {
            self.upload_dir = PathBuf::from(dir);
        }
        if let Some(path) = lookup(MODEL_PATH_ENV) {
            self.model_path = PathBuf::from(path);
        }
        if let Some(seed) = lookup(SPLIT_SEED_ENV) {
            self.split_seed = seed.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: SPLIT_SEED_ENV,
                value: seed.clone(),
            })?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.test_fraction) {
            return Err(ConfigError::InvalidTestFraction(self.test_fraction));
        }
        Ok(())
    }
}
