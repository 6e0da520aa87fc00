use crate::classifiers::Classifier;
use crate::core::dataset::{FeatureColumns, RUN_TIME_COLUMN, TEMPERATURE_COLUMN};
use crate::error::{LifecycleError, Result};
use crate::store::ModelArtifact;
use crate::utils::math::{argmax, round_to};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, IntoStaticStr};

/// One machine reading to score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PredictionInput {
    #[serde(rename = "Temperature")]
    pub temperature: f64,
    #[serde(rename = "Run_Time")]
    pub run_time: f64,
}

impl PredictionInput {
    pub fn new(temperature: f64, run_time: f64) -> Self {
        Self {
            temperature,
            run_time,
        }
    }

    pub fn value_of(&self, column: &str) -> Option<f64> {
        match column {
            TEMPERATURE_COLUMN => Some(self.temperature),
            RUN_TIME_COLUMN => Some(self.run_time),
            _ => None,
        }
    }

    /// Orders the reading by `columns`; every value must be finite.
    pub fn to_features(&self, columns: &FeatureColumns) -> Result<Vec<f64>> {
        columns
            .iter()
            .map(|c| match self.value_of(c) {
                Some(v) if v.is_finite() => Ok(v),
                Some(v) => Err(LifecycleError::InvalidInput(format!("{c} must be finite, got {v}"))),
                None => Err(LifecycleError::InvalidInput(format!(
                    "model expects unknown feature column {c}"
                ))),
            })
            .collect()
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Display, IntoStaticStr,
)]
pub enum DowntimeLabel {
    Yes,
    No,
}

impl From<usize> for DowntimeLabel {
    fn from(class_value: usize) -> Self {
        if class_value == 1 {
            DowntimeLabel::Yes
        } else {
            DowntimeLabel::No
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class_value: usize,
    pub downtime: DowntimeLabel,
    /// Highest class-membership probability, rounded to two decimals.
    pub confidence: f64,
}

/// Scores one reading with the artifact's model.
pub fn predict(artifact: &ModelArtifact, input: &PredictionInput) -> Result<Prediction> {
    let features = input.to_features(&artifact.feature_columns)?;
    let votes = artifact.model.get_votes_for_features(&features);
    let class_value = argmax(&votes).unwrap_or(0);
    let confidence = votes.iter().copied().fold(0.0_f64, f64::max);

    Ok(Prediction {
        class_value,
        downtime: DowntimeLabel::from(class_value),
        confidence: round_to(confidence, 2),
    })
}
