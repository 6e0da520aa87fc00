use crate::classifiers::{Classifier, DecisionTree, LogisticRegression, ModelType};
use crate::core::instances::DenseInstance;
use serde::{Deserialize, Serialize};

/// A classifier of one of the supported families, fitted or not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params", rename_all = "snake_case")]
pub enum TrainedModel {
    LogisticRegression(LogisticRegression),
    DecisionTree(DecisionTree),
}

impl From<ModelType> for TrainedModel {
    fn from(kind: ModelType) -> Self {
        match kind {
            ModelType::LogisticRegression => {
                TrainedModel::LogisticRegression(LogisticRegression::default())
            }
            ModelType::DecisionTree => TrainedModel::DecisionTree(DecisionTree::default()),
        }
    }
}

impl TrainedModel {
    /// Builds the default-hyperparameter model for `kind` and fits it.
    pub fn fit(kind: ModelType, instances: &[DenseInstance]) -> Self {
        let mut model = TrainedModel::from(kind);
        model.train_on_instances(instances);
        model
    }

    pub fn model_type(&self) -> ModelType {
        match self {
            TrainedModel::LogisticRegression(_) => ModelType::LogisticRegression,
            TrainedModel::DecisionTree(_) => ModelType::DecisionTree,
        }
    }

    fn as_classifier(&self) -> &dyn Classifier {
        match self {
            TrainedModel::LogisticRegression(m) => m,
            TrainedModel::DecisionTree(m) => m,
        }
    }
}

impl Classifier for TrainedModel {
    fn train_on_instances(&mut self, instances: &[DenseInstance]) {
        match self {
            TrainedModel::LogisticRegression(m) => m.train_on_instances(instances),
            TrainedModel::DecisionTree(m) => m.train_on_instances(instances),
        }
    }

    fn get_votes_for_features(&self, features: &[f64]) -> Vec<f64> {
        self.as_classifier().get_votes_for_features(features)
    }
}
