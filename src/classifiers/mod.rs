pub mod classifier;
pub mod decision_tree;
pub mod logistic_regression;
mod model_type;
mod trained_model;

pub use classifier::{Classifier, NUM_CLASSES};
pub use decision_tree::DecisionTree;
pub use logistic_regression::LogisticRegression;
pub use model_type::ModelType;
pub use trained_model::TrainedModel;
