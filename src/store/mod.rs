mod artifact;
mod file_model_store;
mod model_store;

pub use artifact::ModelArtifact;
pub use file_model_store::FileModelStore;
pub use model_store::ModelStore;
