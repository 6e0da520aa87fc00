mod coordinator;
mod state;

pub use coordinator::{LifecycleCoordinator, TrainingOutcome, UploadOutcome};
pub use state::{ActiveModelInfo, LifecycleState, LifecycleStatus};
