use crate::error::StoreError;
use crate::store::ModelArtifact;

/// Durable home of the single active model artifact.
///
/// There is exactly one slot: every `write` replaces what was there.
pub trait ModelStore: Send + Sync {
    /// Replaces the stored artifact. Readers see either the old or the new
    /// artifact, never a partial one.
    fn write(&self, artifact: &ModelArtifact) -> Result<(), StoreError>;

    /// Loads the stored artifact, [`StoreError::NotFound`] when the slot is empty.
    fn read(&self) -> Result<ModelArtifact, StoreError>;

    fn exists(&self) -> bool;

    /// Human-readable location, for logs and status output.
    fn location(&self) -> String;
}
