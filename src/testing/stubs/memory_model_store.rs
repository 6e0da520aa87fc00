use crate::error::StoreError;
use crate::store::{ModelArtifact, ModelStore};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::Arc;

/// Keeps the serialised artifact in memory; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryModelStore {
    slot: Arc<Mutex<Option<String>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemoryModelStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> usize {
        *self.writes.lock()
    }
}

impl ModelStore for MemoryModelStore {
    fn write(&self, artifact: &ModelArtifact) -> Result<(), StoreError> {
        let json = serde_json::to_string(artifact)?;
        *self.slot.lock() = Some(json);
        *self.writes.lock() += 1;
        Ok(())
    }

    fn read(&self) -> Result<ModelArtifact, StoreError> {
        match self.slot.lock().as_deref() {
            Some(json) => Ok(serde_json::from_str(json)?),
            None => Err(StoreError::NotFound(PathBuf::from(self.location()))),
        }
    }

    fn exists(&self) -> bool {
        self.slot.lock().is_some()
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
