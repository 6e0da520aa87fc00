use crate::error::StoreError;
use crate::store::{ModelArtifact, ModelStore};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Stores the artifact as JSON at a fixed path.
///
/// Writes go to a temporary file in the same directory which is then renamed
/// over the target, so a crash mid-write never leaves a truncated artifact.
#[derive(Debug, Clone)]
pub struct FileModelStore {
    path: PathBuf,
}

impl FileModelStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }
}

impl ModelStore for FileModelStore {
    fn write(&self, artifact: &ModelArtifact) -> Result<(), StoreError> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir)?;

        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut w = BufWriter::new(tmp.as_file_mut());
            serde_json::to_writer_pretty(&mut w, artifact)?;
            w.flush()?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| e.error)?;

        debug!(path = %self.path.display(), "model artifact written");
        Ok(())
    }

    fn read(&self) -> Result<ModelArtifact, StoreError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound(self.path.clone()));
            }
            Err(e) => return Err(e.into()),
        };
        let artifact = serde_json::from_reader(BufReader::new(file))?;
        debug!(path = %self.path.display(), "model artifact read");
        Ok(artifact)
    }

    fn exists(&self) -> bool {
        self.path.is_file()
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
