/**
 * Document Store
 *
 * File-backed storage for the four named documents. Each document lives at
 * `<data_dir>/<name>.json` and every write replaces the whole file with the
 * pretty-printed value. The directory is created on demand.
 *
 * Writes are not atomic and not locked: two concurrent writes to the same
 * document end up as whichever finished last.
 */

use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::backend::error::PersistenceError;
use crate::shared::DocumentName;

/// Directory holding the JSON documents
#[derive(Debug, Clone)]
pub struct DocumentStore {
    data_dir: PathBuf,
}

impl DocumentStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of a document file
    pub fn path_for(&self, document: DocumentName) -> PathBuf {
        self.data_dir.join(document.file_name())
    }

    /// Replace `document` with `value`
    pub async fn write(&self, document: DocumentName, value: &Value) -> Result<(), PersistenceError> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| PersistenceError::io(&self.data_dir, e))?;

        let contents = serde_json::to_string_pretty(value)?;
        let path = self.path_for(document);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| PersistenceError::io(&path, e))?;

        tracing::debug!("[Storage] Wrote {}", path.display());
        Ok(())
    }

    /// Current contents of `document`, `None` if it was never written
    pub async fn read(&self, document: DocumentName) -> Result<Option<Value>, PersistenceError> {
        let path = self.path_for(document);
        match tokio::fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(serde_json::from_str(&contents)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::io(&path, e)),
        }
    }
}
