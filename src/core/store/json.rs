//! JSON file store
//!
//! The file holds one JSON array. Writes are pretty-printed with two-space
//! indentation so the file stays hand-editable.

use super::{RecordStore, StoreError};
use crate::{debug, error};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Record store backed by a single JSON array file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file; nothing is read until `load_all`
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        error!("Store I/O failed on {}: {source}", self.path.display());
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl<T> RecordStore<T> for JsonFileStore
where
    T: DeserializeOwned + Serialize,
{
    fn load_all(&self) -> Result<Vec<T>, StoreError> {
        let content = fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let records: Vec<T> = serde_json::from_str(&content).map_err(|source| {
            error!("Failed to parse {}: {source}", self.path.display());
            StoreError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;
        debug!("Loaded {} records from {}", records.len(), self.path.display());
        Ok(records)
    }

    fn save_all(&mut self, records: &[T]) -> Result<(), StoreError> {
        let body = serde_json::to_string_pretty(records).map_err(|source| StoreError::Encode {
            path: self.path.clone(),
            source,
        })?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        fs::write(&self.path, body).map_err(|e| self.io_error(e))?;
        debug!("Wrote {} records to {}", records.len(), self.path.display());
        Ok(())
    }
}
