//! Record stores
//!
//! A store hands out the whole collection on every read and replaces it
//! wholesale on every write. Callers never see a partially loaded collection:
//! a failed read is an error, not an empty list.

pub mod json;

pub use json::JsonFileStore;

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while reading or writing a record collection
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file content is not a valid record collection
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },

    /// The collection could not be encoded for writing
    #[error("failed to encode records for {}: {source}", path.display())]
    Encode {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
}

/// Read-all / write-all access to a collection of records
pub trait RecordStore<T> {
    /// Load the full collection
    ///
    /// # Errors
    /// Returns `StoreError` if the collection cannot be read or decoded
    fn load_all(&self) -> Result<Vec<T>, StoreError>;

    /// Replace the full collection
    ///
    /// # Errors
    /// Returns `StoreError` if the collection cannot be encoded or written
    fn save_all(&mut self, records: &[T]) -> Result<(), StoreError>;
}

/// In-memory collection, used by tests and callers that already hold a snapshot
impl<T: Clone> RecordStore<T> for Vec<T> {
    fn load_all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.clone())
    }

    fn save_all(&mut self, records: &[T]) -> Result<(), StoreError> {
        records.clone_into(self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_store_round_trip() {
        let mut store: Vec<u32> = vec![1, 2];
        assert_eq!(store.load_all().unwrap(), vec![1, 2]);

        store.save_all(&[3]).unwrap();
        assert_eq!(store.load_all().unwrap(), vec![3]);
    }
}
