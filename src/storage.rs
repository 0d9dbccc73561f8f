//! Storage

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::items::LineItem;

/// Errors raised by a persisted slot.
#[derive(Debug, Error)]
pub enum StorageError {
    /// IO error reading or writing the slot
    #[error("failed to access the persisted cart slot: {0}")]
    Io(#[from] io::Error),

    /// Serialization error encoding the envelope
    #[error("failed to encode the cart envelope: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Serialized envelope written into the persisted slot.
///
/// `timestamp` is the saved-at instant in milliseconds since the epoch; the
/// snapshot's age is measured from it at load time. A payload without an
/// `items` field reads as an empty item list, but a missing `timestamp` makes
/// the whole payload malformed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCart {
    /// Persisted line items in insertion order
    #[serde(default)]
    pub items: Vec<LineItem>,

    /// Saved-at instant, milliseconds since the epoch
    pub timestamp: i64,
}

/// A single durable key-value slot holding the serialized cart.
///
/// Reads and writes are synchronous and atomic from the cart's point of
/// view; `read` returning `None` means the slot is absent (distinct from
/// holding an empty cart).
pub trait Storage {
    /// Read the slot contents, or `None` if the slot is absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the slot exists but cannot be read.
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the slot contents.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the payload cannot be written.
    fn write(&mut self, payload: &str) -> Result<(), StorageError>;

    /// Erase the slot entirely, so a later read sees it as absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the slot cannot be erased.
    fn erase(&mut self) -> Result<(), StorageError>;
}

/// File-backed slot: one JSON document in a single file.
///
/// Writes go through a sibling temp file and a rename, so a reader never
/// observes a partial payload.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Create a slot backed by the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn staging_path(&self) -> PathBuf {
        let mut staged = self.path.clone().into_os_string();
        staged.push(".tmp");
        PathBuf::from(staged)
    }
}

impl Storage for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, payload: &str) -> Result<(), StorageError> {
        let staged = self.staging_path();
        fs::write(&staged, payload)?;
        fs::rename(&staged, &self.path)?;

        Ok(())
    }

    fn erase(&mut self) -> Result<(), StorageError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// In-memory slot for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Option<String>,
}

impl MemoryStorage {
    /// Create an absent slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a slot already holding the given payload.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Some(payload.into()),
        }
    }
}

impl Storage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.clone())
    }

    fn write(&mut self, payload: &str) -> Result<(), StorageError> {
        self.slot = Some(payload.to_owned());
        Ok(())
    }

    fn erase(&mut self) -> Result<(), StorageError> {
        self.slot = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn file_storage_round_trips() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut storage = FileStorage::new(dir.path().join("cart.json"));

        assert!(storage.read()?.is_none(), "fresh slot should be absent");

        storage.write(r#"{"items":[],"timestamp":0}"#)?;
        assert_eq!(
            storage.read()?.as_deref(),
            Some(r#"{"items":[],"timestamp":0}"#)
        );

        storage.erase()?;
        assert!(storage.read()?.is_none(), "erased slot should be absent");

        Ok(())
    }

    #[test]
    fn file_storage_erase_is_idempotent() -> TestResult {
        let dir = tempfile::tempdir()?;
        let mut storage = FileStorage::new(dir.path().join("cart.json"));

        storage.erase()?;
        storage.erase()?;

        Ok(())
    }

    #[test]
    fn stored_cart_defaults_missing_items_field() -> TestResult {
        let stored: StoredCart = serde_json::from_str(r#"{ "timestamp": 42 }"#)?;

        assert!(stored.items.is_empty(), "missing items should read empty");
        assert_eq!(stored.timestamp, 42);

        Ok(())
    }

    #[test]
    fn stored_cart_without_timestamp_is_malformed() {
        let result = serde_json::from_str::<StoredCart>(r#"{ "items": [] }"#);

        assert!(result.is_err(), "missing timestamp should fail to parse");
    }

    #[test]
    fn memory_storage_round_trips() -> TestResult {
        let mut storage = MemoryStorage::new();

        assert!(storage.read()?.is_none(), "fresh slot should be absent");

        storage.write("payload")?;
        assert_eq!(storage.read()?.as_deref(), Some("payload"));

        storage.erase()?;
        assert!(storage.read()?.is_none(), "erased slot should be absent");

        Ok(())
    }
}
