//! Key-value storage port and built-in adapters.
//!
//! The port is deliberately small: raw string values under named keys, read
//! and written synchronously. There is no transactional guarantee across
//! keys; a crash between writing `products` and `categories` can leave them
//! inconsistent, and the stores do not attempt recovery.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{error, warn};

/// Error type for storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Synchronous key-value persistence.
///
/// Implementations persist on every `write` (no batching) and treat a
/// removed key and a never-written key identically.
pub trait KeyValueStorage: Send + Sync {
    /// Read the raw value under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails; a missing key is
    /// not an error.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Persist `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails (e.g. quota or i/o).
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key` entirely. Removing an absent key is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying medium fails.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read and deserialize the value under `key`, falling back to `T::default()`.
///
/// A missing key, a storage failure, and corrupt JSON all degrade to the
/// default rather than surfacing an error: a parse failure is logged and
/// treated as "absent".
pub fn read_json_or_default<T>(storage: &dyn KeyValueStorage, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match storage.read(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "corrupt value in storage, treating as absent");
                T::default()
            }
        },
        Ok(None) => T::default(),
        Err(e) => {
            error!(key, error = %e, "storage read failed, treating as absent");
            T::default()
        }
    }
}

/// Serialize `value` as JSON and persist it under `key`.
///
/// # Errors
///
/// Returns an error if serialization or the storage write fails.
pub fn write_json<T: Serialize>(
    storage: &dyn KeyValueStorage,
    key: &str,
    value: &T,
) -> Result<String, StorageError> {
    let raw = serde_json::to_string(value)?;
    storage.write(key, &raw)?;
    Ok(raw)
}

/// In-memory adapter. The deterministic substitute for tests and for
/// session-scoped state that should not outlive the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.remove(key);
        Ok(())
    }
}

/// File-backed adapter: one `<key>.json` file per key under a data
/// directory. The local-storage analog for CLI and embedded use.
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_dir: PathBuf,
}

impl FileStorage {
    /// Open (and create if needed) a storage directory.
    ///
    /// Idempotent: opening the same directory twice yields adapters over
    /// the same data.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(base_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    /// Root directory of this adapter.
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(key), value)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
