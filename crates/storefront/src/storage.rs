//! Durable local key/value storage.
//!
//! The Rust counterpart of the browser's localStorage: each well-known key
//! maps to one plain-text JSON file under the configured data directory.
//! There is no integrity checksum - anyone with filesystem access can edit
//! the snapshots, and the server re-validates stock (and implicitly prices
//! and identity) before committing an order.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Well-known storage keys.
pub mod keys {
    /// JSON-serialized array of cart lines.
    pub const CART: &str = "cart";
    /// The auth/session token issued by the backend.
    pub const AUTH_TOKEN: &str = "auth_token";
}

/// Errors that can occur reading or writing local storage.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem read/write failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Stored data exists but is not valid JSON for the expected type.
    #[error("corrupt data under key '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Value could not be serialized for writing.
    #[error("failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// File-backed key/value storage for JSON snapshots.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    /// Create a storage handle rooted at `dir`.
    ///
    /// The directory is created lazily on the first write, so constructing a
    /// handle never fails.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory snapshots are stored in.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Read and deserialize the value stored under `key`.
    ///
    /// Returns `Ok(None)` when nothing is stored under the key.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Corrupt`] when data exists but cannot be
    /// parsed, and [`StorageError::Io`] on filesystem failure. Callers that
    /// follow the silent-degrade policy should map both to an absent value
    /// and log.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let raw = match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let value = serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt {
            key: key.to_owned(),
            source,
        })?;
        Ok(Some(value))
    }

    /// Serialize and persist `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization or filesystem failure; the caller
    /// decides whether that is fatal (for the cart store it is not).
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_owned(),
            source,
        })?;

        fs::create_dir_all(&self.dir)?;
        fs::write(self.path_for(key), raw)?;
        Ok(())
    }

    /// Delete the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error on filesystem failure other than the key being
    /// absent.
    pub fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
