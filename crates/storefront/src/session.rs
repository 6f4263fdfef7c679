//! Auth token persistence.
//!
//! The backend issues a bearer token at login; the client keeps it under its
//! own well-known storage key, separate from the cart snapshot. On disk the
//! token is plain JSON (matching the source system); in memory it is wrapped
//! in [`SecretString`] so it never leaks through `Debug` output.

use secrecy::{ExposeSecret, SecretString};

use crate::storage::{LocalStorage, StorageError, keys};

/// Handle for the persisted auth/session token.
#[derive(Debug, Clone)]
pub struct AuthSession {
    storage: LocalStorage,
}

impl AuthSession {
    /// Create a session handle over the given storage.
    #[must_use]
    pub const fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Load the stored token, if any.
    ///
    /// A corrupt token snapshot is treated as "not signed in" and logged,
    /// never surfaced as an error.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        match self.storage.get::<String>(keys::AUTH_TOKEN) {
            Ok(token) => token.map(SecretString::from),
            Err(e) => {
                tracing::warn!(error = %e, "Discarding unreadable auth token");
                None
            }
        }
    }

    /// Whether a token is currently stored.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.token().is_some()
    }

    /// Persist a freshly issued token.
    ///
    /// # Errors
    ///
    /// Returns the storage error; losing the token means the user has to
    /// sign in again, so unlike the cart this failure is surfaced.
    pub fn save(&self, token: &SecretString) -> Result<(), StorageError> {
        self.storage
            .set(keys::AUTH_TOKEN, &token.expose_secret().to_owned())
    }

    /// Drop the stored token (sign-out).
    ///
    /// # Errors
    ///
    /// Returns the storage error if the snapshot exists but cannot be
    /// removed.
    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove(keys::AUTH_TOKEN)
    }
}
