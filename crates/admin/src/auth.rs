//! Token storage for the bearer/refresh authentication flow.
//!
//! The backend issues a JWT pair on login. The dashboard kept it in
//! browser local storage; here the same role is played by a
//! [`TokenStore`] implementation - a JSON file for the CLI, an in-memory
//! store for tests. The client keeps a cached copy and writes through the
//! store whenever the pair changes.

use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The token pair issued by the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthTokens {
    /// Short-lived access token, sent as `Authorization: Bearer ...`.
    pub access: String,
    /// Long-lived refresh token, exchanged for a new access token on 401.
    pub refresh: String,
    /// Unix timestamp when the pair was obtained.
    pub obtained_at: i64,
}

/// Errors that can occur when loading or persisting tokens.
#[derive(Debug, Error)]
pub enum TokenStoreError {
    /// Reading or writing the backing file failed.
    #[error("token storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored content is not a valid token pair.
    #[error("token storage parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Persistent storage for the token pair.
pub trait TokenStore: Send + Sync {
    /// Load the stored pair, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read or parsed.
    fn load(&self) -> Result<Option<AuthTokens>, TokenStoreError>;

    /// Persist a new pair, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns an error if the pair cannot be written.
    fn save(&self, tokens: &AuthTokens) -> Result<(), TokenStoreError>;

    /// Remove the stored pair. Clearing an empty store is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be cleared.
    fn clear(&self) -> Result<(), TokenStoreError>;
}

/// Token store backed by a JSON file.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store at the given path. Parent directories are created
    /// on the first save.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<AuthTokens>, TokenStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(serde_json::from_str(&content)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, tokens: &AuthTokens) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(tokens)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory token store for tests.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    tokens: Mutex<Option<AuthTokens>>,
}

impl MemoryTokenStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-loaded with a pair.
    #[must_use]
    pub fn with_tokens(tokens: AuthTokens) -> Self {
        Self {
            tokens: Mutex::new(Some(tokens)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Result<Option<AuthTokens>, TokenStoreError> {
        Ok(self.tokens.lock().map_or(None, |guard| guard.clone()))
    }

    fn save(&self, tokens: &AuthTokens) -> Result<(), TokenStoreError> {
        if let Ok(mut guard) = self.tokens.lock() {
            *guard = Some(tokens.clone());
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        if let Ok(mut guard) = self.tokens.lock() {
            *guard = None;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens() -> AuthTokens {
        AuthTokens {
            access: "access-1".to_string(),
            refresh: "refresh-1".to_string(),
            obtained_at: 1_700_000_000,
        }
    }

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("shopdesk-test-{}-{name}", std::process::id()))
            .join("tokens.json")
    }

    #[test]
    fn test_file_store_roundtrip() {
        let store = FileTokenStore::new(temp_path("roundtrip"));
        store.save(&tokens()).unwrap();
        assert_eq!(store.load().unwrap(), Some(tokens()));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_load_missing_is_none() {
        let store = FileTokenStore::new(temp_path("missing"));
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn test_file_store_clear_missing_is_ok() {
        let store = FileTokenStore::new(temp_path("clear-missing"));
        store.clear().unwrap();
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save(&tokens()).unwrap();
        assert_eq!(store.load().unwrap(), Some(tokens()));
        store.clear().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }
}
