//! Token Store
//!
//! Holds the access token for the browser session. Storage failures degrade
//! to "not signed in" instead of surfacing an error.

use std::sync::Arc;
#[cfg(test)]
use std::sync::Mutex;

use thiserror::Error;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("browser storage is unavailable")]
    Unavailable,

    #[error("storage operation failed: {0}")]
    Failed(String),
}

/// Backend persisting a single credential string
pub trait CredentialStorage: Send + Sync {
    fn read(&self) -> Result<Option<String>, StorageError>;
    fn write(&self, value: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}

/// `window.localStorage` under a fixed key
pub struct BrowserStorage {
    key: String,
}

impl BrowserStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl CredentialStorage for BrowserStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Failed(format!("{:?}", e)))
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(&self.key, value)
            .map_err(|e| StorageError::Failed(format!("{:?}", e)))
    }

    fn remove(&self) -> Result<(), StorageError> {
        Self::storage()?
            .remove_item(&self.key)
            .map_err(|e| StorageError::Failed(format!("{:?}", e)))
    }
}

/// In-process storage; `unavailable()` mimics disabled browser storage
#[cfg(test)]
#[derive(Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
    disabled: bool,
}

#[cfg(test)]
impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unavailable() -> Self {
        Self { slot: Mutex::new(None), disabled: true }
    }

    fn slot(&self) -> Result<std::sync::MutexGuard<'_, Option<String>>, StorageError> {
        if self.disabled {
            return Err(StorageError::Unavailable);
        }
        self.slot.lock().map_err(|e| StorageError::Failed(e.to_string()))
    }
}

#[cfg(test)]
impl CredentialStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot()?.clone())
    }

    fn write(&self, value: &str) -> Result<(), StorageError> {
        *self.slot()? = Some(value.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        *self.slot()? = None;
        Ok(())
    }
}

/// Shared handle to the session credential
#[derive(Clone)]
pub struct TokenStore {
    storage: Arc<dyn CredentialStorage>,
}

impl TokenStore {
    pub fn new(storage: Arc<dyn CredentialStorage>) -> Self {
        Self { storage }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStorage::new()))
    }

    pub fn set(&self, token: &str) {
        if let Err(e) = self.storage.write(token) {
            warn!(error = %e, "could not persist access token");
        }
    }

    pub fn get(&self) -> Option<String> {
        match self.storage.read() {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "could not read access token");
                None
            }
        }
    }

    pub fn clear(&self) {
        if let Err(e) = self.storage.remove() {
            warn!(error = %e, "could not clear access token");
        }
    }

    /// Presence check only; expiry is the server's concern.
    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}
