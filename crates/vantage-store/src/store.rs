use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::StoreError;
use crate::storage::Storage;

/// Typed document access over a [`Storage`] medium.
///
/// Every collection is a single JSON document; mutations are whole-document
/// read-modify-write. Two writers on the same key race and the later write
/// wins.
#[derive(Debug, Clone)]
pub struct StateStore<S> {
    storage: S,
}

impl<S: Storage> StateStore<S> {
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Read the document at `key`.
    ///
    /// Absent, unreadable, and corrupt documents all yield `T::default()`;
    /// the latter two are logged.
    pub fn load<T>(&self, key: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.storage.get_item(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!(key, error = %e, "corrupt document, treating as absent");
                T::default()
            }),
            Ok(None) => T::default(),
            Err(e) => {
                warn!(key, error = %e, "unreadable document, treating as absent");
                T::default()
            }
        }
    }

    /// Serialize `value` and replace the document at `key`.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError::Quota`] and [`StoreError::Io`] from the
    /// medium, and [`StoreError::Serialize`].
    pub fn save<T>(&mut self, key: &str, value: &T) -> Result<(), StoreError>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value)?;
        self.storage.set_item(key, &raw)?;
        debug!(key, bytes = raw.len(), "saved document");
        Ok(())
    }

    /// Drop the document at `key`.
    ///
    /// # Errors
    ///
    /// Propagates [`StoreError::Io`] from the medium.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key)
    }
}
