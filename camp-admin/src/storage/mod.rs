//! Durable key-value storage
//!
//! Session and settings state is written through the [`KeyValueStore`]
//! capability, injected into [`SessionGuard`](crate::auth::SessionGuard) and
//! [`SettingsStore`](crate::stores::SettingsStore):
//! - [`RedbStore`] - redb file on disk
//! - [`MemoryStore`] - process-local map for tests
//!
//! Values are whole JSON blobs; every write overwrites the previous value.

mod memory;
mod redb_store;

pub use memory::MemoryStore;
pub use redb_store::RedbStore;

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Key holding the signed-in user record
pub const USER_KEY: &str = "user";

/// Key holding the system settings map
pub const SYSTEM_SETTINGS_KEY: &str = "systemSettings";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Serialization(e) => {
                AppError::with_message(ErrorCode::StorageCorrupted, e.to_string())
            }
            other => AppError::storage(other.to_string()),
        }
    }
}

/// Synchronous key-value storage with whole-value overwrite semantics
pub trait KeyValueStore: Send + Sync {
    fn get_raw(&self, key: &str) -> StorageResult<Option<Vec<u8>>>;

    fn put_raw(&self, key: &str, value: &[u8]) -> StorageResult<()>;

    /// Removing an absent key is not an error
    fn remove(&self, key: &str) -> StorageResult<()>;
}

impl dyn KeyValueStore {
    /// Read and decode a JSON value
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        match self.get_raw(key)? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Encode and write a JSON value
    pub fn put_json<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let bytes = serde_json::to_vec(value)?;
        self.put_raw(key, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_json_helpers_roundtrip() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.put_json("answer", &vec![4, 2]).unwrap();
        let value: Option<Vec<i32>> = store.get_json("answer").unwrap();
        assert_eq!(value, Some(vec![4, 2]));
        assert!(store.get_json::<Vec<i32>>("missing").unwrap().is_none());
    }

    #[test]
    fn test_corrupt_blob_maps_to_storage_corrupted() {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        store.put_raw("broken", b"{not json").unwrap();
        let err = store.get_json::<Vec<i32>>("broken").unwrap_err();
        let app: AppError = err.into();
        assert_eq!(app.code, ErrorCode::StorageCorrupted);
    }
}
