//! Key-value storage the collection is persisted to

use crate::error::StorageError;
use crate::types::Book;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{PoisonError, RwLock};

/// Key the whole collection is stored under
pub const STORAGE_KEY: &str = "books";

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract key-value storage provider
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under a key, `None` if absent
    async fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Store a value under a key, replacing any previous value
    async fn set(&self, key: &str, value: String) -> StorageResult<()>;

    /// Remove a key. Removing an absent key is an error.
    async fn remove(&self, key: &str) -> StorageResult<()>;

    /// Check if a key exists
    async fn contains(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key).await?.is_some())
    }
}

/// Read the collection stored under `key`, `None` if nothing was ever saved
pub async fn load_collection(
    store: &dyn KeyValueStore,
    key: &str,
) -> crate::Result<Option<Vec<Book>>> {
    match store.get(key).await? {
        Some(data) => Ok(Some(serde_json::from_str(&data)?)),
        None => Ok(None),
    }
}

/// Serialize the whole collection under `key`
pub async fn save_collection(
    store: &dyn KeyValueStore,
    key: &str,
    books: &[Book],
) -> crate::Result<()> {
    let data = serde_json::to_string(books)?;
    store.set(key, data).await?;
    Ok(())
}

/// File-backed storage: each key is a `<key>.json` file under a root directory
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create a new file storage provider with the given root directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a key to its file, rejecting anything but a plain name
    fn key_path(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }
}

#[async_trait]
impl KeyValueStore for FileStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.key_path(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    /// Writes to a temp file then renames to avoid partial writes
    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        let path = self.key_path(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::BackendError(e.to_string()))?;

        // One temp file per write, in the same directory so the rename stays
        // on one filesystem
        let temp_path = self
            .root
            .join(format!("{}.{}.json.tmp", key, uuid::Uuid::now_v7()));
        tokio::fs::write(&temp_path, value)
            .await
            .map_err(|e| StorageError::BackendError(e.to_string()))?;
        if let Err(e) = tokio::fs::rename(&temp_path, &path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(StorageError::BackendError(e.to_string()));
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.key_path(key)?;
        tokio::fs::remove_file(path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => StorageError::NotFound(key.to_string()),
                _ => StorageError::BackendError(e.to_string()),
            })
    }

    async fn contains(&self, key: &str) -> StorageResult<bool> {
        let path = self.key_path(key)?;
        tokio::fs::try_exists(path)
            .await
            .map_err(|e| StorageError::BackendError(e.to_string()))
    }
}

/// In-memory storage provider (for testing and throwaway stores)
#[derive(Default)]
pub struct MemoryStorage {
    data: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage
            .data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.into(), value.into());
        storage
    }
}

#[async_trait]
impl KeyValueStore for MemoryStorage {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self
            .data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned())
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> StorageResult<()> {
        self.data
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        Ok(())
    }
}
