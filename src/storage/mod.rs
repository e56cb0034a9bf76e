use crate::error::Result;
use async_trait::async_trait;

#[cfg(feature = "file-storage")]
pub mod file_storage;
pub mod memory_storage;

#[cfg(feature = "sqlite-storage")]
pub mod sqlite_storage;

#[cfg(feature = "file-storage")]
pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

#[cfg(feature = "sqlite-storage")]
pub use sqlite_storage::SqliteStorage;

/// Durable key-value store for serialized blobs
#[async_trait]
pub trait Storage: Send + Sync {
    /// Reads the blob stored under `key`, if any
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Writes `blob` under `key`, replacing any previous value.
    ///
    /// Either the new blob is stored in full or the old one is left intact.
    async fn set(&self, key: &str, blob: &str) -> Result<()>;

    /// Removes the blob stored under `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> Result<()>;
}
