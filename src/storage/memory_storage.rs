use crate::{error::Result, storage::Storage};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::Mutex;

/// In-process storage; contents live as long as the value
#[derive(Debug, Default)]
pub struct MemoryStorage {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a storage already holding `blob` under `key`
    pub fn with_blob(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.into(), blob.into());
        Self {
            blobs: Mutex::new(blobs),
        }
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, blob: &str) -> Result<()> {
        self.blobs
            .lock()
            .await
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.blobs.lock().await.remove(key);
        Ok(())
    }
}
