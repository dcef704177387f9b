use async_trait::async_trait;

use crate::error::StorageError;

/// Durable key-value store holding serialized carts.
#[async_trait]
pub trait CartStorage: Send + Sync {
    /// Stored value under `key`, or `None` if nothing was ever saved.
    async fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn save(&self, key: &str, value: String) -> Result<(), StorageError>;
}
