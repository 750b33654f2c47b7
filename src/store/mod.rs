//! Store Module
//!
//! Key-value store client used by the HTTP handlers. Keys and values are plain
//! strings and never expire.

mod memory;
mod redis_store;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{Config, StoreBackend};
use crate::error::StoreError;

pub use memory::MemoryStore;
pub use redis_store::RedisStore;

/// Result of a single store call.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

// == Key-Value Store Trait ==
/// The three primitives the service needs from its backing store.
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> StoreResult<()>;

    /// Returns the value under `key`, or `None` if the key does not exist.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Removes `key`. Returns whether a value was actually removed.
    async fn delete(&self, key: &str) -> StoreResult<bool>;
}

/// Builds the store selected by the configuration.
///
/// For Redis this opens the connection, so an unreachable instance fails here
/// rather than on the first request.
pub async fn connect(config: &Config) -> StoreResult<Arc<dyn KeyValueStore>> {
    match config.store_backend {
        StoreBackend::Redis => {
            let store = RedisStore::connect(&config.redis_url()).await?;
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
    }
}
