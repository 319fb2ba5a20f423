use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

/// Information about an object-store backend
#[derive(Debug, Clone)]
pub struct StoreInfo {
    /// Human-readable name
    pub name: &'static str,
    /// Bucket the store reads templates from and writes results to
    pub bucket: String,
    /// Whether the backend can mint time-limited download URLs
    pub supports_signed_urls: bool,
}

/// Trait for object-store backends
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Get information about this store
    fn info(&self) -> StoreInfo;

    /// Get the store name (convenience method)
    fn name(&self) -> &'static str {
        self.info().name
    }

    /// Retrieve an object's bytes
    async fn fetch(&self, key: &str) -> Result<Vec<u8>>;

    /// Persist an object
    async fn store(&self, key: &str, bytes: Vec<u8>) -> Result<()>;

    /// Produce a time-limited retrieval link for an object
    async fn sign_url(&self, key: &str, ttl: Duration) -> Result<String>;
}
