mod s3;
mod traits;

pub use s3::S3Store;
pub use traits::{ObjectStore, StoreInfo};

use std::sync::Arc;

use crate::config::StorageConfig;
use crate::error::Result;

/// Create an object store from configuration
pub async fn create_store(config: &StorageConfig) -> Result<Arc<dyn ObjectStore>> {
    Ok(Arc::new(S3Store::from_config(config).await))
}
