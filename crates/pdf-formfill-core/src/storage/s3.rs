//! AWS S3 object store.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::operation::get_object::GetObjectError;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use tracing::debug;

use super::traits::{ObjectStore, StoreInfo};
use crate::config::StorageConfig;
use crate::error::{Error, Result};

/// Object store backed by an S3 (or S3-compatible) bucket.
pub struct S3Store {
    client: Client,
    bucket: String,
}

impl S3Store {
    /// Create a store from the ambient AWS configuration.
    ///
    /// Region and endpoint overrides from the config take precedence over
    /// the SDK's resolution chain. An endpoint override switches to
    /// path-style addressing, which S3-compatible stores expect.
    pub async fn from_config(config: &StorageConfig) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&sdk_config);
        if let Some(endpoint) = &config.endpoint_url {
            builder = builder.endpoint_url(endpoint).force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
        }
    }

    /// Create with an existing client (for testing)
    pub fn with_client(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    fn info(&self) -> StoreInfo {
        StoreInfo {
            name: "s3",
            bucket: self.bucket.clone(),
            supports_signed_urls: true,
        }
    }

    async fn fetch(&self, key: &str) -> Result<Vec<u8>> {
        debug!(bucket = %self.bucket, key = %key, "fetching object");
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|err| {
                if err
                    .as_service_error()
                    .is_some_and(GetObjectError::is_no_such_key)
                {
                    Error::TemplateNotFound {
                        key: key.to_string(),
                    }
                } else {
                    Error::TemplateFetch {
                        key: key.to_string(),
                        reason: err.to_string(),
                    }
                }
            })?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| Error::TemplateFetch {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        Ok(data.into_bytes().to_vec())
    }

    async fn store(&self, key: &str, bytes: Vec<u8>) -> Result<()> {
        debug!(bucket = %self.bucket, key = %key, len = bytes.len(), "storing object");
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type("application/pdf")
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| Error::StorageWrite {
                key: key.to_string(),
                reason: e.to_string(),
            })?;
        Ok(())
    }

    async fn sign_url(&self, key: &str, ttl: Duration) -> Result<String> {
        let presigning = PresigningConfig::expires_in(ttl).map_err(|e| Error::UrlSign {
            key: key.to_string(),
            reason: e.to_string(),
        })?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| Error::UrlSign {
                key: key.to_string(),
                reason: e.to_string(),
            })?;

        Ok(request.uri().to_string())
    }
}
