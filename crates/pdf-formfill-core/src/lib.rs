//! PDF FormFill Core Library
//!
//! This library provides the core functionality for filling PDF forms:
//! - An in-memory form-document model with a widget index by field name
//! - The mutation pipeline: value filling, read-only locking, widget
//!   visibility control
//! - Object storage (S3) for templates and filled results
//! - Signed, time-limited download links

pub mod config;
pub mod error;
pub mod form;
pub mod pdf;
pub mod request;
pub mod storage;
pub mod util;

pub use config::{AppConfig, StorageConfig};
pub use error::{Error, Result};
pub use form::{fill, lock, run_pipeline, set_visibility};
pub use pdf::{ANNOT_HIDDEN, FIELD_READ_ONLY, FormDocument, WidgetIndex, WidgetRef};
pub use request::{FieldData, FillRequest, FillResponse};
pub use storage::{ObjectStore, S3Store, StoreInfo, create_store};

use std::sync::Arc;

use tracing::info;

/// High-level form-fill service that combines all components.
///
/// Each call to [`FormFiller::process`] is a single, self-contained
/// invocation: templates are fetched fresh every time and no document
/// state is shared between requests.
pub struct FormFiller {
    store: Arc<dyn ObjectStore>,
    config: AppConfig,
}

/// Result of processing a single fill request
#[derive(Debug, Clone)]
pub struct FillOutcome {
    /// Signed, time-limited download link
    pub url: String,
    /// Object key the filled document was stored under
    pub key: String,
}

impl FormFiller {
    /// Create a new form filler with the given configuration
    pub async fn new(config: AppConfig) -> Result<Self> {
        let store = storage::create_store(&config.storage).await?;
        Ok(Self { store, config })
    }

    /// Create with a custom store
    pub fn with_store(store: Arc<dyn ObjectStore>, config: AppConfig) -> Self {
        Self { store, config }
    }

    /// Handle one fill request end to end.
    ///
    /// Fetches the template, runs the mutation pipeline, stores the
    /// result under a fresh key, and returns a signed download link. Any
    /// stage failure fails the whole request; nothing is retried and no
    /// partial output is published.
    pub async fn process(&self, request: &FillRequest) -> Result<FillOutcome> {
        let template_key = request
            .template_path
            .as_deref()
            .unwrap_or(&self.config.storage.template_key);

        info!(template = %template_key, "fetching template");
        let template = self.store.fetch(template_key).await?;

        let output = form::run_pipeline(&template, request)?;

        let key = util::output_key(&self.config.storage.output_prefix);
        self.store.store(&key, output).await?;

        let url = self
            .store
            .sign_url(&key, self.config.storage.url_ttl())
            .await?;
        info!(key = %key, "stored filled document");

        Ok(FillOutcome { url, key })
    }

    pub const fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn store_info(&self) -> StoreInfo {
        self.store.info()
    }
}
