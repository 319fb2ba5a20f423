use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Object storage configuration.
///
/// Covers the template source and the result publisher: both live in the
/// same bucket, with templates read from fixed keys and results written
/// under `output_prefix`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Bucket holding templates and filled documents
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Key of the template used when a request does not name one
    #[serde(default = "default_template_key")]
    pub template_key: String,

    /// Prefix for generated output objects
    #[serde(default = "default_output_prefix")]
    pub output_prefix: String,

    /// Time-to-live of signed download URLs, in seconds
    #[serde(default = "default_url_ttl_seconds")]
    pub url_ttl_seconds: u64,

    /// AWS region override (defaults to the SDK's resolution chain)
    #[serde(default)]
    pub region: Option<String>,

    /// Endpoint URL override for S3-compatible stores (MinIO, LocalStack).
    /// Forces path-style addressing when set.
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

fn default_bucket() -> String {
    "pdf-formfill".to_string()
}

fn default_template_key() -> String {
    "input/template.pdf".to_string()
}

fn default_output_prefix() -> String {
    "output/".to_string()
}

const fn default_url_ttl_seconds() -> u64 {
    3600
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            template_key: default_template_key(),
            output_prefix: default_output_prefix(),
            url_ttl_seconds: default_url_ttl_seconds(),
            region: None,
            endpoint_url: None,
        }
    }
}

impl StorageConfig {
    /// Signed URL lifetime as a `Duration`.
    pub const fn url_ttl(&self) -> Duration {
        Duration::from_secs(self.url_ttl_seconds)
    }
}

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Object storage settings
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::error::Error> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            crate::error::Error::ConfigLoad(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        toml::from_str(&content)
            .map_err(|e| crate::error::Error::ConfigLoad(format!("Failed to parse config: {e}")))
    }

    /// Load from default locations (~/.config/pdf-formfill/config.toml, ./config.toml)
    pub fn load() -> Self {
        // Try user config
        if let Some(config_dir) = crate::util::config_dir() {
            let user_config = config_dir.join("pdf-formfill").join("config.toml");
            if user_config.exists() {
                match Self::from_file(&user_config) {
                    Ok(config) => {
                        tracing::debug!("Loaded config from {}", user_config.display());
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // Try local config
        let local_config = std::path::PathBuf::from("config.toml");
        if local_config.exists() {
            match Self::from_file(&local_config) {
                Ok(config) => {
                    tracing::debug!("Loaded config from ./config.toml");
                    return config;
                }
                Err(e) => {
                    tracing::warn!("Failed to load ./config.toml: {}", e);
                }
            }
        }

        // Return defaults
        tracing::debug!("No config file found, using defaults");
        Self::default()
    }

    /// Load configuration from `FORMFILL_*` environment variables.
    ///
    /// Used by the Lambda entry point, where a config file is not
    /// practical. Unset variables fall back to the serde defaults.
    pub fn from_env() -> Result<Self, crate::error::Error> {
        let mut storage = StorageConfig::default();

        if let Ok(bucket) = std::env::var("FORMFILL_BUCKET") {
            storage.bucket = bucket;
        }
        if let Ok(key) = std::env::var("FORMFILL_TEMPLATE_KEY") {
            storage.template_key = key;
        }
        if let Ok(prefix) = std::env::var("FORMFILL_OUTPUT_PREFIX") {
            storage.output_prefix = prefix;
        }
        if let Ok(ttl) = std::env::var("FORMFILL_URL_TTL_SECS") {
            storage.url_ttl_seconds =
                ttl.parse()
                    .map_err(|e| crate::error::Error::ConfigInvalid {
                        field: "FORMFILL_URL_TTL_SECS".to_string(),
                        reason: format!("{e}"),
                    })?;
        }
        storage.region = std::env::var("FORMFILL_REGION").ok();
        storage.endpoint_url = std::env::var("FORMFILL_ENDPOINT_URL").ok();

        Ok(Self { storage })
    }
}
