use thiserror::Error;

/// Unified error type for pdf-formfill-core
///
/// This enum encompasses all error cases that can occur in the library:
/// - Template retrieval from object storage
/// - PDF document operations (parsing, mutation, saving)
/// - Result publishing (upload, URL signing)
/// - Configuration operations (loading, validation)
/// - General I/O operations
#[derive(Error, Debug)]
pub enum Error {
    // ==========================================================================
    // Template Errors
    // ==========================================================================
    /// Template object does not exist in the store
    #[error("template not found: {key}")]
    TemplateNotFound { key: String },

    /// Failed to retrieve the template from the store
    #[error("failed to fetch template '{key}': {reason}")]
    TemplateFetch { key: String, reason: String },

    // ==========================================================================
    // Document Errors
    // ==========================================================================
    /// Failed to parse a PDF document
    #[error("malformed document: {0}")]
    MalformedDocument(String),

    /// Failed to serialize a PDF document
    #[error("failed to save document: {0}")]
    DocumentSave(String),

    // ==========================================================================
    // Storage Errors
    // ==========================================================================
    /// Failed to write the result object to the store
    #[error("failed to store '{key}': {reason}")]
    StorageWrite { key: String, reason: String },

    /// Failed to produce a signed retrieval URL
    #[error("failed to sign URL for '{key}': {reason}")]
    UrlSign { key: String, reason: String },

    // ==========================================================================
    // Configuration Errors
    // ==========================================================================
    /// Failed to load configuration file
    #[error("failed to load config: {0}")]
    ConfigLoad(String),

    /// Invalid configuration value
    #[error("invalid config value for '{field}': {reason}")]
    ConfigInvalid { field: String, reason: String },

    // ==========================================================================
    // I/O Errors
    // ==========================================================================
    /// General I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
