//! Helper types and traits for cleaner route handlers.
//!
//! Provides extension traits for converting core errors into
//! HTTP-appropriate error responses, reducing boilerplate in routes.

use axum::http::StatusCode;
use pdf_formfill_core::Error;

/// Standard result type for route handlers.
pub type RouteResult<T> = Result<T, (StatusCode, String)>;

/// Map a core error kind to a response status.
///
/// Template lookups that miss are the caller's fault (404), documents
/// that cannot be parsed are unprocessable (422), failures of the storage
/// collaborator surface as bad gateway (502), everything else is a plain
/// server error.
pub fn status_for(error: &Error) -> StatusCode {
    match error {
        Error::TemplateNotFound { .. } => StatusCode::NOT_FOUND,
        Error::MalformedDocument(_) => StatusCode::UNPROCESSABLE_ENTITY,
        Error::TemplateFetch { .. } | Error::StorageWrite { .. } | Error::UrlSign { .. } => {
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Extension trait for converting core results to `RouteResult`.
pub trait ResultExt<T> {
    /// Converts the error to its mapped status code.
    fn or_error_status(self) -> RouteResult<T>;
}

impl<T> ResultExt<T> for Result<T, Error> {
    fn or_error_status(self) -> RouteResult<T> {
        self.map_err(|e| (status_for(&e), e.to_string()))
    }
}
