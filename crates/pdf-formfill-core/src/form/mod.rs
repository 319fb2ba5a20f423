//! The field-mutation pipeline: form filling, read-only locking, and
//! widget visibility.

mod fill;
mod lock;
mod visibility;

pub use fill::fill;
pub use lock::lock;
pub use visibility::set_visibility;

use std::collections::HashMap;

use tracing::info;

use crate::error::Result;
use crate::pdf::FormDocument;
use crate::request::FillRequest;

/// Run the full mutation pipeline over raw template bytes.
///
/// Stages run strictly in sequence — fill, lock all fields, apply
/// visibility — each taking ownership of the document produced by the
/// previous one. The result is serialized once, at the end. An absent
/// visibility map leaves every widget in place.
pub fn run_pipeline(template: &[u8], request: &FillRequest) -> Result<Vec<u8>> {
    let doc = FormDocument::from_bytes(template)?;
    info!(
        pages = doc.page_count(),
        widgets = doc.widgets().len(),
        "loaded template"
    );

    let data = request.field_data();
    let doc = fill(doc, &data)?;
    let doc = lock(doc, None)?;

    let empty = HashMap::new();
    let visibility = request.visibility_map.as_ref().unwrap_or(&empty);
    let mut doc = set_visibility(doc, visibility)?;

    doc.to_bytes()
}
