//! Fill route - runs the form-fill pipeline for one request.

use axum::{Json, extract::State};
use std::sync::Arc;
use tracing::info;

use pdf_formfill_core::{FillRequest, FillResponse};

use crate::helpers::{ResultExt, RouteResult};
use crate::state::AppState;

/// Fill the template with the submitted data and return a signed
/// download link for the result.
pub async fn fill_form(
    State(state): State<Arc<AppState>>,
    Json(request): Json<FillRequest>,
) -> RouteResult<Json<FillResponse>> {
    let outcome = state.filler.process(&request).await.or_error_status()?;
    info!(key = %outcome.key, "fill request complete");

    Ok(Json(FillResponse { url: outcome.url }))
}
