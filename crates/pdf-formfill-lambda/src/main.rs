//! AWS Lambda handler for the form-fill service
//!
//! This Lambda function handles:
//! - POST / or /fill - Fill the template with submitted data
//! - GET /health - Health check
//!
//! ## Deployment
//!
//! ```bash
//! # Install cargo-lambda
//! cargo install cargo-lambda
//!
//! # Build for ARM64
//! cargo lambda build --release --arm64
//!
//! # Deploy
//! cargo lambda deploy --iam-role arn:aws:iam::ACCOUNT:role/pdf-formfill-lambda
//! ```

use lambda_http::{Body, Error, Request, Response, http::StatusCode, run, service_fn};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::{error, info, instrument};

use pdf_formfill_core::{AppConfig, Error as CoreError, FillRequest, FormFiller};

/// Global form filler (initialized once per execution environment).
///
/// Holds configuration and the storage client only; documents are never
/// cached or shared between invocations.
static FILLER: OnceCell<Arc<FormFiller>> = OnceCell::const_new();

/// Get or initialize the form filler
async fn get_filler() -> Result<Arc<FormFiller>, Error> {
    let filler = FILLER
        .get_or_try_init(|| async {
            let config = AppConfig::from_env()?;
            let filler = FormFiller::new(config).await?;
            Ok::<_, CoreError>(Arc::new(filler))
        })
        .await?;
    Ok(Arc::clone(filler))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // CloudWatch-optimized tracing: JSON, no ANSI, no duplicate timestamps
    tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_current_span(false)
        .without_time()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting pdf-formfill Lambda");

    run(service_fn(handler)).await
}

/// Main Lambda handler
#[instrument(skip(event), fields(method = %event.method(), path = %event.uri().path()))]
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().clone();
    let path = event.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("POST", "/" | "/fill") => handle_fill(event).await,
        ("GET", "/health") => Ok(json_response(StatusCode::OK, json!({ "status": "ok" }))),
        _ => Ok(json_response(
            StatusCode::NOT_FOUND,
            json!({ "error": "Not found" }),
        )),
    }
}

/// Fill the template and respond with a signed download link
async fn handle_fill(event: Request) -> Result<Response<Body>, Error> {
    let request: FillRequest = match serde_json::from_slice(event.body()) {
        Ok(request) => request,
        Err(e) => {
            return Ok(json_response(
                StatusCode::BAD_REQUEST,
                json!({ "error": format!("Invalid request body: {e}") }),
            ));
        }
    };

    let filler = get_filler().await?;
    match filler.process(&request).await {
        Ok(outcome) => {
            info!(key = %outcome.key, "fill request complete");
            Ok(json_response(StatusCode::OK, json!({ "url": outcome.url })))
        }
        Err(e) => {
            error!("fill request failed: {e}");
            Ok(json_response(status_for(&e), json!({ "error": e.to_string() })))
        }
    }
}

/// Map a core error kind to a response status.
fn status_for(error: &CoreError) -> StatusCode {
    match error {
        CoreError::TemplateNotFound { .. } => StatusCode::NOT_FOUND,
        CoreError::MalformedDocument(_) => StatusCode::UNPROCESSABLE_ENTITY,
        CoreError::TemplateFetch { .. }
        | CoreError::StorageWrite { .. }
        | CoreError::UrlSign { .. } => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn json_response(status: StatusCode, body: serde_json::Value) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(Body::Text(body.to_string()))
        .unwrap_or_else(|_| Response::new(Body::Empty))
}
