//! PDF FormFill Server - HTTP server for filling PDF form templates.

mod helpers;
mod routes;
mod state;

use anyhow::{Context, Result};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use pdf_formfill_core::AppConfig;
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "pdf-formfill-server")]
#[command(author, version, about = "PDF FormFill Server", long_about = None)]
struct Args {
    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Port to bind to
    #[arg(short, long, default_value = "3000")]
    port: u16,

    /// Bucket holding templates and filled documents
    #[arg(long, env = "FORMFILL_BUCKET")]
    bucket: Option<String>,

    /// Template key used when a request does not name one
    #[arg(long, env = "FORMFILL_TEMPLATE_KEY")]
    template_key: Option<String>,

    /// Endpoint URL override for S3-compatible stores
    #[arg(long, env = "FORMFILL_ENDPOINT_URL")]
    endpoint_url: Option<String>,

    /// Config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before parsing args so env vars are available)
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Setup logging
    let default_level = match args.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    // Load or create config
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path).context("Failed to load config file")?
    } else {
        AppConfig::load()
    };

    // Override config with CLI arguments
    if let Some(bucket) = args.bucket {
        config.storage.bucket = bucket;
    }
    if let Some(template_key) = args.template_key {
        config.storage.template_key = template_key;
    }
    if let Some(endpoint_url) = args.endpoint_url {
        config.storage.endpoint_url = Some(endpoint_url);
    }

    info!(
        bucket = %config.storage.bucket,
        template = %config.storage.template_key,
        "Initializing form filler"
    );
    let state = Arc::new(
        AppState::new(config)
            .await
            .context("Failed to initialize application state")?,
    );

    // Build router
    let app = Router::new()
        .route("/health", get(routes::health))
        .route("/api/fill", post(routes::fill_form))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive())
                // Requests are field data, not documents; keep bodies small
                .layer(DefaultBodyLimit::max(1024 * 1024)),
        )
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port).parse()?;
    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
