//! PDF FormFill CLI - Command line tool for filling PDF form templates.
//!
//! Runs the mutation pipeline against local files, without object
//! storage: useful for testing a template before deploying it.

use anyhow::{Context, Result};
use clap::Parser;
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use pdf_formfill_core::{FieldData, FillRequest, FormDocument, fill, lock, set_visibility};

#[derive(Parser, Debug)]
#[command(name = "pdf-formfill")]
#[command(author, version, about = "Fill PDF form templates", long_about = None)]
struct Args {
    /// Input PDF template
    #[arg(required = true)]
    input: PathBuf,

    /// Output PDF file (default: input-filled.pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON file with field name → value pairs
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// JSON file with field name → shown/hidden pairs
    #[arg(long)]
    visibility: Option<PathBuf>,

    /// Lock only these fields (comma-separated; default: all fields)
    #[arg(long, conflicts_with = "no_lock")]
    lock_fields: Option<String>,

    /// Skip the read-only locking stage
    #[arg(long)]
    no_lock: bool,

    /// Verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_field_data(path: &Path) -> Result<FieldData> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read data file: {}", path.display()))?;
    let fields = serde_json::from_str(&content)
        .context(format!("Failed to parse data file: {}", path.display()))?;

    // Reuse the request coercion so CLI and service fill identically
    let request = FillRequest {
        fields,
        ..Default::default()
    };
    Ok(request.field_data())
}

fn read_visibility(path: &Path) -> Result<HashMap<String, bool>> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read visibility file: {}", path.display()))?;
    serde_json::from_str(&content)
        .context(format!("Failed to parse visibility file: {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging
    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Load inputs
    let template = std::fs::read(&args.input)
        .context(format!("Failed to read template: {}", args.input.display()))?;

    let data = args
        .data
        .as_deref()
        .map(read_field_data)
        .transpose()?
        .unwrap_or_default();

    let visibility = args
        .visibility
        .as_deref()
        .map(read_visibility)
        .transpose()?
        .unwrap_or_default();

    let lock_fields: Option<HashSet<String>> = args.lock_fields.as_deref().map(|names| {
        names
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect()
    });

    // Run the pipeline
    let doc = FormDocument::from_bytes(&template)
        .context(format!("Failed to parse template: {}", args.input.display()))?;
    info!(
        "Template has {} pages, {} named widgets",
        doc.page_count(),
        doc.widgets().len()
    );

    let doc = fill(doc, &data).context("Failed to fill fields")?;

    let doc = if args.no_lock {
        doc
    } else {
        lock(doc, lock_fields.as_ref()).context("Failed to lock fields")?
    };

    let mut doc = set_visibility(doc, &visibility).context("Failed to apply visibility")?;

    let output_bytes = doc.to_bytes().context("Failed to serialize output")?;

    // Determine output path
    let output_path = args.output.unwrap_or_else(|| {
        let stem = args
            .input
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("output");
        args.input.with_file_name(format!("{stem}-filled.pdf"))
    });

    // Save output
    std::fs::write(&output_path, output_bytes)
        .context(format!("Failed to write output: {}", output_path.display()))?;

    // CLI output is intentional
    #[allow(clippy::print_stdout)]
    {
        println!("Filled PDF saved to: {}", output_path.display());
    }

    Ok(())
}
