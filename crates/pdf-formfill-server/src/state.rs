use pdf_formfill_core::{AppConfig, FormFiller};

/// Global application state
///
/// Holds the configured form filler. There is deliberately no per-request
/// or cross-request document state: every fill request fetches its
/// template fresh and owns its document exclusively.
pub struct AppState {
    pub filler: FormFiller,
}

impl AppState {
    pub async fn new(config: AppConfig) -> pdf_formfill_core::Result<Self> {
        let filler = FormFiller::new(config).await?;
        Ok(Self { filler })
    }
}
