use std::path::PathBuf;
use std::sync::Arc;

use crate::conf::settings;
use crate::pkg::internal::ai::client::LlmClient;
use crate::pkg::internal::ai::generate::GenerateOps;
use crate::pkg::internal::ai::read::{ExtractOps, PdfExtractor};
use crate::prelude::Result;

/// Per-process handles shared by every request. Both capabilities sit
/// behind trait objects so tests can swap in fakes.
#[derive(Clone)]
pub struct AppState {
    pub ai_client: Arc<dyn GenerateOps>,
    pub extractor: Arc<dyn ExtractOps>,
    pub upload_dir: PathBuf,
}

impl AppState {
    pub fn new() -> Result<AppState> {
        Ok(AppState {
            ai_client: Arc::new(LlmClient::from_settings()?),
            extractor: Arc::new(PdfExtractor),
            upload_dir: PathBuf::from(&settings.upload_dir),
        })
    }
}
