//! PDF content extractor.
//!
//! Uses lopdf to decode the content stream of each page and collect the
//! shown text. Nothing is written to stdout while extracting.

use async_trait::async_trait;
use cvrank_core::{ContentExtractor, DocumentFormat, ExtractError};
use lopdf::Document;
use tracing::{debug, warn};

/// Extractor for PDF files.
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentExtractor for PdfExtractor {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Pdf]
    }

    async fn extract_bytes(&self, data: &[u8]) -> Result<String, ExtractError> {
        debug!("Extracting PDF ({} bytes)", data.len());

        // Parsing is CPU-bound and may panic on malformed input; a panic
        // surfaces here as a join error instead of unwinding into the caller.
        let bytes = data.to_vec();
        let pages = tokio::task::spawn_blocking(move || extract_pdf_pages(&bytes))
            .await
            .map_err(|e| ExtractError::Failed(format!("Task join error: {e}")))?
            .map_err(|e| ExtractError::Parse(format!("PDF extraction failed: {e}")))?;

        debug!("Extracted {} PDF pages", pages.len());
        Ok(pages.concat())
    }
}

/// Extract the text of every page, in page order.
///
/// A page whose content stream cannot be decoded contributes no text; the
/// document only fails when it cannot be loaded at all.
fn extract_pdf_pages(bytes: &[u8]) -> Result<Vec<String>, String> {
    let doc = Document::load_mem(bytes).map_err(|e| e.to_string())?;

    let mut pages = Vec::new();
    for page_num in doc.get_pages().keys() {
        match doc.extract_text(&[*page_num]) {
            Ok(text) => pages.push(text),
            Err(e) => warn!("Skipping unreadable PDF page {}: {}", page_num, e),
        }
    }
    Ok(pages)
}
