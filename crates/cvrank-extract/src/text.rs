//! Text content extractor.

use async_trait::async_trait;
use cvrank_core::{ContentExtractor, DocumentFormat, ExtractError};

/// Extractor for plain UTF-8 text files.
pub struct TextExtractor;

impl TextExtractor {
    /// Create a new text extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentExtractor for TextExtractor {
    fn supported_formats(&self) -> &[DocumentFormat] {
        &[DocumentFormat::Txt]
    }

    async fn extract_bytes(&self, data: &[u8]) -> Result<String, ExtractError> {
        std::str::from_utf8(data)
            .map(str::to_owned)
            .map_err(|e| ExtractError::Parse(format!("invalid UTF-8: {e}")))
    }
}
