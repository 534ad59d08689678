//! Extractor registry for managing content extractors.

use cvrank_core::{ContentExtractor, DocumentFormat, ExtractError, ExtractedText, RawDocument};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{DocxExtractor, PdfExtractor, TextExtractor};

/// Registry of content extractors.
pub struct ExtractorRegistry {
    /// Named extractors
    extractors: HashMap<String, Arc<dyn ContentExtractor>>,
    /// Format to extractor name mapping
    format_mapping: HashMap<DocumentFormat, String>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            format_mapping: HashMap::new(),
        }
    }

    /// Create a registry with the text, PDF and Word extractors.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();
        registry.register("text", TextExtractor::new());
        registry.register("pdf", PdfExtractor::new());
        registry.register("docx", DocxExtractor::new());
        registry
    }

    /// Register an extractor.
    ///
    /// A later registration for the same format replaces the earlier mapping.
    pub fn register<E: ContentExtractor + 'static>(&mut self, name: &str, extractor: E) {
        let extractor = Arc::new(extractor);
        for format in extractor.supported_formats() {
            self.format_mapping.insert(*format, name.to_string());
        }
        self.extractors.insert(name.to_string(), extractor);
    }

    /// Get the extractor for a format.
    #[must_use]
    pub fn get_for_format(&self, format: DocumentFormat) -> Option<Arc<dyn ContentExtractor>> {
        self.format_mapping
            .get(&format)
            .and_then(|name| self.extractors.get(name))
            .cloned()
    }

    /// Formats that have a registered extractor.
    #[must_use]
    pub fn supported_formats(&self) -> Vec<DocumentFormat> {
        let mut formats: Vec<DocumentFormat> = self.format_mapping.keys().copied().collect();
        formats.sort_by_key(DocumentFormat::as_str);
        formats
    }

    /// Extract the text of a document.
    ///
    /// Every failure is logged and returned; nothing here panics.
    pub async fn extract(&self, doc: &RawDocument) -> Result<ExtractedText, ExtractError> {
        let result = self.extract_inner(doc).await;
        match &result {
            Ok(extracted) => debug!(
                "Extracted {} ({}, {} chars)",
                doc.identifier,
                doc.format,
                extracted.text.len()
            ),
            Err(e) => warn!("Skipping {}: {}", doc.identifier, e),
        }
        result
    }

    async fn extract_inner(&self, doc: &RawDocument) -> Result<ExtractedText, ExtractError> {
        if !doc.has_extension() {
            return Err(ExtractError::NoExtension(doc.identifier.clone()));
        }

        let extractor = self
            .get_for_format(doc.format)
            .ok_or_else(|| ExtractError::UnsupportedFormat(doc.identifier.clone()))?;

        let text = extractor.extract_bytes(&doc.bytes).await?;

        Ok(ExtractedText {
            identifier: doc.identifier.clone(),
            text,
        })
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
