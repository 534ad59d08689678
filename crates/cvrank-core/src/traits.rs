//! Core traits for cvrank components.
//!
//! - [`ContentExtractor`]: Turn document bytes into plain text
//! - [`Vectorizer`]: Map a query and a corpus into one term-weight space
//!
//! Both are object-safe so registries and pipelines can hold them behind `Arc<dyn _>`.

use async_trait::async_trait;

use crate::error::{ExtractError, ScoreError};
use crate::types::{DocumentFormat, JointVectors};

// ============================================================================
// Content Extraction
// ============================================================================

/// Trait for extracting plain text from in-memory documents.
#[async_trait]
pub trait ContentExtractor: Send + Sync {
    /// Formats this extractor handles.
    fn supported_formats(&self) -> &[DocumentFormat];

    /// Check if this extractor can handle the given format.
    fn can_extract(&self, format: DocumentFormat) -> bool {
        self.supported_formats().contains(&format)
    }

    /// Extract plain text from document bytes.
    async fn extract_bytes(&self, data: &[u8]) -> Result<String, ExtractError>;
}

// ============================================================================
// Vectorization
// ============================================================================

/// Trait for building a shared vector space over a query and a corpus.
pub trait Vectorizer: Send + Sync {
    /// Name of this weighting scheme.
    fn name(&self) -> &str;

    /// Vectorize the query and every document over one basis.
    ///
    /// Returns [`ScoreError::EmptyCorpus`] when `documents` is empty.
    fn vectorize(&self, query: &str, documents: &[&str]) -> Result<JointVectors, ScoreError>;
}
