//! Corpus assembly from raw uploads.

use cvrank_core::{Corpus, ExtractionFailure, RawDocument};
use cvrank_extract::ExtractorRegistry;
use futures::future::join_all;
use std::sync::Arc;
use tracing::{debug, info};

/// Extracts a batch of documents into a [`Corpus`].
pub struct CorpusBuilder {
    /// Extractor registry
    extractors: Arc<ExtractorRegistry>,
    /// Extract documents concurrently instead of one at a time
    concurrent: bool,
}

impl CorpusBuilder {
    /// Create a new corpus builder.
    pub fn new(extractors: Arc<ExtractorRegistry>, concurrent: bool) -> Self {
        Self {
            extractors,
            concurrent,
        }
    }

    /// Extract every document, keeping successes in submission order.
    ///
    /// Documents with an empty identifier are dropped without extraction.
    /// Failures are recorded in [`Corpus::skipped`].
    pub async fn build(&self, documents: Vec<RawDocument>) -> Corpus {
        let documents: Vec<RawDocument> = documents
            .into_iter()
            .filter(|doc| !doc.identifier.is_empty())
            .collect();
        debug!("Building corpus from {} documents", documents.len());

        let results = if self.concurrent {
            join_all(documents.iter().map(|doc| self.extractors.extract(doc))).await
        } else {
            let mut results = Vec::with_capacity(documents.len());
            for doc in &documents {
                results.push(self.extractors.extract(doc).await);
            }
            results
        };

        let mut corpus = Corpus::new();
        for (doc, result) in documents.into_iter().zip(results) {
            match result {
                Ok(extracted) => corpus.push(extracted),
                Err(error) => corpus.record_failure(ExtractionFailure {
                    identifier: doc.identifier,
                    error,
                }),
            }
        }

        info!(
            "Extracted {} documents ({} skipped)",
            corpus.len(),
            corpus.skipped().len()
        );
        corpus
    }
}
