//! Scoring pipeline orchestration.

use cvrank_core::{PipelineOutcome, RawDocument, Vectorizer, VectorizerConfig};
use cvrank_extract::ExtractorRegistry;
use cvrank_score::{rank_corpus, TfIdfVectorizer};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::corpus::CorpusBuilder;

/// Configuration for the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Term weighting options
    pub vectorizer: VectorizerConfig,
    /// Extract documents concurrently
    pub concurrent_extraction: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            vectorizer: VectorizerConfig::default(),
            concurrent_extraction: true,
        }
    }
}

/// Ranks uploaded documents against a job description.
///
/// Each [`run`](Self::run) builds its vector space from scratch; nothing is
/// carried between runs.
pub struct MatchPipeline {
    /// Corpus builder
    corpus_builder: CorpusBuilder,
    /// Vectorizer for the joint query + corpus space
    vectorizer: Arc<dyn Vectorizer>,
}

impl MatchPipeline {
    /// Create a pipeline from explicit components.
    pub fn new(
        extractors: Arc<ExtractorRegistry>,
        vectorizer: Arc<dyn Vectorizer>,
        concurrent_extraction: bool,
    ) -> Self {
        Self {
            corpus_builder: CorpusBuilder::new(extractors, concurrent_extraction),
            vectorizer,
        }
    }

    /// Create a pipeline with the standard extractors and a TF-IDF vectorizer.
    #[must_use]
    pub fn with_config(config: PipelineConfig) -> Self {
        Self::new(
            Arc::new(ExtractorRegistry::standard()),
            Arc::new(TfIdfVectorizer::new(config.vectorizer)),
            config.concurrent_extraction,
        )
    }

    /// Score documents against the query.
    ///
    /// Always returns an outcome; per-document failures end up in `skipped`.
    pub async fn run(&self, query: &str, documents: Vec<RawDocument>) -> PipelineOutcome {
        if query.trim().is_empty() || documents.iter().all(|d| d.identifier.is_empty()) {
            debug!("Missing query or documents");
            return PipelineOutcome::MissingInput;
        }

        let corpus = self.corpus_builder.build(documents).await;
        if corpus.is_empty() {
            warn!("None of the {} documents could be read", corpus.skipped().len());
            let (_, skipped) = corpus.into_parts();
            return PipelineOutcome::NoReadableDocuments { skipped };
        }

        let vectorized = self.vectorizer.vectorize(query, &corpus.texts());
        let (entries, skipped) = corpus.into_parts();
        let joint = match vectorized {
            Ok(joint) => joint,
            Err(e) => {
                warn!("Vectorization failed: {}", e);
                return PipelineOutcome::NoReadableDocuments { skipped };
            }
        };

        let ranking = match rank_corpus(&joint, &entries) {
            Ok(ranking) => ranking,
            Err(e) => {
                warn!("Ranking failed: {}", e);
                return PipelineOutcome::NoReadableDocuments { skipped };
            }
        };

        info!(
            "Ranked {} documents with {} ({} terms)",
            ranking.len(),
            self.vectorizer.name(),
            joint.vocabulary_size
        );

        PipelineOutcome::Ranked {
            count: entries.len(),
            ranking,
            skipped,
        }
    }
}

impl Default for MatchPipeline {
    fn default() -> Self {
        Self::with_config(PipelineConfig::default())
    }
}
