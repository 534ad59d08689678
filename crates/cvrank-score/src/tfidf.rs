//! TF-IDF vectorization over a query and a corpus.
//!
//! The query is fitted together with the corpus: it counts as one document
//! for document frequencies, and every vector shares the same sorted
//! vocabulary.
//!
//! Weights:
//! - `tf`: raw count, or `1 + ln(count)` with `sublinear_tf`
//! - `idf`: `ln((1 + n) / (1 + df)) + 1` when smoothed, `ln(n / df) + 1` otherwise
//!
//! Each vector is then L2-normalized, so cosine similarity reduces to a dot product.

use cvrank_core::{JointVectors, ScoreError, TermVector, Vectorizer, VectorizerConfig};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use crate::tokenizer::tokenize;

/// TF-IDF vectorizer.
#[derive(Debug, Clone, Default)]
pub struct TfIdfVectorizer {
    config: VectorizerConfig,
}

impl TfIdfVectorizer {
    /// Create a vectorizer with the given weighting options.
    #[must_use]
    pub fn new(config: VectorizerConfig) -> Self {
        Self { config }
    }

    /// Weighting options in use.
    #[must_use]
    pub fn config(&self) -> &VectorizerConfig {
        &self.config
    }

    fn tf(&self, count: u32) -> f64 {
        if self.config.sublinear_tf {
            1.0 + f64::from(count).ln()
        } else {
            f64::from(count)
        }
    }

    fn idf(&self, num_docs: usize, doc_frequency: usize) -> f64 {
        let n = num_docs as f64;
        let df = doc_frequency as f64;
        if self.config.smooth_idf {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n / df).ln() + 1.0
        }
    }
}

impl Vectorizer for TfIdfVectorizer {
    fn name(&self) -> &str {
        "tfidf"
    }

    fn vectorize(&self, query: &str, documents: &[&str]) -> Result<JointVectors, ScoreError> {
        if documents.is_empty() {
            return Err(ScoreError::EmptyCorpus);
        }

        let tokenized: Vec<Vec<String>> = std::iter::once(query)
            .chain(documents.iter().copied())
            .map(|text| tokenize(text, self.config.stop_words))
            .collect();

        let vocabulary: HashMap<&str, usize> = tokenized
            .iter()
            .flatten()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .enumerate()
            .map(|(dim, term)| (term, dim))
            .collect();

        let counts: Vec<HashMap<usize, u32>> = tokenized
            .iter()
            .map(|tokens| {
                let mut tf = HashMap::new();
                for token in tokens {
                    *tf.entry(vocabulary[token.as_str()]).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut doc_frequency = vec![0usize; vocabulary.len()];
        for tf in &counts {
            for &dim in tf.keys() {
                doc_frequency[dim] += 1;
            }
        }

        let idf: Vec<f64> = doc_frequency
            .iter()
            .map(|&df| self.idf(counts.len(), df))
            .collect();

        let mut vectors = counts.into_iter().map(|tf| {
            let entries = tf
                .into_iter()
                .map(|(dim, count)| (dim, (self.tf(count) * idf[dim]) as f32))
                .collect();
            TermVector::from_entries(entries).normalized()
        });

        let query_vector = vectors.next().unwrap_or_default();
        let document_vectors: Vec<TermVector> = vectors.collect();

        debug!(
            "Vectorized query + {} documents over {} terms",
            document_vectors.len(),
            vocabulary.len()
        );

        Ok(JointVectors {
            query: query_vector,
            documents: document_vectors,
            vocabulary_size: vocabulary.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvrank_core::StopWords;

    fn vectorize(query: &str, docs: &[&str]) -> JointVectors {
        TfIdfVectorizer::default().vectorize(query, docs).unwrap()
    }

    #[test]
    fn test_empty_corpus_is_rejected() {
        let result = TfIdfVectorizer::default().vectorize("python", &[]);
        assert_eq!(result, Err(ScoreError::EmptyCorpus));
    }

    #[test]
    fn test_shared_basis_across_query_and_documents() {
        let joint = vectorize("python developer", &["experienced python developer", "chef"]);

        // chef, developer, experienced, python
        assert_eq!(joint.vocabulary_size, 4);
        assert_eq!(joint.documents.len(), 2);
        assert_eq!(joint.query.nnz(), 2);
        assert!(joint.query.get(1) > 0.0);
        assert!(joint.query.get(3) > 0.0);
        assert_eq!(joint.documents[1].entries().len(), 1);
        assert!(joint.documents[1].get(0) > 0.0);
    }

    #[test]
    fn test_vectors_are_unit_length() {
        let joint = vectorize("rust tokio async", &["rust rust serde", "tokio async runtime"]);

        assert!((joint.query.norm() - 1.0).abs() < 1e-5);
        for doc in &joint.documents {
            assert!((doc.norm() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_smoothed_idf_weights() {
        // n = 2; "python" appears in both (idf 1), "experienced" in one (idf ln 1.5 + 1)
        let joint = vectorize("python", &["experienced python"]);
        let experienced = 1.5f64.ln() + 1.0;
        let norm = (experienced * experienced + 1.0).sqrt();

        let doc = &joint.documents[0];
        assert!((f64::from(doc.get(0)) - experienced / norm).abs() < 1e-5);
        assert!((f64::from(doc.get(1)) - 1.0 / norm).abs() < 1e-5);
    }

    #[test]
    fn test_unsmoothed_idf() {
        let vectorizer = TfIdfVectorizer::new(VectorizerConfig {
            smooth_idf: false,
            ..VectorizerConfig::default()
        });
        let joint = vectorizer
            .vectorize("python", &["experienced python"])
            .unwrap();

        let experienced = 2f64.ln() + 1.0;
        let norm = (experienced * experienced + 1.0).sqrt();
        assert!((f64::from(joint.documents[0].get(0)) - experienced / norm).abs() < 1e-5);
    }

    #[test]
    fn test_sublinear_tf_dampens_repetition() {
        let docs = ["rust rust rust rust tokio"];
        let raw = vectorize("rust", &docs);
        let sublinear = TfIdfVectorizer::new(VectorizerConfig {
            sublinear_tf: true,
            ..VectorizerConfig::default()
        })
        .vectorize("rust", &docs)
        .unwrap();

        // dimension 0 = "rust", 1 = "tokio"; "tokio" occurs once, so tf 1 either way
        assert_eq!(raw.vocabulary_size, 2);
        let raw_ratio = raw.documents[0].get(0) / raw.documents[0].get(1);
        let sub_ratio = sublinear.documents[0].get(0) / sublinear.documents[0].get(1);

        let expected = (1.0 + 4f32.ln()) / 4.0;
        assert!(sub_ratio < raw_ratio);
        assert!((sub_ratio / raw_ratio - expected).abs() < 1e-4);
    }

    #[test]
    fn test_stop_words_excluded_from_vocabulary() {
        let joint = vectorize("the developer", &["the the the"]);
        assert_eq!(joint.vocabulary_size, 1);
        assert!(joint.documents[0].is_zero());

        let keep = TfIdfVectorizer::new(VectorizerConfig {
            stop_words: StopWords::None,
            ..VectorizerConfig::default()
        })
        .vectorize("the developer", &["the the the"])
        .unwrap();
        assert_eq!(keep.vocabulary_size, 2);
        assert!(!keep.documents[0].is_zero());
    }

    #[test]
    fn test_empty_vocabulary_yields_zero_vectors() {
        let joint = vectorize("", &["", "and the of"]);
        assert_eq!(joint.vocabulary_size, 0);
        assert!(joint.query.is_zero());
        assert!(joint.documents.iter().all(TermVector::is_zero));
    }

    #[test]
    fn test_vectorize_is_deterministic() {
        let docs = ["kubernetes docker helm", "docker compose", "helm charts kubernetes"];
        let first = vectorize("kubernetes helm", &docs);
        let second = vectorize("kubernetes helm", &docs);
        assert_eq!(first, second);
    }
}
