//! Core types for cvrank.
//!
//! This module contains all shared data structures used across cvrank:
//!
//! ## Ingestion
//! - [`DocumentFormat`]: Closed set of formats selected by file suffix
//! - [`RawDocument`]: An uploaded file as (name, bytes)
//! - [`ExtractedText`]: Plain text recovered from a [`RawDocument`]
//! - [`ExtractionFailure`]: Why a document was left out of the corpus
//! - [`Corpus`]: Successfully extracted documents in submission order
//!
//! ## Vector space
//! - [`VectorizerConfig`]: Term weighting options
//! - [`TermVector`]: Sparse non-negative term-weight vector
//! - [`JointVectors`]: Query and corpus vectors sharing one basis
//!
//! ## Results
//! - [`ScoredResult`]: A document identifier with its similarity score
//! - [`Ranking`]: Results ordered by score, ties in corpus order
//! - [`PipelineOutcome`]: Terminal outcome of one scoring run

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ExtractError;

// ============================================================================
// Document formats
// ============================================================================

/// Document format, selected from the declared file name's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    /// Portable Document Format (`.pdf`)
    Pdf,
    /// Word document (`.doc`, `.docx`)
    Docx,
    /// UTF-8 plain text (`.txt`)
    Txt,
    /// Any other suffix
    Unknown,
}

impl DocumentFormat {
    /// Map a file suffix (without the dot) to a format. Case-insensitive.
    #[must_use]
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "doc" | "docx" => Self::Docx,
            "txt" => Self::Txt,
            _ => Self::Unknown,
        }
    }

    /// Detect the format of a declared file name.
    ///
    /// Returns `None` when the name has no suffix at all.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        extension_of(name).map(Self::from_extension)
    }

    /// Lowercase display name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Txt => "txt",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Substring after the last `.` of a name, if non-empty.
#[must_use]
pub fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty())
}

// ============================================================================
// Documents
// ============================================================================

/// An uploaded document, owned in memory for the duration of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Declared name, unique within a batch (usually the file name)
    pub identifier: String,
    /// Format derived from the identifier's suffix
    pub format: DocumentFormat,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl RawDocument {
    /// Create a document, deriving its format from the declared name.
    pub fn new(identifier: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let identifier = identifier.into();
        let format = DocumentFormat::from_name(&identifier).unwrap_or(DocumentFormat::Unknown);
        Self {
            identifier,
            format,
            bytes: bytes.into(),
        }
    }

    /// Whether the declared name carries a suffix.
    #[must_use]
    pub fn has_extension(&self) -> bool {
        extension_of(&self.identifier).is_some()
    }
}

/// Text successfully extracted from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedText {
    /// Identifier of the source document
    pub identifier: String,
    /// Extracted plain text (may be empty)
    pub text: String,
}

/// A document that was left out of the corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    /// Identifier of the source document
    pub identifier: String,
    /// Cause of the failure
    pub error: ExtractError,
}

/// Successfully extracted documents, in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    entries: Vec<ExtractedText>,
    skipped: Vec<ExtractionFailure>,
}

impl Corpus {
    /// Create an empty corpus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a successfully extracted document.
    pub fn push(&mut self, entry: ExtractedText) {
        self.entries.push(entry);
    }

    /// Record a document that failed extraction.
    pub fn record_failure(&mut self, failure: ExtractionFailure) {
        self.skipped.push(failure);
    }

    /// Extracted documents.
    #[must_use]
    pub fn entries(&self) -> &[ExtractedText] {
        &self.entries
    }

    /// Documents that failed extraction.
    #[must_use]
    pub fn skipped(&self) -> &[ExtractionFailure] {
        &self.skipped
    }

    /// Number of extracted documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no document was extracted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow the texts in corpus order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.text.as_str()).collect()
    }

    /// Split into entries and skipped documents.
    #[must_use]
    pub fn into_parts(self) -> (Vec<ExtractedText>, Vec<ExtractionFailure>) {
        (self.entries, self.skipped)
    }
}

// ============================================================================
// Vector space
// ============================================================================

/// Stop-word list applied before weighting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    /// Standard English stop-word list
    #[default]
    English,
    /// Keep every token
    None,
}

/// Configuration for term weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorizerConfig {
    /// Stop words removed from the vocabulary
    #[serde(default)]
    pub stop_words: StopWords,
    /// Use `1 + ln(tf)` instead of raw counts
    #[serde(default)]
    pub sublinear_tf: bool,
    /// Add one to document frequencies, as if an extra document held every term
    #[serde(default = "default_smooth_idf")]
    pub smooth_idf: bool,
}

fn default_smooth_idf() -> bool {
    true
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWords::English,
            sublinear_tf: false,
            smooth_idf: default_smooth_idf(),
        }
    }
}

/// Sparse term-weight vector, entries sorted by dimension.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    entries: Vec<(usize, f32)>,
}

impl TermVector {
    /// Build from `(dimension, weight)` pairs.
    ///
    /// Entries are sorted, duplicate dimensions are summed and zero weights dropped.
    #[must_use]
    pub fn from_entries(mut entries: Vec<(usize, f32)>) -> Self {
        entries.sort_by_key(|&(dim, _)| dim);
        entries.dedup_by(|next, kept| {
            if next.0 == kept.0 {
                kept.1 += next.1;
                true
            } else {
                false
            }
        });
        entries.retain(|&(_, w)| w != 0.0);
        Self { entries }
    }

    /// Non-zero entries sorted by dimension.
    #[must_use]
    pub fn entries(&self) -> &[(usize, f32)] {
        &self.entries
    }

    /// Number of non-zero entries.
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    /// True when every weight is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight at a dimension (0.0 when absent).
    #[must_use]
    pub fn get(&self, dim: usize) -> f32 {
        self.entries
            .binary_search_by_key(&dim, |&(d, _)| d)
            .map_or(0.0, |i| self.entries[i].1)
    }

    /// Euclidean norm.
    #[must_use]
    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    /// Dot product with another vector from the same space.
    #[must_use]
    pub fn dot(&self, other: &Self) -> f32 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (da, wa) = self.entries[i];
            let (db, wb) = other.entries[j];
            match da.cmp(&db) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += wa * wb;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Scale to unit length. A zero vector is returned unchanged.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }
}

/// Query and corpus vectors built over one shared vocabulary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JointVectors {
    /// Query vector
    pub query: TermVector,
    /// One vector per corpus text, in corpus order
    pub documents: Vec<TermVector>,
    /// Number of dimensions in the shared basis
    pub vocabulary_size: usize,
}

// ============================================================================
// Results
// ============================================================================

/// A document with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredResult {
    /// Identifier of the source document
    pub identifier: String,
    /// Cosine similarity in `[0, 1]`
    pub score: f32,
}

/// Scored documents, highest score first.
///
/// Equal scores keep the order in which they were supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    results: Vec<ScoredResult>,
}

impl Ranking {
    /// Order results by score, descending, with a stable sort.
    #[must_use]
    pub fn from_scores(mut results: Vec<ScoredResult>) -> Self {
        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        Self { results }
    }

    /// Ranked results.
    #[must_use]
    pub fn results(&self) -> &[ScoredResult] {
        &self.results
    }

    /// Iterate in rank order.
    pub fn iter(&self) -> std::slice::Iter<'_, ScoredResult> {
        self.results.iter()
    }

    /// Number of ranked documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True when nothing was ranked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// The best `n` results (all of them when `n` exceeds the length).
    #[must_use]
    pub fn top(&self, n: usize) -> &[ScoredResult] {
        &self.results[..n.min(self.results.len())]
    }

    /// Zero-based rank of a document.
    #[must_use]
    pub fn position(&self, identifier: &str) -> Option<usize> {
        self.results.iter().position(|r| r.identifier == identifier)
    }
}

impl<'a> IntoIterator for &'a Ranking {
    type Item = &'a ScoredResult;
    type IntoIter = std::slice::Iter<'a, ScoredResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

/// Terminal outcome of one scoring run.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineOutcome {
    /// No usable query, or no usable documents at all
    MissingInput,
    /// Documents were supplied but none could be read
    NoReadableDocuments {
        /// Every supplied document, with its failure
        skipped: Vec<ExtractionFailure>,
    },
    /// Normal success
    Ranked {
        /// Number of successfully processed documents
        count: usize,
        /// Documents ordered by relevance
        ranking: Ranking,
        /// Documents left out of the ranking
        skipped: Vec<ExtractionFailure>,
    },
}

impl PipelineOutcome {
    /// The ranking, if the run produced one.
    #[must_use]
    pub fn ranking(&self) -> Option<&Ranking> {
        match self {
            Self::Ranked { ranking, .. } => Some(ranking),
            _ => None,
        }
    }

    /// Documents that were left out.
    #[must_use]
    pub fn skipped(&self) -> &[ExtractionFailure] {
        match self {
            Self::MissingInput => &[],
            Self::NoReadableDocuments { skipped } | Self::Ranked { skipped, .. } => skipped,
        }
    }

    /// Short machine-readable status.
    #[must_use]
    pub fn status(&self) -> &'static str {
        match self {
            Self::MissingInput => "missing_input",
            Self::NoReadableDocuments { .. } => "no_readable_documents",
            Self::Ranked { .. } => "ranked",
        }
    }

    /// User-facing summary line.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::MissingInput => {
                "Please provide a job description and at least one resume.".to_string()
            }
            Self::NoReadableDocuments { .. } => {
                "None of the uploaded files could be read.".to_string()
            }
            Self::Ranked { count, .. } => {
                let noun = if *count == 1 { "resume" } else { "resumes" };
                format!("Processed {count} {noun} successfully!")
            }
        }
    }
}
