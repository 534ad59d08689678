//! # cvrank-core
//!
//! Core types and traits for cvrank, a batch resume-to-job-description ranker.
//!
//! This crate provides the foundational abstractions used throughout cvrank:
//!
//! - **Content Extraction**: [`ContentExtractor`] trait for turning document bytes into text
//! - **Vectorization**: [`Vectorizer`] trait for building a shared term-weight space
//! - **Results**: [`Ranking`] and [`PipelineOutcome`] returned to callers
//!
//! ## Architecture
//!
//! ```text
//! RawDocument → ContentExtractor → Corpus → Vectorizer → cosine → Ranking
//!                                                ↑
//!                                              query
//! ```
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`RawDocument`] | An uploaded file held in memory |
//! | [`DocumentFormat`] | Format chosen from the file suffix |
//! | [`ExtractedText`] | Text recovered from a document |
//! | [`Corpus`] | Extracted documents plus skipped failures |
//! | [`TermVector`] | Sparse term-weight vector |
//! | [`Ranking`] | Scored documents, best first |
//! | [`PipelineOutcome`] | Result of one scoring run |
//!
//! ## Related Crates
//!
//! - `cvrank-extract`: PDF, Word and plain-text extractors
//! - `cvrank-score`: TF-IDF vectorizer and cosine ranker
//! - `cvrank-pipeline`: Corpus builder and pipeline orchestrator

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, ExtractError, ScoreError};
pub use traits::*;
pub use types::*;
