//! Scoring pipeline for cvrank.
//!
//! This crate wires the scoring stages together:
//! extraction → corpus → vectorization → ranking.
//!
//! # Components
//!
//! - [`MatchPipeline`]: Runs one batch and returns a
//!   [`PipelineOutcome`](cvrank_core::PipelineOutcome)
//! - [`CorpusBuilder`]: Extracts documents, isolating per-file failures
//! - [`PipelineConfig`]: Weighting and extraction options
//!
//! # Example
//!
//! ```rust,ignore
//! use cvrank_core::{PipelineOutcome, RawDocument};
//! use cvrank_pipeline::MatchPipeline;
//!
//! let pipeline = MatchPipeline::default();
//! let docs = vec![RawDocument::new("jane.txt", b"Experienced Python developer".to_vec())];
//!
//! match pipeline.run("python developer", docs).await {
//!     PipelineOutcome::Ranked { ranking, .. } => {
//!         for result in &ranking {
//!             println!("{}: {:.3}", result.identifier, result.score);
//!         }
//!     }
//!     other => println!("{}", other.message()),
//! }
//! ```

pub mod corpus;
pub mod pipeline;

pub use corpus::CorpusBuilder;
pub use pipeline::{MatchPipeline, PipelineConfig};
