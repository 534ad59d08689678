//! # cvrank-extract
//!
//! Plain-text extraction from uploaded documents for the cvrank scoring pipeline.
//!
//! Every extractor works on in-memory bytes; nothing is staged on disk.
//!
//! ## Supported Formats
//!
//! | Extractor | Suffixes | Backend |
//! |-----------|----------|---------|
//! | [`TextExtractor`] | `.txt` | UTF-8 decoding |
//! | [`PdfExtractor`] | `.pdf` | `lopdf`, pages concatenated in order |
//! | [`DocxExtractor`] | `.doc`, `.docx` | `docx-rs`, paragraphs and tables |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cvrank_core::RawDocument;
//! use cvrank_extract::ExtractorRegistry;
//!
//! let registry = ExtractorRegistry::standard();
//! let doc = RawDocument::new("jane.txt", b"Python developer".to_vec());
//! let extracted = registry.extract(&doc).await?;
//! println!("Extracted {} bytes", extracted.text.len());
//! ```
//!
//! ## Failure Handling
//!
//! [`ExtractorRegistry::extract`] returns
//! [`ExtractError`](cvrank_core::ExtractError) for names without a suffix,
//! unsupported suffixes, and parser failures. Errors are logged with the
//! document identifier and never panic past the registry. PDF and Word parsing
//! run on the blocking pool so a parser panic becomes an error value.

pub mod docx;
pub mod pdf;
pub mod registry;
pub mod text;

pub use docx::DocxExtractor;
pub use pdf::PdfExtractor;
pub use registry::ExtractorRegistry;
pub use text::TextExtractor;
