//! Error types for cvrank.

use thiserror::Error;

/// Main error type for cvrank operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Content extraction failed
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractError),

    /// Vectorization or ranking failed
    #[error("scoring error: {0}")]
    Scoring(#[from] ScoreError),

    /// I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Per-document extraction errors.
///
/// None of these abort a batch: the corpus builder records them and moves on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("file has no extension: {0}")]
    NoExtension(String),

    #[error("unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("extraction failed: {0}")]
    Failed(String),

    /// The document could not be read from its source
    #[error("read failed: {0}")]
    Read(String),
}

impl ExtractError {
    /// Short machine-readable tag for the failure cause.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoExtension(_) => "no_extension",
            Self::UnsupportedFormat(_) => "unsupported_format",
            Self::Parse(_) | Self::Failed(_) => "extraction_error",
            Self::Read(_) => "read_error",
        }
    }
}

/// Vectorization and ranking errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    #[error("corpus is empty")]
    EmptyCorpus,

    #[error("vector count mismatch: {vectors} vectors for {identifiers} identifiers")]
    LengthMismatch { vectors: usize, identifiers: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== ExtractError Tests ==========

    #[test]
    fn test_extract_error_no_extension_display() {
        let err = ExtractError::NoExtension("resume".to_string());
        assert_eq!(err.to_string(), "file has no extension: resume");
    }

    #[test]
    fn test_extract_error_unsupported_display() {
        let err = ExtractError::UnsupportedFormat("photo.xyz".to_string());
        assert_eq!(err.to_string(), "unsupported file format: photo.xyz");
    }

    #[test]
    fn test_extract_error_parse_display() {
        let err = ExtractError::Parse("invalid UTF-8".to_string());
        assert_eq!(err.to_string(), "parse error: invalid UTF-8");
    }

    #[test]
    fn test_extract_error_failed_display() {
        let err = ExtractError::Failed("PDF parsing crashed".to_string());
        assert_eq!(err.to_string(), "extraction failed: PDF parsing crashed");
    }

    #[test]
    fn test_extract_error_read_display() {
        let err = ExtractError::Read("permission denied".to_string());
        assert_eq!(err.to_string(), "read failed: permission denied");
    }

    #[test]
    fn test_extract_error_kind() {
        assert_eq!(
            ExtractError::NoExtension(String::new()).kind(),
            "no_extension"
        );
        assert_eq!(
            ExtractError::UnsupportedFormat(String::new()).kind(),
            "unsupported_format"
        );
        assert_eq!(ExtractError::Parse(String::new()).kind(), "extraction_error");
        assert_eq!(ExtractError::Failed(String::new()).kind(), "extraction_error");
        assert_eq!(ExtractError::Read(String::new()).kind(), "read_error");
    }

    // ========== ScoreError Tests ==========

    #[test]
    fn test_score_error_empty_corpus_display() {
        assert_eq!(ScoreError::EmptyCorpus.to_string(), "corpus is empty");
    }

    #[test]
    fn test_score_error_length_mismatch_display() {
        let err = ScoreError::LengthMismatch {
            vectors: 2,
            identifiers: 3,
        };
        assert_eq!(
            err.to_string(),
            "vector count mismatch: 2 vectors for 3 identifiers"
        );
    }

    // ========== Main Error Tests ==========

    #[test]
    fn test_error_from_extract_error() {
        let err: Error = ExtractError::UnsupportedFormat("a.mp4".to_string()).into();
        assert!(matches!(err, Error::Extraction(_)));
        assert!(err.to_string().contains("a.mp4"));
    }

    #[test]
    fn test_error_from_score_error() {
        let err: Error = ScoreError::EmptyCorpus.into();
        assert!(matches!(err, Error::Scoring(_)));
        assert_eq!(err.to_string(), "scoring error: corpus is empty");
    }

    #[test]
    fn test_error_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_config_display() {
        let err = Error::Config("invalid path".to_string());
        assert_eq!(err.to_string(), "config error: invalid path");
    }
}
