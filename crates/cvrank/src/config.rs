//! Configuration handling for cvrank.
//!
//! The config file is optional; every field has a default.

use cvrank_core::{Error, VectorizerConfig};
use cvrank_pipeline::PipelineConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::Level;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Term weighting options, passed to the vectorizer unchanged
    #[serde(default)]
    pub scoring: VectorizerConfig,

    /// Extraction configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load from the default config path, falling back to defaults if absent.
    pub fn load() -> Result<Self, Error> {
        Self::load_from(None)
    }

    /// Load from an explicit path, or from the default path when `None`.
    ///
    /// An explicit path must exist; the default path may be missing.
    pub fn load_from(path: Option<PathBuf>) -> Result<Self, Error> {
        let (path, required) = match path {
            Some(path) => (path, true),
            None => match Self::config_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        if !required && !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        Self::from_toml(&contents)
    }

    /// Parse a TOML document.
    pub fn from_toml(contents: &str) -> Result<Self, Error> {
        toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Default config file location.
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Sample configuration file with every option at its default.
    pub fn sample_toml() -> &'static str {
        r#"# cvrank configuration

[scoring]
# Stop-word list removed before weighting: "english" or "none"
stop_words = "english"
# Use 1 + ln(tf) instead of raw term counts
sublinear_tf = false
# Smooth document frequencies when computing IDF
smooth_idf = true

[extraction]
# Files larger than this many bytes are skipped
max_file_size = 52428800
# Extract documents concurrently
concurrent = true

[output]
# Show only the best N results (omit to show all)
# limit = 10
# Decimal places for scores
precision = 4

[logging]
level = "info"
"#
    }

    /// Pipeline options derived from this config.
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            vectorizer: self.scoring,
            concurrent_extraction: self.extraction.concurrent,
        }
    }
}

/// Extraction-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Maximum file size to read (bytes)
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Extract documents concurrently
    #[serde(default = "default_concurrent")]
    pub concurrent: bool,
}

fn default_max_file_size() -> u64 {
    52_428_800 // 50MB
}

fn default_concurrent() -> bool {
    true
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_file_size: default_max_file_size(),
            concurrent: default_concurrent(),
        }
    }
}

/// Output-related configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default result limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,

    /// Decimal places for scores
    #[serde(default = "default_precision")]
    pub precision: usize,
}

fn default_precision() -> usize {
    4
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            limit: None,
            precision: default_precision(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    /// Parsed log level; unknown names fall back to INFO.
    pub fn level(&self) -> Level {
        self.level.parse().unwrap_or(Level::INFO)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Get the XDG config directory for cvrank.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("CVRANK_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }

    ProjectDirs::from("", "", "cvrank").map(|dirs| dirs.config_dir().to_path_buf())
}
