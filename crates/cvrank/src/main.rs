//! # cvrank CLI
//!
//! Ranks resumes (PDF, Word, plain text) by how well they match a job
//! description. Every run builds a fresh TF-IDF space over the job
//! description and the readable resumes, then orders the resumes by cosine
//! similarity to the job description.
//!
//! ## Commands
//!
//! - `cvrank rank --job <TEXT> <FILES>...` - Score resumes against a job description
//! - `cvrank config show|init|path` - Inspect configuration
//!
//! ## Examples
//!
//! ```bash
//! # Rank every resume in a folder
//! cvrank rank --job "Senior Rust developer, tokio, async" resumes/*
//!
//! # Read the job description from a file and emit JSON
//! cvrank --format json rank --job-file job.txt --limit 5 resumes/*
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cvrank_core::{ExtractionFailure, PipelineOutcome};
use cvrank_pipeline::MatchPipeline;
use serde::Serialize;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod input;

use config::Config;
use input::LoadedFiles;

#[derive(Parser)]
#[command(name = "cvrank")]
#[command(about = "Rank resumes against a job description")]
#[command(version)]
struct Cli {
    /// Path to config file (default: ~/.config/cvrank/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, global = true, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Score resumes against a job description
    Rank {
        /// Job description text
        #[arg(short, long, conflicts_with = "job_file")]
        job: Option<String>,

        /// Read the job description from a file
        #[arg(long)]
        job_file: Option<PathBuf>,

        /// Show only the best N results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Resume files (.pdf, .docx, .txt)
        files: Vec<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print sample configuration file
    Init,
    /// Show config file path
    Path,
}

/// Output structure for a ranking run.
#[derive(Serialize)]
struct RankOutput {
    status: &'static str,
    message: String,
    processed: usize,
    results: Vec<ResultItem>,
    skipped: Vec<SkippedItem>,
}

#[derive(Serialize)]
struct ResultItem {
    rank: usize,
    file: String,
    score: f32,
}

#[derive(Serialize)]
struct SkippedItem {
    file: String,
    reason: &'static str,
    error: String,
}

impl From<&ExtractionFailure> for SkippedItem {
    fn from(failure: &ExtractionFailure) -> Self {
        Self {
            file: failure.identifier.clone(),
            reason: failure.error.kind(),
            error: failure.error.to_string(),
        }
    }
}

impl RankOutput {
    fn new(outcome: &PipelineOutcome, limit: Option<usize>) -> Self {
        let results = outcome
            .ranking()
            .map(|ranking| {
                let shown = limit.map_or(ranking.results(), |n| ranking.top(n));
                shown
                    .iter()
                    .enumerate()
                    .map(|(i, r)| ResultItem {
                        rank: i + 1,
                        file: r.identifier.clone(),
                        score: r.score,
                    })
                    .collect()
            })
            .unwrap_or_default();

        let processed = match outcome {
            PipelineOutcome::Ranked { count, .. } => *count,
            _ => 0,
        };

        Self {
            status: outcome.status(),
            message: outcome.message(),
            processed,
            results,
            skipped: outcome.skipped().iter().map(SkippedItem::from).collect(),
        }
    }

    fn print_text(&self, precision: usize) {
        println!("{}", self.message);

        if !self.results.is_empty() {
            println!();
            let width = self
                .results
                .iter()
                .map(|r| r.file.len())
                .max()
                .unwrap_or(0)
                .min(48);
            for item in &self.results {
                println!(
                    "{:>3}. {:<width$}  {:.precision$}",
                    item.rank,
                    truncate(&item.file, 48),
                    item.score,
                );
            }
        }

        if !self.skipped.is_empty() {
            println!("\nSkipped:");
            for item in &self.skipped {
                println!("  {}: {}", item.file, item.error);
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config from file or CLI-specified path
    let config = if let Some(ref path) = cli.config {
        Config::load_from(Some(path.clone()))
            .context(format!("Failed to load config from {}", path.display()))?
    } else {
        Config::load().context("Failed to load config")?
    };

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        config.logging.level()
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to set tracing subscriber")?;

    match cli.command {
        Commands::Rank {
            job,
            job_file,
            limit,
            files,
        } => {
            let query = input::load_query(job, job_file.as_deref()).await?;
            let loaded = input::load_documents(&files, config.extraction.max_file_size).await;
            debug!("Loaded {} of {} files", loaded.documents.len(), files.len());

            let pipeline = MatchPipeline::with_config(config.pipeline_config());
            let outcome = rank_loaded(&pipeline, &query, loaded).await;

            let output = RankOutput::new(&outcome, limit.or(config.output.limit));
            match cli.format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&output)
                            .context("Failed to serialize results")?
                    );
                }
                OutputFormat::Text => output.print_text(config.output.precision),
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => match cli.format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&config)
                            .context("Failed to serialize config")?
                    );
                }
                OutputFormat::Text => {
                    println!(
                        "{}",
                        toml::to_string_pretty(&config).context("Failed to serialize config")?
                    );
                }
            },
            ConfigAction::Init => {
                println!("{}", Config::sample_toml());
            }
            ConfigAction::Path => {
                if let Some(path) = Config::config_path() {
                    println!("{}", path.display());
                } else {
                    println!("Could not determine config directory");
                }
            }
        },
    }

    Ok(())
}

/// Rank the files that were read, reporting the ones that could not be read
/// ahead of the documents the pipeline skipped.
async fn rank_loaded(
    pipeline: &MatchPipeline,
    query: &str,
    loaded: LoadedFiles,
) -> PipelineOutcome {
    let LoadedFiles {
        documents,
        mut failures,
    } = loaded;

    // Files were named but none could be read: not the same as naming none.
    if documents.is_empty() && !failures.is_empty() && !query.trim().is_empty() {
        return PipelineOutcome::NoReadableDocuments { skipped: failures };
    }

    match pipeline.run(query, documents).await {
        PipelineOutcome::MissingInput => PipelineOutcome::MissingInput,
        PipelineOutcome::NoReadableDocuments { skipped } => {
            failures.extend(skipped);
            PipelineOutcome::NoReadableDocuments { skipped: failures }
        }
        PipelineOutcome::Ranked {
            count,
            ranking,
            skipped,
        } => {
            failures.extend(skipped);
            PipelineOutcome::Ranked {
                count,
                ranking,
                skipped: failures,
            }
        }
    }
}

/// Truncate a string to max length, adding ellipsis if needed.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let mut end = max_len.saturating_sub(3);
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cvrank_core::{ExtractError, Ranking, RawDocument, ScoredResult};

    fn unreadable(identifier: &str) -> ExtractionFailure {
        ExtractionFailure {
            identifier: identifier.into(),
            error: ExtractError::Read("No such file or directory".into()),
        }
    }

    fn ranked() -> PipelineOutcome {
        PipelineOutcome::Ranked {
            count: 3,
            ranking: Ranking::from_scores(vec![
                ScoredResult {
                    identifier: "a.txt".into(),
                    score: 0.2,
                },
                ScoredResult {
                    identifier: "b.txt".into(),
                    score: 0.9,
                },
                ScoredResult {
                    identifier: "c.txt".into(),
                    score: 0.0,
                },
            ]),
            skipped: vec![ExtractionFailure {
                identifier: "x.rtf".into(),
                error: ExtractError::UnsupportedFormat("x.rtf".into()),
            }],
        }
    }

    #[test]
    fn test_rank_output_orders_and_limits() {
        let output = RankOutput::new(&ranked(), Some(2));
        assert_eq!(output.status, "ranked");
        assert_eq!(output.processed, 3);
        assert_eq!(output.results.len(), 2);
        assert_eq!(output.results[0].file, "b.txt");
        assert_eq!(output.results[0].rank, 1);
        assert_eq!(output.results[1].file, "a.txt");
        assert_eq!(output.skipped[0].reason, "unsupported_format");
    }

    #[test]
    fn test_rank_output_missing_input() {
        let output = RankOutput::new(&PipelineOutcome::MissingInput, None);
        assert_eq!(output.status, "missing_input");
        assert_eq!(output.processed, 0);
        assert!(output.results.is_empty());
        assert!(output.skipped.is_empty());
    }

    #[test]
    fn test_rank_output_json_shape() {
        let json = serde_json::to_value(RankOutput::new(&ranked(), None)).unwrap();
        assert_eq!(json["status"], "ranked");
        assert_eq!(json["message"], "Processed 3 resumes successfully!");
        assert_eq!(json["results"].as_array().unwrap().len(), 3);
        assert_eq!(json["skipped"][0]["file"], "x.rtf");
    }

    #[tokio::test]
    async fn test_rank_loaded_all_unreadable_is_not_missing_input() {
        let loaded = LoadedFiles {
            documents: vec![],
            failures: vec![unreadable("gone.pdf"), unreadable("lost.txt")],
        };

        let outcome = rank_loaded(&MatchPipeline::default(), "python developer", loaded).await;
        let output = RankOutput::new(&outcome, None);

        assert_eq!(output.status, "no_readable_documents");
        assert_eq!(output.message, "None of the uploaded files could be read.");
        let files: Vec<&str> = output.skipped.iter().map(|s| s.file.as_str()).collect();
        assert_eq!(files, vec!["gone.pdf", "lost.txt"]);
        assert!(output.skipped.iter().all(|s| s.reason == "read_error"));
    }

    #[tokio::test]
    async fn test_rank_loaded_lists_read_failures_with_skipped() {
        let loaded = LoadedFiles {
            documents: vec![
                RawDocument::new("dev.txt", "Python developer"),
                RawDocument::new("notes.rtf", "{\\rtf1}"),
            ],
            failures: vec![unreadable("gone.pdf")],
        };

        let outcome = rank_loaded(&MatchPipeline::default(), "python developer", loaded).await;
        let output = RankOutput::new(&outcome, None);

        assert_eq!(output.status, "ranked");
        assert_eq!(output.processed, 1);
        let skipped: Vec<(&str, &str)> = output
            .skipped
            .iter()
            .map(|s| (s.file.as_str(), s.reason))
            .collect();
        assert_eq!(
            skipped,
            vec![("gone.pdf", "read_error"), ("notes.rtf", "unsupported_format")]
        );
    }

    #[tokio::test]
    async fn test_rank_loaded_without_query_is_missing_input() {
        let loaded = LoadedFiles {
            documents: vec![],
            failures: vec![unreadable("gone.pdf")],
        };

        let outcome = rank_loaded(&MatchPipeline::default(), "  ", loaded).await;
        assert_eq!(outcome, PipelineOutcome::MissingInput);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short.txt", 48), "short.txt");
        assert_eq!(truncate("abcdefghij", 8), "abcde...");
    }
}
