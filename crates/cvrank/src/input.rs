//! Loading command-line inputs into raw documents.

use anyhow::{Context, Result};
use cvrank_core::{extension_of, ExtractError, ExtractionFailure, RawDocument};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use unicode_normalization::UnicodeNormalization;

/// Files read from disk, plus the ones that could not be read.
#[derive(Debug, Default)]
pub struct LoadedFiles {
    /// Readable files, in command-line order
    pub documents: Vec<RawDocument>,
    /// Missing, unreadable, oversized or unnamed files, in command-line order
    pub failures: Vec<ExtractionFailure>,
}

/// Reduce a user-supplied file name to a safe ASCII identifier.
///
/// The name is NFKD-decomposed so accented letters keep their base letter,
/// remaining non-ASCII characters are dropped, separators and whitespace
/// become `_`, anything outside `[A-Za-z0-9_.-]` is removed, and leading or
/// trailing `.`/`_` are stripped. The result may be empty.
pub fn sanitize_file_name(name: &str) -> String {
    let ascii: String = name
        .nfkd()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = ascii.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();

    kept.trim_matches(|c| c == '.' || c == '_').to_string()
}

/// Make an identifier unique within a batch by inserting `-N` before the suffix.
pub fn unique_identifier(name: String, seen: &mut HashMap<String, usize>) -> String {
    let count = seen.entry(name.clone()).or_insert(0);
    *count += 1;
    if *count == 1 {
        return name;
    }

    let candidate = match extension_of(&name) {
        Some(ext) => {
            let stem = &name[..name.len() - ext.len() - 1];
            format!("{stem}-{count}.{ext}")
        }
        None => format!("{name}-{count}"),
    };
    unique_identifier(candidate, seen)
}

/// Read the job description from inline text or a UTF-8 file.
pub async fn load_query(job: Option<String>, job_file: Option<&Path>) -> Result<String> {
    match (job, job_file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read job description {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}

/// Read every file into memory.
///
/// Files that cannot be loaded are not errors: each one is logged and
/// reported in [`LoadedFiles::failures`] with a `read_error` cause.
pub async fn load_documents(paths: &[PathBuf], max_file_size: u64) -> LoadedFiles {
    let mut seen = HashMap::new();
    let mut loaded = LoadedFiles::default();

    for path in paths {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let identifier = sanitize_file_name(&name);
        if identifier.is_empty() {
            let shown = path.display().to_string();
            skip(&mut loaded, shown.clone(), format!("no usable file name in {shown}"));
            continue;
        }

        match tokio::fs::metadata(path).await {
            Ok(meta) if meta.len() > max_file_size => {
                let reason = format!("{} bytes exceeds limit of {}", meta.len(), max_file_size);
                skip(&mut loaded, identifier, reason);
                continue;
            }
            Ok(meta) if !meta.is_file() => {
                skip(&mut loaded, identifier, "not a file".to_string());
                continue;
            }
            Ok(_) => {}
            Err(e) => {
                skip(&mut loaded, identifier, e.to_string());
                continue;
            }
        }

        match tokio::fs::read(path).await {
            Ok(bytes) => {
                let identifier = unique_identifier(identifier, &mut seen);
                debug!("Loaded {:?} as {} ({} bytes)", path, identifier, bytes.len());
                loaded.documents.push(RawDocument::new(identifier, bytes));
            }
            Err(e) => skip(&mut loaded, identifier, e.to_string()),
        }
    }

    loaded
}

fn skip(loaded: &mut LoadedFiles, identifier: String, reason: String) {
    warn!("Skipping {}: {}", identifier, reason);
    loaded.failures.push(ExtractionFailure {
        identifier,
        error: ExtractError::Read(reason),
    });
}
