// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Log source discovery and loading
//!
//! A log directory is resolved to one or more log files:
//! - `<dir>/pytest.log` when present, as the single consolidated log
//! - otherwise every `*.log` file directly inside `<dir>`, in file name order
//!
//! A missing directory or a directory without logs is not an error. It is
//! recorded as a diagnostic and yields no sources, so the caller still
//! produces a (mostly empty) report. Any other I/O failure is returned.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, warn};

/// Conventional name of a consolidated pytest log
pub const DEFAULT_LOG_NAME: &str = "pytest.log";

/// Extension of log files collected from a directory
pub const LOG_EXTENSION: &str = "log";

/// Log source errors
#[derive(Debug, Error)]
pub enum SourceError {
    /// Failed to list the log directory
    #[error("Failed to read log directory {path}: {source}")]
    ReadDir {
        /// The directory being listed
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },

    /// Failed to read a log file
    #[error("Failed to read log file {path}: {source}")]
    ReadFile {
        /// The file being read
        path: PathBuf,
        /// The underlying I/O error
        source: io::Error,
    },
}

/// One log file's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSource {
    /// Where the log was read from
    pub path: PathBuf,
    /// The log text, with invalid UTF-8 replaced
    pub content: String,
}

/// The logs collected from a directory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogBundle {
    /// Log files in read order
    pub sources: Vec<LogSource>,
    /// Non-fatal problems, such as a missing log file
    pub diagnostics: Vec<String>,
}

impl LogBundle {
    /// Number of log files collected
    #[must_use]
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    /// Check if no log file was collected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Paths of the collected logs
    #[must_use]
    pub fn paths(&self) -> Vec<PathBuf> {
        self.sources.iter().map(|s| s.path.clone()).collect()
    }

    /// All log text joined by newlines
    #[must_use]
    pub fn combined_text(&self) -> String {
        self.sources
            .iter()
            .map(|s| s.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn missing(&mut self, message: String) {
        warn!("{message}");
        self.diagnostics.push(message);
    }
}

/// Find the log files to analyze in a directory
///
/// # Errors
///
/// Returns `SourceError::ReadDir` if the directory exists but cannot be listed.
pub fn discover_logs(dir: &Path) -> Result<Vec<PathBuf>, SourceError> {
    let consolidated = dir.join(DEFAULT_LOG_NAME);
    if consolidated.is_file() {
        return Ok(vec![consolidated]);
    }

    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(SourceError::ReadDir {
                path: dir.to_path_buf(),
                source,
            });
        }
    };

    let mut logs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| SourceError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == LOG_EXTENSION) {
            logs.push(path);
        }
    }

    logs.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(logs)
}

/// Read a single log file, replacing invalid UTF-8
///
/// # Errors
///
/// Returns `SourceError::ReadFile` if the file cannot be read.
pub fn read_log(path: &Path) -> Result<LogSource, SourceError> {
    let bytes = fs::read(path).map_err(|source| SourceError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "Read log file");

    Ok(LogSource {
        path: path.to_path_buf(),
        content: String::from_utf8_lossy(&bytes).into_owned(),
    })
}

/// Collect every log in a directory (or a single log file path)
///
/// # Errors
///
/// Returns an error for I/O failures other than the log being absent.
pub fn collect_logs(path: &Path) -> Result<LogBundle, SourceError> {
    let mut bundle = LogBundle::default();

    if path.is_file() {
        bundle.sources.push(read_log(path)?);
        return Ok(bundle);
    }

    if !path.exists() {
        bundle.missing(format!("Log directory not found: {}", path.display()));
        return Ok(bundle);
    }

    let logs = discover_logs(path)?;
    if logs.is_empty() {
        bundle.missing(format!(
            "{DEFAULT_LOG_NAME} not found in {}",
            path.display()
        ));
        return Ok(bundle);
    }

    for log in &logs {
        bundle.sources.push(read_log(log)?);
    }
    info!(dir = %path.display(), files = bundle.len(), "Collected log files");

    Ok(bundle)
}
