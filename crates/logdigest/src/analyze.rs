// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Analysis entry point
//!
//! [`analyze`] runs the whole pipeline for one invocation: collect the logs,
//! parse them into a [`RunSummary`], render the report and write it. It never
//! prints; the caller decides what to show.
//!
//! # Example
//!
//! ```no_run
//! use logdigest::analyze::{AnalyzeOptions, analyze};
//!
//! let options = AnalyzeOptions::new("downloads/ci-logs", "ci_analysis_report.md");
//! let outcome = analyze(&options).expect("analysis");
//! println!("{}", outcome.confirmation());
//! ```

use std::io::Write;
use std::path::{Path, PathBuf};

use logdigest_parser::{ParseStrategy, RunSummary, parse_log};
use logdigest_report::{ReportError, ReportFormat, ReportOptions, format_seconds, render};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::{debug, info};

use crate::source::{SourceError, collect_logs};

/// Analysis errors
///
/// Only I/O-level failures abort an analysis; parsing never fails.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    /// Reading logs failed
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Rendering the report failed
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Writing the report failed
    #[error("Failed to write report {path}: {source}")]
    Write {
        /// The report path
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },
}

/// Options for a single analysis run
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeOptions {
    /// Directory holding the logs (or a single log file)
    pub log_dir: PathBuf,
    /// Where the report is written
    pub output: PathBuf,
    /// Requested parse strategy
    pub strategy: ParseStrategy,
    /// Report format
    pub format: ReportFormat,
    /// Rendering options, including the slow test threshold
    pub report: ReportOptions,
}

impl AnalyzeOptions {
    /// Create options with default strategy, format and report settings
    #[must_use]
    pub fn new(log_dir: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            log_dir: log_dir.into(),
            output: output.into(),
            strategy: ParseStrategy::Auto,
            format: ReportFormat::Markdown,
            report: ReportOptions::default(),
        }
    }

    /// Set the slow test threshold
    #[must_use]
    pub fn with_threshold(mut self, seconds: f64) -> Self {
        self.report.slow_threshold = seconds;
        self
    }

    /// Set the parse strategy
    #[must_use]
    pub fn with_strategy(mut self, strategy: ParseStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the report format
    #[must_use]
    pub fn with_format(mut self, format: ReportFormat) -> Self {
        self.format = format;
        self
    }
}

/// Result of a completed analysis
#[derive(Debug, Clone)]
pub struct AnalyzeOutcome {
    /// Path the report was written to
    pub output: PathBuf,
    /// Slow test threshold used
    pub slow_threshold: f64,
    /// Strategy the logs were parsed with, after resolving `auto`
    pub strategy: ParseStrategy,
    /// Log files that were read
    pub sources: Vec<PathBuf>,
    /// Non-fatal problems, such as a missing log file
    pub diagnostics: Vec<String>,
    /// The parsed run
    pub summary: RunSummary,
}

impl AnalyzeOutcome {
    /// The line printed once the report has been written
    #[must_use]
    pub fn confirmation(&self) -> String {
        format!(
            "✅ Analysis complete: {} (slow threshold = {}s)",
            self.output.display(),
            format_seconds(self.slow_threshold)
        )
    }
}

/// Analyze the logs described by `options` and write the report
///
/// # Errors
///
/// Returns an error if a log exists but cannot be read, or the report cannot
/// be rendered or written. A missing log is not an error.
pub fn analyze(options: &AnalyzeOptions) -> Result<AnalyzeOutcome, AnalyzeError> {
    info!(dir = %options.log_dir.display(), "Analyzing test logs");

    let bundle = collect_logs(&options.log_dir)?;
    let strategy = options.strategy.resolve(bundle.len());
    debug!(requested = %options.strategy, resolved = %strategy, "Selected parse strategy");

    let summary = parse_log(&bundle.combined_text(), strategy);
    info!(
        total = summary.total,
        passed = summary.passed,
        failed = summary.failed,
        skipped = summary.skipped,
        errors = summary.errors,
        "Parsed run summary"
    );

    let report = render(&summary, &options.report, options.format)?;
    write_atomic(&options.output, &report)?;
    info!(path = %options.output.display(), "Wrote report");

    Ok(AnalyzeOutcome {
        output: options.output.clone(),
        slow_threshold: options.report.slow_threshold,
        strategy: summary.strategy,
        sources: bundle.paths(),
        diagnostics: bundle.diagnostics,
        summary,
    })
}

/// Write `contents` to `path` through a temporary file in the same directory
///
/// The destination is replaced in one rename, so it never holds a partial report.
///
/// # Errors
///
/// Returns `AnalyzeError::Write` if the temporary file cannot be created,
/// written, or renamed over `path`.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), AnalyzeError> {
    let write_err = |source| AnalyzeError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(contents.as_bytes()).map_err(write_err)?;
    tmp.flush().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
