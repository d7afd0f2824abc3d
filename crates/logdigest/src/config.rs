// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the logdigest command line
//!
//! This module provides the command-line configuration and its conversion
//! into the [`AnalyzeOptions`] value the analysis entry point consumes.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::Parser;
use logdigest_parser::ParseStrategy;
use logdigest_report::{DEFAULT_SLOW_THRESHOLD, ReportFormat, ReportOptions};

use crate::analyze::AnalyzeOptions;

/// Summarize pytest console logs into a CI test analysis report
#[derive(Parser, Debug, Clone)]
#[command(name = "logdigest")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory containing pytest.log (or a set of *.log files)
    pub log_dir: PathBuf,

    /// Seconds; tests slower than this are reported as slow
    #[arg(long, default_value_t = DEFAULT_SLOW_THRESHOLD)]
    pub slow_threshold: f64,

    /// Report output path
    ///
    /// Defaults to ci_analysis_report.md (or .json with --format json) in
    /// the current directory. Overwritten if it exists.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Parse strategy: auto, summary, or line-scan
    ///
    /// `auto` reads the summary line of a single log and falls back to line
    /// scanning; several logs are always scanned line by line.
    #[arg(long, default_value_t = ParseStrategy::Auto)]
    pub strategy: ParseStrategy,

    /// Report format: markdown or json
    #[arg(long, default_value_t = ReportFormat::Markdown)]
    pub format: ReportFormat,

    /// Report title
    #[arg(long)]
    pub title: Option<String>,

    /// Omit the generation timestamp from the report header
    #[arg(long, default_value = "false")]
    pub no_timestamp: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("."),
            slow_threshold: DEFAULT_SLOW_THRESHOLD,
            output: None,
            strategy: ParseStrategy::Auto,
            format: ReportFormat::Markdown,
            title: None,
            no_timestamp: false,
            verbose: false,
            quiet: false,
        }
    }
}

impl Config {
    /// Get the output path, using the format's default file name if not specified
    #[must_use]
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(self.format.default_file_name()))
    }

    /// Validate the configuration
    ///
    /// A missing log directory is not an error: it produces an empty report.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The slow threshold is negative or not a finite number
    /// - The output path's parent directory doesn't exist
    /// - The output path is an existing directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.slow_threshold.is_finite() || self.slow_threshold < 0.0 {
            return Err(ConfigError::InvalidThreshold(self.slow_threshold));
        }

        let output = self.output_path();
        if output.is_dir() {
            return Err(ConfigError::OutputIsDirectory(output));
        }
        if let Some(parent) = output.parent()
            && !parent.as_os_str().is_empty()
            && !parent.is_dir()
        {
            return Err(ConfigError::OutputDirectoryNotFound(parent.to_path_buf()));
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }

    /// Build report options, stamping `now` unless timestamps are disabled
    #[must_use]
    pub fn report_options(&self, now: DateTime<Utc>) -> ReportOptions {
        let mut options = ReportOptions::with_threshold(self.slow_threshold);
        if let Some(ref title) = self.title {
            options = options.title(title);
        }
        if !self.no_timestamp {
            options = options.generated_at(now);
        }
        options
    }

    /// Convert into the options for a single analysis run
    #[must_use]
    pub fn analyze_options(&self, now: DateTime<Utc>) -> AnalyzeOptions {
        AnalyzeOptions {
            log_dir: self.log_dir.clone(),
            output: self.output_path(),
            strategy: self.strategy,
            format: self.format,
            report: self.report_options(now),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Slow threshold is negative, infinite or NaN
    #[error("Slow threshold must be a non-negative number of seconds, got {0}")]
    InvalidThreshold(f64),

    /// Output path points at a directory
    #[error("Output path is a directory: {0}")]
    OutputIsDirectory(PathBuf),

    /// Output path's parent directory doesn't exist
    #[error("Output directory not found: {0}")]
    OutputDirectoryNotFound(PathBuf),
}
