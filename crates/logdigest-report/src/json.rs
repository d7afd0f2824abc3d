// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! JSON report rendering

use chrono::{DateTime, Utc};
use logdigest_parser::RunSummary;
use serde::Serialize;

use crate::error::ReportError;
use crate::options::ReportOptions;
use crate::slow::{SlowTestEntry, slow_tests};

/// The JSON document written for a run
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    /// Report title
    pub title: &'a str,
    /// Generation timestamp, if requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
    /// Slow test threshold in seconds
    pub slow_threshold: f64,
    /// Tests slower than the threshold, slowest first
    pub slow_tests: Vec<SlowTestEntry>,
    /// The parsed run
    pub summary: &'a RunSummary,
}

impl<'a> JsonReport<'a> {
    /// Build the JSON document for a summary
    #[must_use]
    pub fn new(summary: &'a RunSummary, options: &'a ReportOptions) -> Self {
        Self {
            title: &options.title,
            generated_at: options.generated_at,
            slow_threshold: options.slow_threshold,
            slow_tests: slow_tests(summary, options.slow_threshold),
            summary,
        }
    }
}

/// Render a summary as pretty-printed JSON
///
/// # Errors
///
/// Returns `ReportError::Json` if serialization fails.
pub fn render_json(summary: &RunSummary, options: &ReportOptions) -> Result<String, ReportError> {
    let report = JsonReport::new(summary, options);
    Ok(serde_json::to_string_pretty(&report)?)
}
