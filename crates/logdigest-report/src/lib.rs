// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! logdigest-report: Report rendering for logdigest run summaries
//!
//! This library crate turns a [`RunSummary`] into a document a CI maintainer
//! can skim: outcome counts, overall duration, slow tests, a per-test
//! duration table, flaky test lines and the raw log for traceability.
//!
//! ## Formats
//!
//! - [`ReportFormat::Markdown`]: the human-readable report
//! - [`ReportFormat::Json`]: the same data for tooling
//!
//! ```rust
//! use logdigest_parser::{ParseStrategy, parse_log};
//! use logdigest_report::{ReportOptions, render_markdown};
//!
//! let summary = parse_log("== 2 passed in 0.70s ==\n0.65s call t.py::slow", ParseStrategy::Auto);
//! let report = render_markdown(&summary, &ReportOptions::with_threshold(0.5));
//! assert!(report.contains("- 🔻 t.py::slow — **0.650s**"));
//! ```

#![warn(missing_docs)]

use logdigest_parser::RunSummary;
use tracing::debug;

pub mod error;
pub mod json;
pub mod markdown;
pub mod options;
pub mod slow;

pub use error::ReportError;
pub use json::{JsonReport, render_json};
pub use markdown::{NO_SLOW_TESTS, format_seconds, render_markdown};
pub use options::{DEFAULT_SLOW_THRESHOLD, DEFAULT_TITLE, ReportFormat, ReportOptions};
pub use slow::{SlowTestEntry, slow_tests, sorted_durations};

/// Render a summary in the requested format
///
/// # Errors
///
/// Returns `ReportError::Json` if JSON serialization fails.
pub fn render(
    summary: &RunSummary,
    options: &ReportOptions,
    format: ReportFormat,
) -> Result<String, ReportError> {
    debug!(%format, threshold = options.slow_threshold, "Rendering report");
    match format {
        ReportFormat::Markdown => Ok(render_markdown(summary, options)),
        ReportFormat::Json => render_json(summary, options),
    }
}

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ReportError;
    pub use crate::options::{ReportFormat, ReportOptions};
    pub use crate::{render, render_markdown};
}
