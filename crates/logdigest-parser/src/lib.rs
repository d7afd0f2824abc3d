// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! logdigest-parser: Test runner log parsing for logdigest
//!
//! This library crate turns plain-text test runner output (pytest console
//! logs) into a normalized [`RunSummary`]: outcome tallies, overall duration,
//! per-test durations and, when scanning line by line, flaky test lines.
//!
//! Parsing is best-effort text scraping. Lines that don't match are skipped
//! and never produce an error.
//!
//! # Example
//!
//! ```
//! use logdigest_parser::{ParseStrategy, parse_log};
//!
//! let log = "=== 1 failed, 2 passed, 1 skipped in 2.33s ===";
//! let summary = parse_log(log, ParseStrategy::Summary);
//! assert_eq!(summary.total, 4);
//! assert_eq!(summary.duration, Some(2.33));
//! ```

pub mod error;
pub mod pytest;
pub mod scan;
pub mod strategy;
pub mod summary;

pub use error::ParserError;
pub use pytest::{SummaryLine, SummaryLineParser, parse_summary_line, parse_test_duration};
pub use scan::{LineScanParser, LineTally, classify_line, is_flaky_line};
pub use strategy::{LogParser, ParseStrategy, ResilientParser, parse_log};
pub use summary::RunSummary;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::strategy::{LogParser, ParseStrategy, parse_log};
    pub use crate::summary::RunSummary;
}
