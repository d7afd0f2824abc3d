// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for logdigest-parser
//!
//! Log text itself never produces an error: parsing is best-effort and
//! unmatched lines are skipped. Errors only arise from caller-supplied
//! settings.

use thiserror::Error;

/// Errors that can occur when configuring a parser
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParserError {
    /// Unknown parse strategy name
    #[error("Unknown parse strategy '{name}' (expected one of: auto, summary, line-scan)")]
    UnknownStrategy {
        /// The name that was given
        name: String,
    },
}
