// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for logdigest-report

use thiserror::Error;

/// Errors that can occur while rendering a report
#[derive(Debug, Error)]
pub enum ReportError {
    /// Error serializing the summary as JSON
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unknown report format name
    #[error("Unknown report format '{name}' (expected one of: markdown, json)")]
    UnknownFormat {
        /// The name that was given
        name: String,
    },
}
