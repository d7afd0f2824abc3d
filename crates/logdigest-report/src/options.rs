// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Report rendering options

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// Default slow test threshold in seconds
pub const DEFAULT_SLOW_THRESHOLD: f64 = 0.5;

/// Default report title
pub const DEFAULT_TITLE: &str = "📊 CI Test Analysis Report";

/// Options controlling how a report is rendered
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Tests strictly slower than this many seconds are listed as slow
    pub slow_threshold: f64,
    /// Report title
    pub title: String,
    /// Generation timestamp shown in the header, if any
    pub generated_at: Option<DateTime<Utc>>,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            slow_threshold: DEFAULT_SLOW_THRESHOLD,
            title: DEFAULT_TITLE.to_string(),
            generated_at: None,
        }
    }
}

impl ReportOptions {
    /// Create options with the given slow test threshold
    #[must_use]
    pub fn with_threshold(slow_threshold: f64) -> Self {
        Self {
            slow_threshold,
            ..Default::default()
        }
    }

    /// Set the report title
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    /// Stamp the header with a generation time
    #[must_use]
    pub fn generated_at(mut self, timestamp: DateTime<Utc>) -> Self {
        self.generated_at = Some(timestamp);
        self
    }
}

/// Output document format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Markdown document for humans
    #[default]
    Markdown,
    /// Pretty-printed JSON for tooling
    Json,
}

impl ReportFormat {
    /// Output file name used when the caller doesn't choose one
    #[must_use]
    pub fn default_file_name(self) -> &'static str {
        match self {
            Self::Markdown => "ci_analysis_report.md",
            Self::Json => "ci_analysis_report.json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Markdown => f.write_str("markdown"),
            Self::Json => f.write_str("json"),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(ReportError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }
}
