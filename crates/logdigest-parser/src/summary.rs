// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Normalized run summary types

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::strategy::ParseStrategy;

/// Normalized results extracted from one run's log text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Count of recorded test outcomes (always the sum of the four tallies)
    pub total: usize,
    /// Tests passed
    pub passed: usize,
    /// Tests failed
    pub failed: usize,
    /// Tests skipped
    pub skipped: usize,
    /// Tests that errored during setup/teardown or collection
    pub errors: usize,
    /// Wall-clock seconds for the run, if a duration line was found
    pub duration: Option<f64>,
    /// Per-test durations in seconds, in first-seen order
    pub per_test: IndexMap<String, f64>,
    /// Lines flagged as skipped or intermittent (line scanning only)
    pub flaky: Option<Vec<String>>,
    /// Which strategy produced this summary
    pub strategy: ParseStrategy,
    /// The original log content
    pub raw_text: String,
}

impl RunSummary {
    /// Create an empty summary
    #[must_use]
    pub fn empty() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            skipped: 0,
            errors: 0,
            duration: None,
            per_test: IndexMap::new(),
            flaky: None,
            strategy: ParseStrategy::Summary,
            raw_text: String::new(),
        }
    }

    /// Create an empty summary that keeps the given raw text
    #[must_use]
    pub fn with_raw_text(raw_text: impl Into<String>) -> Self {
        Self {
            raw_text: raw_text.into(),
            ..Self::empty()
        }
    }

    /// Check whether nothing at all was extracted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total == 0 && self.duration.is_none() && self.per_test.is_empty()
    }

    /// Check if no test failed or errored
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errors == 0
    }

    /// Record a per-test duration.
    ///
    /// A repeated identifier keeps its original position but takes the new value.
    pub fn record_duration(&mut self, test_id: impl Into<String>, seconds: f64) {
        self.per_test.insert(test_id.into(), seconds);
    }

    /// Recompute `total` from the outcome tallies
    pub(crate) fn sum_total(&mut self) {
        self.total = self.passed + self.failed + self.skipped + self.errors;
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::empty()
    }
}
