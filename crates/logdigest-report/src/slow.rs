// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Slow test selection and duration ordering

use logdigest_parser::RunSummary;
use serde::{Deserialize, Serialize};

/// A test whose duration exceeded the slow threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlowTestEntry {
    /// Test identifier, e.g. `tests/test_app.py::test_slow`
    pub test_id: String,
    /// Duration in seconds
    pub duration: f64,
}

/// All per-test durations, slowest first
///
/// Ties keep the order in which the tests were first seen in the log.
#[must_use]
pub fn sorted_durations(summary: &RunSummary) -> Vec<(&str, f64)> {
    let mut entries: Vec<(&str, f64)> = summary
        .per_test
        .iter()
        .map(|(id, secs)| (id.as_str(), *secs))
        .collect();
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));
    entries
}

/// Tests strictly slower than `threshold` seconds, slowest first
#[must_use]
pub fn slow_tests(summary: &RunSummary, threshold: f64) -> Vec<SlowTestEntry> {
    sorted_durations(summary)
        .into_iter()
        .filter(|(_, secs)| *secs > threshold)
        .map(|(id, secs)| SlowTestEntry {
            test_id: id.to_string(),
            duration: secs,
        })
        .collect()
}
