// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Pytest console output parsing
//!
//! This module recognizes the textual shapes pytest prints:
//! - the final summary line, e.g. `==== 1 failed, 2 passed, 1 skipped in 2.33s ====`
//! - `--durations` lines, e.g. `0.60s call     tests/test_app.py::test_slow`
//! - the id-first duration shape, e.g. `tests/test_app.py::test_slow 0.60s`
//!
//! [`SummaryLineParser`] builds a [`RunSummary`] from the summary line and
//! the per-test duration lines.
//!
//! # Example
//!
//! ```
//! use logdigest_parser::{LogParser, SummaryLineParser};
//!
//! let log = "0.60s call t.py::slow\n=== 1 failed, 2 passed in 2.33s ===";
//! let summary = SummaryLineParser.parse(log);
//! assert_eq!(summary.total, 3);
//! assert_eq!(summary.per_test["t.py::slow"], 0.60);
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::strategy::{LogParser, ParseStrategy};
use crate::summary::RunSummary;

// ============================================================================
// Line Grammar
// ============================================================================

static SUMMARY_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*=*\s*(?P<counts>[\w ,]+?)\s+in\s+(?P<secs>\d+(?:\.\d+)?)s\b(?:\s*\([^)]*\))?\s*=*\s*$",
    )
    .expect("summary line pattern is valid")
});

static OUTCOME_COUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<n>\d+)\s+(?P<kw>passed|failed|skipped|errors?)\b")
        .expect("outcome count pattern is valid")
});

static DURATION_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<secs>\d+\.\d+)s\s+\w+\s+(?P<id>.+::.+?)\s*$")
        .expect("duration-first pattern is valid")
});

static ID_FIRST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?P<id>[^\s:]\S*::\S.*?)\s+(?P<secs>\d+\.\d+)s\s*$")
        .expect("id-first pattern is valid")
});

/// Outcome tallies and duration read from a summary line
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SummaryLine {
    /// Tests passed
    pub passed: usize,
    /// Tests failed
    pub failed: usize,
    /// Tests skipped
    pub skipped: usize,
    /// Tests errored
    pub errors: usize,
    /// Seconds reported after `in`
    pub duration: Option<f64>,
}

impl SummaryLine {
    /// Copy the tallies and duration into a summary and derive its total
    pub fn apply_to(&self, summary: &mut RunSummary) {
        summary.passed = self.passed;
        summary.failed = self.failed;
        summary.skipped = self.skipped;
        summary.errors = self.errors;
        summary.duration = self.duration;
        summary.sum_total();
    }

    /// Sum of the four tallies, or `None` if it overflows
    #[must_use]
    pub fn checked_total(&self) -> Option<usize> {
        self.passed
            .checked_add(self.failed)?
            .checked_add(self.skipped)?
            .checked_add(self.errors)
    }
}

/// Parse a single line as a pytest summary line
///
/// The counts clause must name at least one outcome (`passed`, `failed`,
/// `skipped`, `error`, `errors`) or read `no tests ran`; otherwise the line
/// is not a summary line. Keywords are searched independently and the last
/// occurrence of each wins.
#[must_use]
pub fn parse_summary_line(line: &str) -> Option<SummaryLine> {
    let caps = SUMMARY_LINE_RE.captures(line)?;
    let counts = caps.name("counts")?.as_str();

    let mut parsed = SummaryLine::default();
    let mut recognized = counts.contains("no tests ran");

    for m in OUTCOME_COUNT_RE.captures_iter(counts) {
        let Ok(n) = m["n"].parse::<usize>() else {
            debug!(fragment = &m["n"], "Skipping unparseable outcome count");
            continue;
        };
        recognized = true;
        match &m["kw"] {
            "passed" => parsed.passed = n,
            "failed" => parsed.failed = n,
            "skipped" => parsed.skipped = n,
            _ => parsed.errors = n,
        }
    }

    if !recognized {
        return None;
    }

    if parsed.checked_total().is_none() {
        debug!(counts, "Skipping outcome counts whose total overflows");
        parsed = SummaryLine::default();
    }

    parsed.duration = match caps["secs"].parse::<f64>() {
        Ok(secs) if secs.is_finite() => Some(secs),
        _ => {
            debug!(fragment = &caps["secs"], "Skipping unparseable run duration");
            None
        }
    };
    Some(parsed)
}

/// Find the first summary line in the text
#[must_use]
pub fn find_summary_line(text: &str) -> Option<SummaryLine> {
    text.lines().find_map(parse_summary_line)
}

/// Check whether a line has the summary line shape
#[must_use]
pub fn is_summary_line(line: &str) -> bool {
    parse_summary_line(line).is_some()
}

/// Parse a single line as a per-test duration entry
///
/// Accepts both `<secs>s <phase> <file>::<test>` and `<file>::<test> <secs>s`.
/// Durations without a decimal point are not recognized.
#[must_use]
pub fn parse_test_duration(line: &str) -> Option<(String, f64)> {
    let caps = DURATION_FIRST_RE
        .captures(line)
        .or_else(|| ID_FIRST_RE.captures(line))?;

    let secs = match caps["secs"].parse::<f64>() {
        Ok(secs) if secs.is_finite() => secs,
        _ => {
            debug!(fragment = &caps["secs"], "Skipping unparseable test duration");
            return None;
        }
    };

    Some((caps["id"].trim().to_string(), secs))
}

/// Collect every per-test duration line into the summary
///
/// Lines are visited in order, so a later line for the same identifier
/// overwrites an earlier one.
pub fn collect_test_durations(text: &str, summary: &mut RunSummary) {
    for line in text.lines() {
        if let Some((test_id, secs)) = parse_test_duration(line) {
            summary.record_duration(test_id, secs);
        }
    }
}

// ============================================================================
// Summary Line Parser
// ============================================================================

/// Parser driven by the final summary line of a single consolidated log
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryLineParser;

impl SummaryLineParser {
    /// Parse the text, returning `None` when no summary line is present
    ///
    /// This lets a caller fall back to another strategy.
    #[must_use]
    pub fn try_parse(&self, text: &str) -> Option<RunSummary> {
        let line = find_summary_line(text)?;
        Some(self.build(text, Some(line)))
    }

    fn build(&self, text: &str, line: Option<SummaryLine>) -> RunSummary {
        let mut summary = RunSummary::with_raw_text(text);
        summary.strategy = ParseStrategy::Summary;

        match line {
            Some(line) => line.apply_to(&mut summary),
            None => debug!("No summary line found"),
        }

        collect_test_durations(text, &mut summary);
        summary
    }
}

impl LogParser for SummaryLineParser {
    fn parse(&self, text: &str) -> RunSummary {
        self.build(text, find_summary_line(text))
    }

    fn strategy(&self) -> ParseStrategy {
        ParseStrategy::Summary
    }
}
