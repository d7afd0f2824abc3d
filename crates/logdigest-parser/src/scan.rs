// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Line-by-line log scanning
//!
//! When several logs are combined, or a log was cut off before pytest printed
//! its summary line, outcomes are tallied from the individual result lines
//! instead. Only two line shapes contribute to the tallies:
//!
//! - progress lines: `tests/test_app.py ..F.s [ 80%]`, where each mark in the
//!   marks column counts once (`.` passed, `F` failed, `E` error, `s` skipped)
//! - verbose result lines: `tests/test_app.py::test_add PASSED [ 20%]`
//!
//! Characters in file paths or identifiers never count, and the "short test
//! summary info" block (`FAILED t.py::x - ...`) is ignored so failures are
//! not counted twice.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::pytest::{parse_summary_line, parse_test_duration};
use crate::strategy::{LogParser, ParseStrategy};
use crate::summary::RunSummary;

static PROGRESS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*(?:\S+\.\w+\s+(?P<marks>[.FEsxX]+)\s*(?:\[\s*\d+%\])?|(?P<cont>[.FEsxX]+)\s*\[\s*\d+%\])\s*$",
    )
    .expect("progress line pattern is valid")
});

static VERBOSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\S+::.+?\s+(?P<status>PASSED|FAILED|ERROR|SKIPPED|XFAIL|XPASS)(?:\s|$)")
        .expect("verbose result pattern is valid")
});

static FLAKY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:skipped|flaky|rerun)\b").expect("flaky pattern is valid")
});

/// Outcome counts contributed by a single line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineTally {
    /// Tests passed
    pub passed: usize,
    /// Tests failed
    pub failed: usize,
    /// Tests skipped
    pub skipped: usize,
    /// Tests errored
    pub errors: usize,
}

impl LineTally {
    fn add_to(self, summary: &mut RunSummary) {
        summary.passed += self.passed;
        summary.failed += self.failed;
        summary.skipped += self.skipped;
        summary.errors += self.errors;
    }
}

/// Classify a line as a pass/fail/error/skip contribution
///
/// Returns `None` for lines that are neither progress lines nor verbose
/// result lines.
#[must_use]
pub fn classify_line(line: &str) -> Option<LineTally> {
    if let Some(caps) = PROGRESS_RE.captures(line) {
        let marks = caps.name("marks").or_else(|| caps.name("cont"))?;
        let mut tally = LineTally::default();
        for mark in marks.as_str().chars() {
            match mark {
                '.' => tally.passed += 1,
                'F' => tally.failed += 1,
                'E' => tally.errors += 1,
                's' => tally.skipped += 1,
                _ => {}
            }
        }
        return Some(tally);
    }

    let caps = VERBOSE_RE.captures(line)?;
    let mut tally = LineTally::default();
    match &caps["status"] {
        "PASSED" => tally.passed = 1,
        "FAILED" => tally.failed = 1,
        "ERROR" => tally.errors = 1,
        "SKIPPED" => tally.skipped = 1,
        _ => {}
    }
    Some(tally)
}

/// Check whether a line mentions a skipped, flaky or rerun test
#[must_use]
pub fn is_flaky_line(line: &str) -> bool {
    FLAKY_RE.is_match(line) && parse_summary_line(line).is_none()
}

/// Parser that tallies outcomes line by line
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScanParser;

impl LogParser for LineScanParser {
    fn parse(&self, text: &str) -> RunSummary {
        let mut summary = RunSummary::with_raw_text(text);
        summary.strategy = ParseStrategy::LineScan;
        let mut flaky = Vec::new();

        for line in text.lines() {
            if let Some(summary_line) = parse_summary_line(line) {
                // Counts on summary lines are ignored here; only the duration is used
                if summary.duration.is_none() {
                    summary.duration = summary_line.duration;
                }
                continue;
            }

            if let Some(tally) = classify_line(line) {
                tally.add_to(&mut summary);
            }

            if is_flaky_line(line) {
                flaky.push(line.trim_end().to_string());
            }

            if let Some((test_id, secs)) = parse_test_duration(line) {
                summary.record_duration(test_id, secs);
            }
        }

        summary.sum_total();
        debug!(
            total = summary.total,
            flaky = flaky.len(),
            "Line scan complete"
        );
        summary.flaky = Some(flaky);
        summary
    }

    fn strategy(&self) -> ParseStrategy {
        ParseStrategy::LineScan
    }
}
