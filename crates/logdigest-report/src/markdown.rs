// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Markdown report rendering
//!
//! The report has a fixed section order:
//! 1. Header (title and optional generation timestamp)
//! 2. Summary counts and duration
//! 3. Slow tests (or an explicit "no slow tests" line)
//! 4. Per-test durations table, only when durations were captured
//! 5. Flaky tests, only when line scanning flagged any
//! 6. The raw log in a fenced block

use logdigest_parser::RunSummary;

use crate::options::ReportOptions;
use crate::slow::{slow_tests, sorted_durations};

/// Line shown when no test exceeds the slow threshold
pub const NO_SLOW_TESTS: &str = "No slow tests detected.";

/// Format seconds the way the report has always printed them
///
/// Whole numbers keep a trailing `.0` (`1.0`, not `1`).
#[must_use]
pub fn format_seconds(secs: f64) -> String {
    let text = secs.to_string();
    if secs.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Escape `|` so a test id stays in one table column
fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Render a summary as a Markdown document
#[must_use]
pub fn render_markdown(summary: &RunSummary, options: &ReportOptions) -> String {
    let mut md: Vec<String> = Vec::new();

    md.push(format!("# {}\n", options.title));
    if let Some(ts) = options.generated_at {
        md.push(format!("_Generated: {}_\n", ts.to_rfc3339()));
    }

    md.push("## Summary\n".to_string());
    md.push(format!("- **Total Tests:** {}", summary.total));
    md.push(format!("- ✅ Passed: {}", summary.passed));
    md.push(format!("- ❌ Failed: {}", summary.failed));
    md.push(format!("- ⚠️ Skipped: {}", summary.skipped));
    md.push(format!("- 🔥 Errors: {}", summary.errors));
    if let Some(duration) = summary.duration {
        md.push(format!("- ⏱️ Duration: {}s", format_seconds(duration)));
    }
    md.push("\n---\n".to_string());

    md.push(format!(
        "## Slow tests (>{}s)\n",
        format_seconds(options.slow_threshold)
    ));
    let slow = slow_tests(summary, options.slow_threshold);
    if slow.is_empty() {
        md.push(format!("{NO_SLOW_TESTS}\n"));
    } else {
        for entry in &slow {
            md.push(format!("- 🔻 {} — **{:.3}s**", entry.test_id, entry.duration));
        }
    }
    md.push("\n---\n".to_string());

    if !summary.per_test.is_empty() {
        md.push("## Per-test durations\n".to_string());
        md.push("| Test | Duration (s) |".to_string());
        md.push("|---:|---:|".to_string());
        for (id, secs) in sorted_durations(summary) {
            md.push(format!("| `{}` | {secs:.3} |", escape_table_cell(id)));
        }
        md.push("\n".to_string());
    }

    if let Some(flaky) = summary.flaky.as_deref().filter(|lines| !lines.is_empty()) {
        md.push("## Flaky tests\n".to_string());
        for line in flaky {
            md.push(format!("- {line}"));
        }
        md.push("\n".to_string());
    }

    md.push("## Raw Pytest Output\n".to_string());
    md.push(format!("```\n{}\n```", summary.raw_text));

    md.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use logdigest_parser::{LineScanParser, LogParser, SummaryLineParser};
    use similar_asserts::assert_eq;

    const EXAMPLE_LOG: &str = "\
=== 1 failed, 2 passed, 1 skipped in 2.33s ===
0.60s call t.py::slow
0.10s call t.py::fast";

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(0.5), "0.5");
        assert_eq!(format_seconds(2.33), "2.33");
        assert_eq!(format_seconds(1.0), "1.0");
        assert_eq!(format_seconds(0.0), "0.0");
    }

    #[test]
    fn test_render_full_report() {
        let summary = SummaryLineParser.parse(EXAMPLE_LOG);
        let report = render_markdown(&summary, &ReportOptions::with_threshold(0.5));

        let expected = "\
# 📊 CI Test Analysis Report

## Summary

- **Total Tests:** 4
- ✅ Passed: 2
- ❌ Failed: 1
- ⚠️ Skipped: 1
- 🔥 Errors: 0
- ⏱️ Duration: 2.33s

---

## Slow tests (>0.5s)

- 🔻 t.py::slow — **0.600s**

---

## Per-test durations

| Test | Duration (s) |
|---:|---:|
| `t.py::slow` | 0.600 |
| `t.py::fast` | 0.100 |


## Raw Pytest Output

```
=== 1 failed, 2 passed, 1 skipped in 2.33s ===
0.60s call t.py::slow
0.10s call t.py::fast
```";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_render_empty_summary() {
        let report = render_markdown(&RunSummary::empty(), &ReportOptions::default());

        assert!(report.contains("- **Total Tests:** 0"));
        assert!(!report.contains("Duration:"));
        assert!(report.contains("## Slow tests (>0.5s)\n\nNo slow tests detected.\n"));
        assert!(!report.contains("## Per-test durations"));
        assert!(!report.contains("## Flaky tests"));
        assert!(report.ends_with("## Raw Pytest Output\n\n```\n\n```"));
    }

    #[test]
    fn test_render_with_timestamp_and_title() {
        let ts = Utc.with_ymd_and_hms(2026, 10, 17, 8, 30, 0).unwrap();
        let options = ReportOptions::default().title("Nightly run").generated_at(ts);
        let report = render_markdown(&RunSummary::empty(), &options);

        assert!(report.starts_with("# Nightly run\n\n_Generated: 2026-10-17T08:30:00+00:00_\n\n## Summary"));
    }

    #[test]
    fn test_render_flaky_section_only_for_line_scan() {
        let log = "t.py ..s\nt.py::lab SKIPPED (flaky lab result service)\n";

        let scanned = LineScanParser.parse(log);
        let report = render_markdown(&scanned, &ReportOptions::default());
        assert!(report.contains(
            "## Flaky tests\n\n- t.py::lab SKIPPED (flaky lab result service)\n\n\n## Raw Pytest Output"
        ));

        let summarized = SummaryLineParser.parse(log);
        let report = render_markdown(&summarized, &ReportOptions::default());
        assert!(!report.contains("## Flaky tests"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let summary = SummaryLineParser.parse(EXAMPLE_LOG);
        let options = ReportOptions::with_threshold(0.05);
        assert_eq!(
            render_markdown(&summary, &options),
            render_markdown(&summary, &options)
        );
    }

    #[test]
    fn test_table_escapes_pipes_in_test_ids() {
        let summary = SummaryLineParser
            .parse("== 1 passed in 0.90s ==\n0.80s call t.py::test_x[a|b]");
        let report = render_markdown(&summary, &ReportOptions::with_threshold(0.5));

        assert!(report.contains("| `t.py::test_x[a\\|b]` | 0.800 |"));
        assert!(report.contains("- 🔻 t.py::test_x[a|b] — **0.800s**"));
        assert!(report.contains("0.80s call t.py::test_x[a|b]\n```"));
    }

    #[test]
    fn test_slow_section_threshold_is_strict() {
        let summary = SummaryLineParser.parse(EXAMPLE_LOG);
        let report = render_markdown(&summary, &ReportOptions::with_threshold(0.6));
        assert!(report.contains("## Slow tests (>0.6s)\n\nNo slow tests detected.\n"));
    }
}
