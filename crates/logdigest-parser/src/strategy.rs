// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Parse strategy selection
//!
//! Different log shapes call for different extraction strategies:
//! - [`ParseStrategy::Summary`]: a single consolidated log ending in a summary line
//! - [`ParseStrategy::LineScan`]: many logs (or logs without a summary line),
//!   classified line by line
//! - [`ParseStrategy::Auto`]: picks one of the above for the caller

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ParserError;
use crate::pytest::SummaryLineParser;
use crate::scan::LineScanParser;
use crate::summary::RunSummary;

/// A log text extraction strategy
pub trait LogParser {
    /// Extract a summary from raw log text
    ///
    /// Parsing is best-effort and never fails: lines that don't match are
    /// skipped and unmatched fields keep their zero values.
    fn parse(&self, text: &str) -> RunSummary;

    /// The strategy this parser implements
    fn strategy(&self) -> ParseStrategy;
}

/// Which extraction strategy to use
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseStrategy {
    /// Try the summary line first, fall back to line scanning
    #[default]
    Auto,
    /// Read counts and duration from the final summary line
    Summary,
    /// Classify each line as a pass/fail/error/skip contribution
    LineScan,
}

impl ParseStrategy {
    /// All strategy names accepted by [`FromStr`]
    pub const NAMES: [&'static str; 3] = ["auto", "summary", "line-scan"];

    /// Resolve `Auto` based on how many log sources are being combined
    ///
    /// A single log keeps the resilient behaviour; several concatenated logs
    /// carry several summary lines, so they are scanned line by line.
    #[must_use]
    pub fn resolve(self, source_count: usize) -> Self {
        match self {
            Self::Auto if source_count > 1 => Self::LineScan,
            other => other,
        }
    }

    /// Build the parser for this strategy
    #[must_use]
    pub fn parser(self) -> Box<dyn LogParser> {
        match self {
            Self::Auto => Box::new(ResilientParser),
            Self::Summary => Box::new(SummaryLineParser),
            Self::LineScan => Box::new(LineScanParser),
        }
    }

    /// The strategy name as used on the command line
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Auto => "auto",
            Self::Summary => "summary",
            Self::LineScan => "line-scan",
        }
    }
}

impl fmt::Display for ParseStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParseStrategy {
    type Err = ParserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "summary" => Ok(Self::Summary),
            "line-scan" | "linescan" | "scan" => Ok(Self::LineScan),
            _ => Err(ParserError::UnknownStrategy {
                name: s.to_string(),
            }),
        }
    }
}

/// Parse with the summary line when there is one, otherwise scan lines
#[derive(Debug, Clone, Copy, Default)]
pub struct ResilientParser;

impl LogParser for ResilientParser {
    fn parse(&self, text: &str) -> RunSummary {
        SummaryLineParser.try_parse(text).unwrap_or_else(|| {
            debug!("No summary line, falling back to line scanning");
            LineScanParser.parse(text)
        })
    }

    fn strategy(&self) -> ParseStrategy {
        ParseStrategy::Auto
    }
}

/// Parse log text with the given strategy
#[must_use]
pub fn parse_log(text: &str, strategy: ParseStrategy) -> RunSummary {
    strategy.parser().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("auto".parse::<ParseStrategy>(), Ok(ParseStrategy::Auto));
        assert_eq!("Summary".parse::<ParseStrategy>(), Ok(ParseStrategy::Summary));
        assert_eq!(
            "line-scan".parse::<ParseStrategy>(),
            Ok(ParseStrategy::LineScan)
        );
        assert_eq!(
            "bogus".parse::<ParseStrategy>(),
            Err(ParserError::UnknownStrategy {
                name: "bogus".to_string()
            })
        );
    }

    #[test]
    fn test_strategy_display_round_trips_names() {
        for name in ParseStrategy::NAMES {
            let strategy: ParseStrategy = name.parse().expect("Should parse");
            assert_eq!(strategy.to_string(), name);
        }
    }

    #[test]
    fn test_resolve_auto() {
        assert_eq!(ParseStrategy::Auto.resolve(0), ParseStrategy::Auto);
        assert_eq!(ParseStrategy::Auto.resolve(1), ParseStrategy::Auto);
        assert_eq!(ParseStrategy::Auto.resolve(3), ParseStrategy::LineScan);
        assert_eq!(ParseStrategy::Summary.resolve(3), ParseStrategy::Summary);
    }

    #[test]
    fn test_resilient_prefers_summary_line() {
        let log = "t.py .F\n== 1 failed, 1 passed in 0.20s ==\n";
        let summary = ResilientParser.parse(log);
        assert_eq!(summary.strategy, ParseStrategy::Summary);
        assert_eq!(summary.total, 2);
        assert_eq!(summary.flaky, None);
    }

    #[test]
    fn test_resilient_falls_back_to_line_scan() {
        let log = "t.py ..F\nt.py::test_skip SKIPPED (flaky lab result service)\n";
        let summary = ResilientParser.parse(log);
        assert_eq!(summary.strategy, ParseStrategy::LineScan);
        assert_eq!(summary.passed, 2);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.flaky.map(|f| f.len()), Some(1));
    }

    #[test]
    fn test_parser_reports_strategy() {
        for strategy in [
            ParseStrategy::Auto,
            ParseStrategy::Summary,
            ParseStrategy::LineScan,
        ] {
            assert_eq!(strategy.parser().strategy(), strategy);
        }
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&ParseStrategy::LineScan).expect("Should serialize");
        assert_eq!(json, "\"line-scan\"");
    }
}
