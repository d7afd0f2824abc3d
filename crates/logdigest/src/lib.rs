// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! logdigest library
//!
//! This module exports the command-line configuration, log discovery and the
//! analysis entry point for use in integration tests and as a library.

pub mod analyze;
pub mod config;
pub mod source;

pub use analyze::{AnalyzeError, AnalyzeOptions, AnalyzeOutcome, analyze};
pub use config::{Config, ConfigError};
