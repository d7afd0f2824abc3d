// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! logdigest: CI test log analysis
//!
//! This binary reads pytest console logs from a directory, extracts pass/fail
//! counts, durations, slow and flaky tests, and writes a summary report.

use anyhow::Context;
use chrono::Utc;
use clap::Parser;
use tracing::debug;

use logdigest::{Config, analyze};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout only carries the confirmation line
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .init();

    debug!(?config, "Parsed configuration");
    config.validate()?;

    let options = config.analyze_options(Utc::now());
    let outcome = analyze(&options)
        .with_context(|| format!("Failed to analyze logs in {}", options.log_dir.display()))?;

    println!("{}", outcome.confirmation());
    Ok(())
}
