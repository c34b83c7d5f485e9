// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Stats command implementation.

use std::io::Write;

use acscan::cli::{Cli, OutputFormat, StatsArgs};
use acscan::dictionary::{Dictionary, load_config};
use acscan::error::ExitCode;
use acscan::output::json::JsonFormatter;

/// Run the stats command.
pub fn run(cli: &Cli, args: &StatsArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let loaded = load_config(cli.config.as_deref(), &cwd)?;
    let stats = Dictionary::resolve(loaded.as_ref(), &args.dictionary)?
        .build()?
        .stats();

    match args.output {
        OutputFormat::Text => {
            let mut out = std::io::stdout().lock();
            writeln!(out, "alphabet: {}", stats.alphabet)?;
            writeln!(out, "patterns: {}", stats.patterns)?;
            writeln!(out, "nodes: {}", stats.nodes)?;
            writeln!(out, "terminal nodes: {}", stats.terminal_nodes)?;
            writeln!(out, "max depth: {}", stats.max_depth)?;
            writeln!(out, "failure links: {}", stats.nontrivial_failure_links)?;
            writeln!(out, "output links: {}", stats.output_links)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write_value(&stats)?;
        }
    }
    Ok(ExitCode::Success)
}
