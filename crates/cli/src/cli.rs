// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::automaton::Alphabet;

/// Find every occurrence of many patterns in one pass
#[derive(Parser, Debug)]
#[command(name = "acscan")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "ACSCAN_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan files, directories, or stdin for dictionary patterns
    Scan(ScanArgs),
    /// Build the dictionary and describe the automaton
    Stats(StatsArgs),
}

/// Where patterns come from. Combined with `[dictionary]` in the config.
#[derive(clap::Args, Debug, Default, Clone)]
pub struct DictionaryArgs {
    /// Pattern to search for (repeatable)
    #[arg(short = 'e', long = "pattern", value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Read patterns from FILE, one per line
    #[arg(short = 'f', long = "patterns-file", value_name = "FILE")]
    pub patterns_file: Option<PathBuf>,

    /// Symbol alphabet for patterns and text
    #[arg(long, value_enum)]
    pub alphabet: Option<Alphabet>,
}

#[derive(clap::Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Files or directories to scan (stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Print match counts per pattern instead of each occurrence
    #[arg(long)]
    pub count: bool,

    /// Force color output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Skip files larger than BYTES (default: 10MB)
    #[arg(long, value_name = "BYTES")]
    pub max_file_size: Option<u64>,

    /// Maximum directory depth to traverse
    #[arg(long, value_name = "N")]
    pub max_depth: Option<usize>,

    /// Include hidden files and directories
    #[arg(long)]
    pub hidden: bool,

    /// Do not respect .gitignore and .ignore files
    #[arg(long)]
    pub no_ignore: bool,
}

#[derive(clap::Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub dictionary: DictionaryArgs,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
