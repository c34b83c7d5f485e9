// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! acscan CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use acscan::cli::{Cli, Command};
use acscan::env::names;
use acscan::error::ExitCode;

mod cmd_scan;
mod cmd_stats;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::ACSCAN_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("acscan: {}", e);
            match e.downcast_ref::<acscan::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Scan(args)) => cmd_scan::run(&cli, args),
        Some(Command::Stats(args)) => cmd_stats::run(&cli, args),
    }
}
