// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.

use acscan::cli::{Cli, OutputFormat, ScanArgs};
use acscan::color::resolve_color;
use acscan::dictionary::{Dictionary, load_config};
use acscan::error::ExitCode;
use acscan::output::FormatOptions;
use acscan::output::json::JsonFormatter;
use acscan::output::text::TextFormatter;
use acscan::reader::FileReader;
use acscan::runner::{STDIN_LABEL, ScanReport, ScanRunner};
use acscan::walker::{FileWalker, WalkerConfig};

/// Run the scan command.
pub fn run(cli: &Cli, args: &ScanArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let loaded = load_config(cli.config.as_deref(), &cwd)?;
    let automaton = Dictionary::resolve(loaded.as_ref(), &args.dictionary)?.build()?;

    let scan_config = loaded.as_ref().map(|l| &l.config.scan);
    let max_file_size = args
        .max_file_size
        .or_else(|| scan_config.map(|s| s.max_file_size))
        .unwrap_or(acscan::reader::MAX_FILE_SIZE);
    let hidden = args.hidden || scan_config.is_some_and(|s| s.hidden);
    let no_ignore = args.no_ignore || scan_config.is_some_and(|s| s.no_ignore);

    let runner = ScanRunner::new(&automaton, FileReader::with_max_size(max_file_size));

    let report = if args.paths.is_empty() {
        tracing::debug!("scanning stdin");
        runner.scan_stream_report(STDIN_LABEL, std::io::stdin().lock())?
    } else {
        let walker = FileWalker::new(WalkerConfig {
            max_depth: args.max_depth,
            git_ignore: !no_ignore,
            hidden: !hidden,
            max_file_size,
        });
        let (files, stats) = walker.walk(&args.paths)?;
        let mut report = runner.scan_files(&files)?;
        report.files_skipped += stats.files_skipped_size;
        report
    };

    write_report(args, &report)?;

    Ok(if report.has_matches() {
        ExitCode::Success
    } else {
        ExitCode::NoMatch
    })
}

fn write_report(args: &ScanArgs, report: &ScanReport) -> anyhow::Result<()> {
    let options = FormatOptions { count: args.count };
    match args.output {
        OutputFormat::Text => {
            let color_choice = resolve_color(args.color, args.no_color);
            let mut formatter = TextFormatter::stdout(color_choice, options);
            formatter.write_report(report)?;
        }
        OutputFormat::Json => {
            let mut formatter = JsonFormatter::new(std::io::stdout().lock());
            formatter.write(report)?;
        }
    }
    Ok(())
}
