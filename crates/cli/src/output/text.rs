// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One line per occurrence, then a summary:
//! ```text
//! <path>:<line>:<offset>: <pattern>
//! 3 matches in 1 file
//! ```
//! The summary gains ` (N skipped)` when inputs were skipped.
//! In count mode each line is `<path>: <pattern> <count>`.

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::{FormatOptions, display_path};
use crate::color::scheme;
use crate::runner::{FileScan, ScanReport};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self { out, options }
    }

    /// Write every file's matches followed by the summary line.
    pub fn write_report(&mut self, report: &ScanReport) -> std::io::Result<()> {
        for file in &report.files {
            if self.options.count {
                self.write_counts(file)?;
            } else {
                self.write_occurrences(file)?;
            }
        }
        self.write_summary(report)?;
        self.out.flush()
    }

    fn write_occurrences(&mut self, file: &FileScan) -> std::io::Result<()> {
        let path = display_path(&file.path);
        for (offset, pattern) in file.occurrences() {
            self.write_path(&path)?;
            write!(self.out, ":")?;
            self.out.set_color(&scheme::line_number())?;
            write!(self.out, "{}", file.line_of(offset))?;
            self.out.reset()?;
            write!(self.out, ":")?;
            self.out.set_color(&scheme::offset())?;
            write!(self.out, "{}", offset)?;
            self.out.reset()?;
            write!(self.out, ": ")?;
            self.write_pattern(pattern)?;
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn write_counts(&mut self, file: &FileScan) -> std::io::Result<()> {
        let path = display_path(&file.path);
        for (pattern, offsets) in &file.matches {
            self.write_path(&path)?;
            write!(self.out, ": ")?;
            self.write_pattern(pattern)?;
            writeln!(self.out, " {}", offsets.len())?;
        }
        Ok(())
    }

    fn write_path(&mut self, path: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", path)?;
        self.out.reset()
    }

    fn write_pattern(&mut self, pattern: &str) -> std::io::Result<()> {
        self.out.set_color(&scheme::pattern())?;
        write!(self.out, "{}", pattern)?;
        self.out.reset()
    }

    /// Write the summary line, noting skipped inputs if there were any.
    pub fn write_summary(&mut self, report: &ScanReport) -> std::io::Result<()> {
        let matches = report.total_matches();
        let files = report.files.len();
        self.out.set_color(&scheme::summary())?;
        write!(
            self.out,
            "{} match{} in {} file{}",
            matches,
            if matches == 1 { "" } else { "es" },
            files,
            if files == 1 { "" } else { "s" }
        )?;
        self.out.reset()?;
        if report.files_skipped > 0 {
            write!(self.out, " ({} skipped)", report.files_skipped)?;
        }
        writeln!(self.out)
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
