// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use super::display_path;
use crate::automaton::MatchMap;
use crate::runner::ScanReport;

/// Top-level JSON document.
#[derive(Debug, Serialize)]
pub struct JsonOutput<'a> {
    pub files: Vec<JsonFile<'a>>,
    pub total: usize,
    pub files_scanned: usize,
    pub files_skipped: usize,
}

/// Matches of one input: pattern to start offsets.
#[derive(Debug, Serialize)]
pub struct JsonFile<'a> {
    pub path: String,
    pub matches: &'a MatchMap,
}

impl<'a> From<&'a ScanReport> for JsonOutput<'a> {
    fn from(report: &'a ScanReport) -> Self {
        Self {
            files: report
                .files
                .iter()
                .map(|f| JsonFile {
                    path: display_path(&f.path),
                    matches: &f.matches,
                })
                .collect(),
            total: report.total_matches(),
            files_scanned: report.files_scanned,
            files_skipped: report.files_skipped,
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, report: &ScanReport) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&JsonOutput::from(report))
            .map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }

    /// Write any serializable value as pretty JSON.
    pub fn write_value<T: Serialize>(&mut self, value: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
