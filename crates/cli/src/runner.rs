// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel scan runner.
//!
//! Scans files in parallel using rayon, all workers sharing one read-only
//! automaton. A file that cannot be read is skipped with a warning unless
//! it was named explicitly.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::PathBuf;

use rayon::prelude::*;

use crate::automaton::matcher::record;
use crate::automaton::{MatchMap, Scan};
use crate::error::{Error, Result};
use crate::lines::{LineIndex, LineTracker};
use crate::reader::{CHUNK_SIZE, FileReader, for_each_chunk};
use crate::walker::WalkedFile;

/// Display label used for standard input.
pub const STDIN_LABEL: &str = "-";

/// Matches found in one input.
#[derive(Debug, Clone)]
pub struct FileScan {
    /// Input path (`-` for stdin).
    pub path: PathBuf,

    /// Pattern to ascending start offsets.
    pub matches: MatchMap,

    /// 1-based line number of every matched start offset.
    pub lines: BTreeMap<usize, u32>,
}

impl FileScan {
    /// Wrap the matches of an in-memory text, resolving their lines.
    pub fn from_text(path: impl Into<PathBuf>, matches: MatchMap, text: &[u8]) -> Self {
        let index = LineIndex::new(text);
        let lines = matches
            .values()
            .flatten()
            .map(|&offset| (offset, index.line_of(offset)))
            .collect();
        Self {
            path: path.into(),
            matches,
            lines,
        }
    }

    /// Line of a matched start offset.
    pub fn line_of(&self, offset: usize) -> u32 {
        self.lines.get(&offset).copied().unwrap_or(1)
    }

    pub fn match_count(&self) -> usize {
        self.matches.values().map(Vec::len).sum()
    }

    /// Every occurrence as `(offset, pattern)`, ordered by offset then pattern.
    pub fn occurrences(&self) -> Vec<(usize, &str)> {
        let mut all: Vec<(usize, &str)> = self
            .matches
            .iter()
            .flat_map(|(pattern, offsets)| offsets.iter().map(move |&o| (o, pattern.as_str())))
            .collect();
        all.sort_unstable();
        all
    }
}

/// Outcome of scanning a set of inputs.
#[derive(Debug, Default, Clone)]
pub struct ScanReport {
    /// Inputs with at least one match, in input order.
    pub files: Vec<FileScan>,

    /// Inputs scanned, with or without matches.
    pub files_scanned: usize,

    /// Inputs skipped because they could not be read.
    pub files_skipped: usize,
}

impl ScanReport {
    pub fn total_matches(&self) -> usize {
        self.files.iter().map(FileScan::match_count).sum()
    }

    pub fn has_matches(&self) -> bool {
        !self.files.is_empty()
    }
}

/// Runs a scanner over files and streams.
pub struct ScanRunner<'a, S: Scan + Sync> {
    scanner: &'a S,
    reader: FileReader,
}

impl<'a, S: Scan + Sync> ScanRunner<'a, S> {
    pub fn new(scanner: &'a S, reader: FileReader) -> Self {
        Self { scanner, reader }
    }

    /// Scan every file in parallel. Output keeps input order.
    pub fn scan_files(&self, files: &[WalkedFile]) -> Result<ScanReport> {
        let results: Vec<Result<Option<FileScan>>> =
            files.par_iter().map(|file| self.scan_file(file)).collect();

        let mut report = ScanReport::default();
        for result in results {
            match result? {
                Some(scan) => {
                    report.files_scanned += 1;
                    if !scan.matches.is_empty() {
                        report.files.push(scan);
                    }
                }
                None => report.files_skipped += 1,
            }
        }

        tracing::debug!(
            scanned = report.files_scanned,
            skipped = report.files_skipped,
            matches = report.total_matches(),
            "scan complete"
        );
        Ok(report)
    }

    /// Scan one file. `Ok(None)` means a walked file was skipped.
    fn scan_file(&self, file: &WalkedFile) -> Result<Option<FileScan>> {
        let content = match self.reader.read(&file.path) {
            Ok(content) => content,
            Err(e) if !file.explicit => {
                tracing::warn!("skipping {}: {}", file.path.display(), e);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        let matches = self.scanner.try_scan(&content.bytes)?;
        Ok(Some(FileScan::from_text(
            file.path.clone(),
            matches,
            &content.bytes,
        )))
    }

    /// Scan a stream chunk by chunk without buffering it.
    ///
    /// Only newlines that a later match could still start after are kept,
    /// so memory does not grow with the input.
    pub fn scan_stream<R: Read>(&self, label: impl Into<PathBuf>, reader: R) -> Result<FileScan> {
        let path = label.into();
        let mut stream = self.scanner.try_stream()?;
        let automaton = stream.automaton();
        let mut tracker = LineTracker::new(automaton.longest_pattern_len());
        let mut matches = MatchMap::new();
        let mut lines = BTreeMap::new();

        let total = for_each_chunk(reader, CHUNK_SIZE, |chunk| {
            tracker.record(stream.offset(), chunk);
            stream.feed(chunk, |m| {
                lines
                    .entry(m.start)
                    .or_insert_with(|| tracker.line_of(m.start));
                record(&mut matches, automaton, m);
            });
            tracker.forget_before(stream.offset());
        })
        .map_err(|e| Error::Io {
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), bytes = total, "stream scanned");
        Ok(FileScan {
            path,
            matches,
            lines,
        })
    }

    /// Scan a stream and wrap it as a one-input report.
    pub fn scan_stream_report<R: Read>(
        &self,
        label: impl Into<PathBuf>,
        reader: R,
    ) -> Result<ScanReport> {
        let scan = self.scan_stream(label, reader)?;
        let files = if scan.matches.is_empty() {
            Vec::new()
        } else {
            vec![scan]
        };
        Ok(ScanReport {
            files,
            files_scanned: 1,
            files_skipped: 0,
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
