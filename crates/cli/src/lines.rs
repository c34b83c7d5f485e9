// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Byte offset to line number resolution.

use std::collections::VecDeque;

/// Positions of every `\n` in a buffer.
#[derive(Debug, Clone, Default)]
pub struct LineIndex {
    newlines: Vec<usize>,
}

impl LineIndex {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            newlines: memchr::memchr_iter(b'\n', bytes).collect(),
        }
    }

    /// 1-based line number containing `offset`.
    pub fn line_of(&self, offset: usize) -> u32 {
        self.newlines.partition_point(|&nl| nl < offset) as u32 + 1
    }
}

/// Line numbers for a stream, remembering only newlines a match can still
/// start after.
///
/// Usage per chunk: [`record`](Self::record), look up lines for matches
/// ending in the chunk, then [`forget_before`](Self::forget_before).
/// Memory stays bounded by one chunk plus the lookback.
#[derive(Debug, Clone)]
pub struct LineTracker {
    /// Longest distance from a match end back to its start.
    lookback: usize,
    /// Newlines already dropped from `recent`.
    forgotten: usize,
    /// Absolute offsets of newlines still in reach, ascending.
    recent: VecDeque<usize>,
}

impl LineTracker {
    pub fn new(lookback: usize) -> Self {
        Self {
            lookback,
            forgotten: 0,
            recent: VecDeque::new(),
        }
    }

    /// Note the newlines of a chunk that starts at absolute `base`.
    pub fn record(&mut self, base: usize, chunk: &[u8]) {
        self.recent
            .extend(memchr::memchr_iter(b'\n', chunk).map(|i| base + i));
    }

    /// 1-based line number containing `offset`.
    ///
    /// `offset` must not precede the cutoff of the last `forget_before`.
    pub fn line_of(&self, offset: usize) -> u32 {
        (self.forgotten + self.recent.partition_point(|&nl| nl < offset)) as u32 + 1
    }

    /// Drop newlines no future match can start after, once `consumed`
    /// bytes have been scanned.
    pub fn forget_before(&mut self, consumed: usize) {
        let cutoff = (consumed + 1).saturating_sub(self.lookback);
        while self.recent.front().is_some_and(|&nl| nl < cutoff) {
            self.recent.pop_front();
            self.forgotten += 1;
        }
    }

    /// Newline offsets currently held.
    pub fn retained(&self) -> usize {
        self.recent.len()
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
