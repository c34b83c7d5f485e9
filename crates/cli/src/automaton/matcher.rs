// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass matching over text.
//!
//! At every text position the current state's output chain is walked, so
//! overlapping and nested occurrences are all reported. Bytes outside the
//! alphabet never match and send the state back to the root.

use std::collections::BTreeMap;

use super::linker::Automaton;
use super::trie::Trie;
use super::{AutomatonError, NodeId, PatternId};

/// Pattern text mapped to ascending 0-based start offsets.
///
/// Patterns that never occur have no entry.
pub type MatchMap = BTreeMap<String, Vec<usize>>;

/// One occurrence of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match {
    pub pattern: PatternId,
    /// Byte offset of the first matched byte.
    pub start: usize,
    /// Byte offset one past the last matched byte.
    pub end: usize,
}

impl Automaton {
    /// Lazily iterate over every occurrence, ordered by end offset and then
    /// by decreasing length.
    pub fn find_iter<'a, 't>(&'a self, text: &'t [u8]) -> Matches<'a, 't> {
        Matches {
            automaton: self,
            text,
            pos: 0,
            state: NodeId::ROOT,
            pending: None,
        }
    }

    /// Collect every occurrence, grouped by pattern.
    pub fn scan(&self, text: &[u8]) -> MatchMap {
        let mut map = MatchMap::new();
        for m in self.find_iter(text) {
            record(&mut map, self, m);
        }
        map
    }

    /// True if any pattern occurs in `text`. Stops at the first occurrence.
    pub fn is_match(&self, text: &[u8]) -> bool {
        self.find_iter(text).next().is_some()
    }

    /// Start a resumable scan.
    pub fn stream(&self) -> StreamScanner<'_> {
        StreamScanner {
            automaton: self,
            state: NodeId::ROOT,
            offset: 0,
        }
    }

    /// Report every pattern on the output chain of `state`, which was reached
    /// after consuming the byte ending at `end`.
    #[inline]
    fn emit_chain(&self, state: NodeId, end: usize, on_match: &mut impl FnMut(Match)) {
        let mut cursor = Some(state);
        while let Some(node) = cursor {
            if let Some(pattern) = self.terminal(node) {
                on_match(self.make_match(pattern, end));
            }
            cursor = self.output_link(node);
        }
    }

    #[inline]
    fn make_match(&self, pattern: PatternId, end: usize) -> Match {
        Match {
            pattern,
            start: end - self.pattern(pattern).len(),
            end,
        }
    }
}

/// Append a match to its pattern's offset list.
pub(crate) fn record(map: &mut MatchMap, automaton: &Automaton, m: Match) {
    let pattern = automaton.pattern(m.pattern);
    match map.get_mut(pattern) {
        Some(offsets) => offsets.push(m.start),
        None => {
            map.insert(pattern.to_string(), vec![m.start]);
        }
    }
}

/// Iterator over matches in a text. See [`Automaton::find_iter`].
pub struct Matches<'a, 't> {
    automaton: &'a Automaton,
    text: &'t [u8],
    /// Number of bytes consumed.
    pos: usize,
    state: NodeId,
    /// Next node of the output chain still to be reported.
    pending: Option<NodeId>,
}

impl Iterator for Matches<'_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        let automaton = self.automaton;
        loop {
            while let Some(node) = self.pending {
                self.pending = automaton.output_link(node);
                if let Some(pattern) = automaton.terminal(node) {
                    return Some(automaton.make_match(pattern, self.pos));
                }
            }

            let &byte = self.text.get(self.pos)?;
            self.state = automaton.next_state(self.state, automaton.alphabet().symbol(byte));
            self.pos += 1;
            if !self.state.is_root() {
                self.pending = Some(self.state);
            }
        }
    }
}

/// Resumable scanner that carries automaton state between chunks.
///
/// Feeding a text in any number of pieces reports the same matches, with
/// the same absolute offsets, as scanning it in one call.
#[derive(Debug, Clone)]
pub struct StreamScanner<'a> {
    automaton: &'a Automaton,
    state: NodeId,
    offset: usize,
}

impl<'a> StreamScanner<'a> {
    /// The automaton being run.
    pub fn automaton(&self) -> &'a Automaton {
        self.automaton
    }

    /// Consume the next chunk, calling `on_match` for each occurrence that
    /// ends inside it.
    pub fn feed(&mut self, chunk: &[u8], mut on_match: impl FnMut(Match)) {
        let automaton = self.automaton;
        let alphabet = automaton.alphabet();
        for &byte in chunk {
            self.state = automaton.next_state(self.state, alphabet.symbol(byte));
            self.offset += 1;
            if !self.state.is_root() {
                automaton.emit_chain(self.state, self.offset, &mut on_match);
            }
        }
    }

    /// Consume the next chunk, appending occurrences to `map`.
    pub fn feed_into(&mut self, chunk: &[u8], map: &mut MatchMap) {
        let automaton = self.automaton;
        self.feed(chunk, |m| record(map, automaton, m));
    }

    /// Total bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Forget all state, as if starting a new text.
    pub fn reset(&mut self) {
        self.state = NodeId::ROOT;
        self.offset = 0;
    }
}

/// Something that may be able to scan text.
///
/// Implemented by the linked [`Automaton`] and by the unlinked [`Trie`], which
/// refuses with [`AutomatonError::NotLinked`].
pub trait Scan {
    fn try_scan(&self, text: &[u8]) -> Result<MatchMap, AutomatonError>;

    fn try_stream(&self) -> Result<StreamScanner<'_>, AutomatonError>;
}

impl Scan for Automaton {
    fn try_scan(&self, text: &[u8]) -> Result<MatchMap, AutomatonError> {
        Ok(self.scan(text))
    }

    fn try_stream(&self) -> Result<StreamScanner<'_>, AutomatonError> {
        Ok(self.stream())
    }
}

impl Scan for Trie {
    fn try_scan(&self, _text: &[u8]) -> Result<MatchMap, AutomatonError> {
        Err(AutomatonError::NotLinked)
    }

    fn try_stream(&self) -> Result<StreamScanner<'_>, AutomatonError> {
        Err(AutomatonError::NotLinked)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
