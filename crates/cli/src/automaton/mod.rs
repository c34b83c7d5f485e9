// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aho-Corasick multi-pattern automaton.
//!
//! Construction happens in two stages that are distinct types:
//! - [`TrieBuilder`] / [`Trie`]: the dictionary prefix tree (unlinked)
//! - [`Automaton`]: the trie plus failure and output links (immutable)
//!
//! Only an [`Automaton`] can match text. Nodes live in one arena and refer to
//! each other by [`NodeId`]; the root is always index 0.

pub mod alphabet;
pub mod linker;
pub mod matcher;
pub mod trie;

pub use alphabet::Alphabet;
pub use linker::{Automaton, AutomatonStats};
pub use matcher::{Match, MatchMap, Matches, Scan, StreamScanner};
pub use trie::{Trie, TrieBuilder};

/// Index of a node in the automaton arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The root node.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_root(self) -> bool {
        self == Self::ROOT
    }
}

/// Index of a pattern in insertion order (duplicates share the first id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternId(u32);

impl PatternId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Errors raised while constructing or querying an automaton.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AutomatonError {
    /// A zero-length pattern was supplied.
    #[error("pattern #{index} is empty")]
    EmptyPattern { index: usize },

    /// A pattern contains a byte outside the alphabet.
    #[error("pattern {pattern:?} contains {symbol:?} at byte {offset}, outside the {alphabet} alphabet")]
    InvalidSymbol {
        pattern: String,
        symbol: char,
        offset: usize,
        alphabet: Alphabet,
    },

    /// Matching was attempted on a trie that has not been linked.
    #[error("automaton has not been linked")]
    NotLinked,

    /// The arena outgrew `u32` indices.
    #[error("dictionary too large: more than {max} trie nodes")]
    TooManyNodes { max: usize },
}

/// Build and link an automaton in one step.
pub fn build_automaton<I, P>(alphabet: Alphabet, patterns: I) -> Result<Automaton, AutomatonError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<str>,
{
    Ok(Trie::build(alphabet, patterns)?.link())
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
