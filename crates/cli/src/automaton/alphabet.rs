// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Symbol classification and per-node transition tables.
//!
//! Two alphabets are supported:
//! - `lowercase`: the 26 ASCII letters, stored in a dense fixed table
//! - `bytes`: every byte value, stored in a sorted sparse list

use serde::{Deserialize, Serialize};

use super::NodeId;

/// Number of symbols in the lowercase alphabet.
pub const LOWERCASE_SIZE: usize = 26;

/// Alphabet that patterns and text are drawn from.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Alphabet {
    /// ASCII `a` through `z`.
    #[default]
    Lowercase,
    /// Any byte value; UTF-8 text is matched byte by byte.
    Bytes,
}

impl Alphabet {
    /// Map a byte to its symbol index, or `None` if it is outside the alphabet.
    #[inline]
    pub fn symbol(self, byte: u8) -> Option<u8> {
        match self {
            Alphabet::Lowercase => byte.is_ascii_lowercase().then(|| byte - b'a'),
            Alphabet::Bytes => Some(byte),
        }
    }

    /// Number of distinct symbols.
    pub fn size(self) -> usize {
        match self {
            Alphabet::Lowercase => LOWERCASE_SIZE,
            Alphabet::Bytes => 256,
        }
    }

    /// Empty transition table suited to this alphabet.
    pub(crate) fn empty_transitions(self) -> Transitions {
        match self {
            Alphabet::Lowercase => Transitions::Dense(Box::new([None; LOWERCASE_SIZE])),
            Alphabet::Bytes => Transitions::Sparse(Vec::new()),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Alphabet::Lowercase => "lowercase",
            Alphabet::Bytes => "bytes",
        }
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outgoing edges of a trie node, keyed by symbol index.
#[derive(Debug, Clone)]
pub(crate) enum Transitions {
    /// One slot per lowercase letter.
    Dense(Box<[Option<NodeId>; LOWERCASE_SIZE]>),
    /// `(symbol, child)` pairs sorted by symbol.
    Sparse(Vec<(u8, NodeId)>),
}

impl Transitions {
    #[inline]
    pub(crate) fn get(&self, symbol: u8) -> Option<NodeId> {
        match self {
            Transitions::Dense(slots) => slots.get(symbol as usize).copied().flatten(),
            Transitions::Sparse(edges) => edges
                .binary_search_by_key(&symbol, |&(s, _)| s)
                .ok()
                .map(|i| edges[i].1),
        }
    }

    /// Add an edge. The symbol must not already have one.
    pub(crate) fn insert(&mut self, symbol: u8, child: NodeId) {
        match self {
            Transitions::Dense(slots) => {
                if let Some(slot) = slots.get_mut(symbol as usize) {
                    *slot = Some(child);
                }
            }
            Transitions::Sparse(edges) => {
                if let Err(i) = edges.binary_search_by_key(&symbol, |&(s, _)| s) {
                    edges.insert(i, (symbol, child));
                }
            }
        }
    }

    /// Edges in ascending symbol order.
    pub(crate) fn iter(&self) -> Box<dyn Iterator<Item = (u8, NodeId)> + '_> {
        match self {
            Transitions::Dense(slots) => Box::new(
                slots
                    .iter()
                    .enumerate()
                    .filter_map(|(s, child)| child.map(|c| (s as u8, c))),
            ),
            Transitions::Sparse(edges) => Box::new(edges.iter().copied()),
        }
    }
}

#[cfg(test)]
#[path = "alphabet_tests.rs"]
mod tests;
