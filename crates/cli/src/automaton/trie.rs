// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dictionary prefix tree.

use std::collections::HashMap;

use super::alphabet::{Alphabet, Transitions};
use super::linker::Automaton;
use super::{AutomatonError, NodeId, PatternId};

/// A node of the dictionary trie.
#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) transitions: Transitions,
    /// Pattern ending exactly at this node.
    pub(crate) terminal: Option<PatternId>,
    /// Node one edge up. `None` only for the root.
    pub(crate) parent: Option<NodeId>,
    /// Length of the path from the root.
    pub(crate) depth: u32,
}

impl Node {
    fn new(alphabet: Alphabet, parent: Option<NodeId>, depth: u32) -> Self {
        Self {
            transitions: alphabet.empty_transitions(),
            terminal: None,
            parent,
            depth,
        }
    }
}

/// Incremental trie construction.
///
/// Patterns are inserted one at a time; [`TrieBuilder::finish`] hands the
/// arena over to an unlinked [`Trie`].
#[derive(Debug)]
pub struct TrieBuilder {
    alphabet: Alphabet,
    nodes: Vec<Node>,
    patterns: Vec<String>,
    ids: HashMap<String, PatternId>,
    inserted: usize,
}

impl TrieBuilder {
    pub fn new(alphabet: Alphabet) -> Self {
        Self {
            alphabet,
            nodes: vec![Node::new(alphabet, None, 0)],
            patterns: Vec::new(),
            ids: HashMap::new(),
            inserted: 0,
        }
    }

    /// Insert a pattern, returning its id.
    ///
    /// Inserting a pattern that is already present returns the existing id.
    /// On error no nodes are added.
    pub fn insert(&mut self, pattern: &str) -> Result<PatternId, AutomatonError> {
        let index = self.inserted;
        self.inserted += 1;

        if pattern.is_empty() {
            return Err(AutomatonError::EmptyPattern { index });
        }
        if let Some(&id) = self.ids.get(pattern) {
            return Ok(id);
        }
        let symbols = self.symbols(pattern)?;

        let mut node = NodeId::ROOT;
        for symbol in symbols {
            node = match self.nodes[node.index()].transitions.get(symbol) {
                Some(child) => child,
                None => self.add_child(node, symbol)?,
            };
        }

        let id = PatternId(self.patterns.len() as u32);
        self.nodes[node.index()].terminal = Some(id);
        self.patterns.push(pattern.to_string());
        self.ids.insert(pattern.to_string(), id);
        Ok(id)
    }

    /// Validate every byte before touching the arena.
    fn symbols(&self, pattern: &str) -> Result<Vec<u8>, AutomatonError> {
        pattern
            .bytes()
            .enumerate()
            .map(|(offset, byte)| {
                self.alphabet
                    .symbol(byte)
                    .ok_or_else(|| AutomatonError::InvalidSymbol {
                        pattern: pattern.to_string(),
                        symbol: pattern[offset..].chars().next().unwrap_or('\u{fffd}'),
                        offset,
                        alphabet: self.alphabet,
                    })
            })
            .collect()
    }

    fn add_child(&mut self, parent: NodeId, symbol: u8) -> Result<NodeId, AutomatonError> {
        let max = u32::MAX as usize;
        if self.nodes.len() >= max {
            return Err(AutomatonError::TooManyNodes { max });
        }
        let child = NodeId(self.nodes.len() as u32);
        let depth = self.nodes[parent.index()].depth + 1;
        self.nodes.push(Node::new(self.alphabet, Some(parent), depth));
        self.nodes[parent.index()].transitions.insert(symbol, child);
        Ok(child)
    }

    pub fn finish(self) -> Trie {
        Trie {
            alphabet: self.alphabet,
            nodes: self.nodes,
            patterns: self.patterns,
        }
    }
}

/// The dictionary trie before linking.
#[derive(Debug, Clone)]
pub struct Trie {
    pub(crate) alphabet: Alphabet,
    pub(crate) nodes: Vec<Node>,
    pub(crate) patterns: Vec<String>,
}

impl Trie {
    /// Insert all patterns in order.
    ///
    /// Fails on the first empty pattern or out-of-alphabet symbol; no trie is
    /// returned in that case.
    pub fn build<I, P>(alphabet: Alphabet, patterns: I) -> Result<Self, AutomatonError>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut builder = TrieBuilder::new(alphabet);
        for pattern in patterns {
            builder.insert(pattern.as_ref())?;
        }
        Ok(builder.finish())
    }

    /// Compute failure and output links, producing a matchable automaton.
    pub fn link(self) -> Automaton {
        Automaton::link(self)
    }

    pub fn alphabet(&self) -> Alphabet {
        self.alphabet
    }

    /// Distinct patterns in first-insertion order.
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn pattern(&self, id: PatternId) -> &str {
        &self.patterns[id.index()]
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// True if `word` was inserted as a pattern.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word)
            .is_some_and(|node| self.nodes[node.index()].terminal.is_some())
    }

    /// True if some pattern starts with `prefix`. The empty prefix always matches.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Follow `word` from the root along trie edges only.
    fn walk(&self, word: &str) -> Option<NodeId> {
        word.bytes().try_fold(NodeId::ROOT, |node, byte| {
            let symbol = self.alphabet.symbol(byte)?;
            self.nodes[node.index()].transitions.get(symbol)
        })
    }

    /// Symbols spelling the path from the root to `node`.
    #[cfg(test)]
    pub(crate) fn path(&self, node: NodeId) -> Vec<u8> {
        let mut symbols = Vec::with_capacity(self.nodes[node.index()].depth as usize);
        let mut current = node;
        while let Some(parent) = self.nodes[current.index()].parent {
            if let Some((symbol, _)) = self.nodes[parent.index()]
                .transitions
                .iter()
                .find(|&(_, child)| child == current)
            {
                symbols.push(symbol);
            }
            current = parent;
        }
        symbols.reverse();
        symbols
    }
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
