// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure and output link computation.
//!
//! Links are assigned in breadth-first order so that, when a node is
//! processed, its parent's failure link and every shallower node's output
//! link are already final.

use std::collections::VecDeque;

use serde::Serialize;

use super::alphabet::Alphabet;
use super::trie::Trie;
use super::{NodeId, PatternId};

/// A linked, immutable Aho-Corasick automaton.
#[derive(Debug, Clone)]
pub struct Automaton {
    pub(crate) trie: Trie,
    /// Longest proper suffix node, per node. Root links to itself.
    pub(crate) failure: Vec<NodeId>,
    /// Nearest terminal node on the failure chain, per node.
    pub(crate) output: Vec<Option<NodeId>>,
}

/// Shape of a built automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AutomatonStats {
    pub alphabet: Alphabet,
    pub patterns: usize,
    pub nodes: usize,
    pub terminal_nodes: usize,
    pub max_depth: usize,
    /// Nodes whose failure link is not the root.
    pub nontrivial_failure_links: usize,
    pub output_links: usize,
}

impl Automaton {
    /// Link a trie. Every node is finalized exactly once.
    pub fn link(trie: Trie) -> Self {
        let count = trie.nodes.len();
        let mut failure = vec![NodeId::ROOT; count];
        let mut output: Vec<Option<NodeId>> = vec![None; count];

        let mut queue = VecDeque::from([NodeId::ROOT]);
        while let Some(node) = queue.pop_front() {
            for (symbol, child) in trie.nodes[node.index()].transitions.iter() {
                let target = if node.is_root() {
                    NodeId::ROOT
                } else {
                    let mut cursor = failure[node.index()];
                    while !cursor.is_root()
                        && trie.nodes[cursor.index()].transitions.get(symbol).is_none()
                    {
                        cursor = failure[cursor.index()];
                    }
                    match trie.nodes[cursor.index()].transitions.get(symbol) {
                        Some(next) if next != child => next,
                        _ => NodeId::ROOT,
                    }
                };

                failure[child.index()] = target;
                output[child.index()] = if trie.nodes[target.index()].terminal.is_some() {
                    Some(target)
                } else {
                    output[target.index()]
                };
                queue.push_back(child);
            }
        }

        tracing::debug!(
            nodes = count,
            patterns = trie.patterns.len(),
            alphabet = %trie.alphabet,
            "linked automaton"
        );

        Self {
            trie,
            failure,
            output,
        }
    }

    pub fn alphabet(&self) -> Alphabet {
        self.trie.alphabet
    }

    /// Distinct patterns in first-insertion order.
    pub fn patterns(&self) -> &[String] {
        &self.trie.patterns
    }

    pub fn pattern(&self, id: PatternId) -> &str {
        self.trie.pattern(id)
    }

    pub fn pattern_count(&self) -> usize {
        self.trie.patterns.len()
    }

    /// Byte length of the longest pattern; 0 for an empty dictionary.
    pub fn longest_pattern_len(&self) -> usize {
        self.trie.patterns.iter().map(String::len).max().unwrap_or(0)
    }

    pub fn failure_link(&self, node: NodeId) -> NodeId {
        self.failure[node.index()]
    }

    pub fn output_link(&self, node: NodeId) -> Option<NodeId> {
        self.output[node.index()]
    }

    pub fn stats(&self) -> AutomatonStats {
        let nodes = &self.trie.nodes;
        AutomatonStats {
            alphabet: self.trie.alphabet,
            patterns: self.trie.patterns.len(),
            nodes: nodes.len(),
            terminal_nodes: nodes.iter().filter(|n| n.terminal.is_some()).count(),
            max_depth: nodes.iter().map(|n| n.depth as usize).max().unwrap_or(0),
            nontrivial_failure_links: self.failure.iter().filter(|f| !f.is_root()).count(),
            output_links: self.output.iter().filter(|o| o.is_some()).count(),
        }
    }

    /// Transition from `state` on `symbol`, following failure links on a miss.
    #[inline]
    pub(crate) fn next_state(&self, mut state: NodeId, symbol: Option<u8>) -> NodeId {
        let Some(symbol) = symbol else {
            return NodeId::ROOT;
        };
        loop {
            if let Some(child) = self.trie.nodes[state.index()].transitions.get(symbol) {
                return child;
            }
            if state.is_root() {
                return state;
            }
            state = self.failure[state.index()];
        }
    }

    #[inline]
    pub(crate) fn terminal(&self, node: NodeId) -> Option<PatternId> {
        self.trie.nodes[node.index()].terminal
    }
}

#[cfg(test)]
#[path = "linker_tests.rs"]
mod tests;
