//! acscan: multi-pattern text search with an Aho-Corasick automaton.

pub mod automaton;
pub mod cli;
pub mod color;
pub mod config;
pub mod dictionary;
pub mod discovery;
pub mod env;
pub mod error;
pub mod lines;
pub mod output;
pub mod reader;
pub mod runner;
pub mod walker;

pub use automaton::{
    Alphabet, Automaton, AutomatonError, Match, MatchMap, Scan, StreamScanner, Trie, TrieBuilder,
    build_automaton,
};
pub use cli::{Cli, Command, OutputFormat, ScanArgs, StatsArgs};
pub use dictionary::Dictionary;
pub use error::{Error, ExitCode, Result};
pub use reader::{FileContent, FileReader};
pub use walker::{FileWalker, WalkStats, WalkedFile, WalkerConfig};

#[cfg(test)]
pub mod test_utils;
