// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dictionary assembly from config and command-line sources.
//!
//! Patterns are gathered in a fixed order: config inline patterns, the
//! config `patterns_file`, the `-f` file, then `-e` patterns. Duplicates
//! across sources collapse to the first occurrence when the trie is built.

use std::path::{Path, PathBuf};

use crate::automaton::{Alphabet, Automaton, build_automaton};
use crate::cli::DictionaryArgs;
use crate::config::{self, Config};
use crate::discovery;
use crate::error::{Error, Result};

/// A config file together with where it was found.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: Config,
    pub path: PathBuf,
}

impl LoadedConfig {
    /// Directory that relative paths in the config resolve against.
    pub fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

/// Resolve and load the config, if there is one.
pub fn load_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<LoadedConfig>> {
    let Some(path) = discovery::resolve_config(explicit, cwd)? else {
        tracing::debug!("no config found");
        return Ok(None);
    };
    tracing::debug!("loading config from {}", path.display());
    let config = config::load(&path)?;
    Ok(Some(LoadedConfig { config, path }))
}

/// The patterns and alphabet to build an automaton from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    pub alphabet: Alphabet,
    pub patterns: Vec<String>,
}

impl Dictionary {
    /// Merge config and command-line sources.
    ///
    /// `--alphabet` wins over the config, which wins over the default.
    /// Having no pattern from any source is an argument error.
    pub fn resolve(loaded: Option<&LoadedConfig>, args: &DictionaryArgs) -> Result<Self> {
        let mut patterns = match loaded {
            Some(loaded) => loaded.config.patterns(loaded.base_dir())?,
            None => Vec::new(),
        };
        if let Some(file) = &args.patterns_file {
            patterns.extend(config::read_patterns_file(file)?);
        }
        patterns.extend(args.patterns.iter().cloned());

        if patterns.is_empty() {
            return Err(Error::Argument(
                "no patterns given (use -e, -f, or [dictionary] in acscan.toml)".to_string(),
            ));
        }

        let alphabet = args
            .alphabet
            .or_else(|| loaded.map(|l| l.config.dictionary.alphabet))
            .unwrap_or_default();

        Ok(Self { alphabet, patterns })
    }

    /// Build and link the automaton.
    pub fn build(&self) -> Result<Automaton> {
        let automaton = build_automaton(self.alphabet, &self.patterns)?;
        tracing::debug!(
            patterns = automaton.pattern_count(),
            alphabet = %self.alphabet,
            "dictionary built"
        );
        Ok(automaton)
    }
}

#[cfg(test)]
#[path = "dictionary_tests.rs"]
mod tests;
