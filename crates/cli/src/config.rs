// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles acscan.toml parsing with version validation and unknown key warnings.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::automaton::Alphabet;
use crate::error::{Error, Result};
use crate::reader::MAX_FILE_SIZE;

/// Supported config file version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Pattern dictionary.
    #[serde(default)]
    pub dictionary: DictionaryConfig,

    /// Scan behaviour.
    #[serde(default)]
    pub scan: ScanConfig,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Dictionary configuration.
#[derive(Debug, Default, Deserialize)]
pub struct DictionaryConfig {
    /// Alphabet for patterns and text (default: lowercase).
    #[serde(default)]
    pub alphabet: Alphabet,

    /// Inline patterns.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// File with one pattern per line, relative to the config file.
    pub patterns_file: Option<PathBuf>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Scan configuration.
#[derive(Debug, Deserialize)]
pub struct ScanConfig {
    /// Maximum file size to scan in bytes (default: 10MB).
    #[serde(default = "ScanConfig::default_max_file_size")]
    pub max_file_size: u64,

    /// Include hidden files when walking directories.
    #[serde(default)]
    pub hidden: bool,

    /// Ignore .gitignore and similar files when walking directories.
    #[serde(default)]
    pub no_ignore: bool,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            max_file_size: Self::default_max_file_size(),
            hidden: false,
            no_ignore: false,
            unknown: BTreeMap::new(),
        }
    }
}

impl ScanConfig {
    fn default_max_file_size() -> u64 {
        MAX_FILE_SIZE
    }
}

impl Config {
    /// Dotted names of keys that were not recognized.
    pub fn unknown_keys(&self) -> Vec<String> {
        let top = self.unknown.keys().cloned();
        let dictionary = self
            .dictionary
            .unknown
            .keys()
            .map(|k| format!("dictionary.{k}"));
        let scan = self.scan.unknown.keys().map(|k| format!("scan.{k}"));
        top.chain(dictionary).chain(scan).collect()
    }

    /// Patterns listed inline followed by those from `patterns_file`.
    ///
    /// `base_dir` is the directory of the config file.
    pub fn patterns(&self, base_dir: &Path) -> Result<Vec<String>> {
        let mut patterns = self.dictionary.patterns.clone();
        if let Some(file) = &self.dictionary.patterns_file {
            patterns.extend(read_patterns_file(&base_dir.join(file))?);
        }
        Ok(patterns)
    }
}

/// Load and validate config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = parse(&content, path)?;
    for key in config.unknown_keys() {
        warn_unknown_key(path, &key);
    }
    Ok(config)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade acscan to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

/// Read a pattern list: one pattern per line, blank lines skipped.
///
/// Trailing `\r` is stripped so CRLF files behave like LF files.
pub fn read_patterns_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(parse_patterns(&content))
}

pub(crate) fn parse_patterns(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!(path = %path.display(), key, "unrecognized config field");
    eprintln!(
        "acscan: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
