// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for
//! `acscan.toml` (or its hidden variant `.acscan.toml`).

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Config file names, in lookup order within one directory.
pub const CONFIG_FILE_NAMES: &[&str] = &["acscan.toml", ".acscan.toml"];

/// Find a config file starting from `start_dir` and walking up to the git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    for dir in start_dir.ancestors() {
        if let Some(found) = CONFIG_FILE_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
        {
            tracing::debug!(path = %found.display(), "discovered config");
            return Some(found);
        }

        if dir.join(".git").exists() {
            return None;
        }
    }
    None
}

/// Resolve config path from CLI arg, env var, or discovery.
///
/// Priority:
/// 1. CLI flag `-C`/`--config` (clap also reads `ACSCAN_CONFIG`)
/// 2. Discovery from the current directory up to the git root
/// 3. None (patterns must come from the command line)
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    match explicit {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(Error::Config {
            message: format!("config file not found: {}", path.display()),
            path: Some(path.to_path_buf()),
        }),
        None => Ok(find_config(cwd)),
    }
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
