// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input discovery with gitignore support.
//!
//! Uses the `ignore` crate to expand directory arguments into the files to
//! scan. Files named directly on the command line are always kept.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::error::{Error, Result};

/// Directories to skip entirely during walking.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &["node_modules", ".git"];

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth (None = unlimited).
    pub max_depth: Option<usize>,

    /// Whether to respect gitignore files.
    pub git_ignore: bool,

    /// Whether to skip hidden files.
    pub hidden: bool,

    /// Walked files larger than this are skipped with a warning.
    pub max_file_size: u64,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: None,
            git_ignore: true,
            hidden: true,
            max_file_size: crate::reader::MAX_FILE_SIZE,
        }
    }
}

/// File discovered by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// Path to the file.
    pub path: PathBuf,

    /// File size in bytes.
    pub size: u64,

    /// Named directly rather than found inside a directory.
    pub explicit: bool,
}

/// Statistics from a walk operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStats {
    /// Files kept for scanning.
    pub files_found: usize,

    /// Files skipped due to the size limit.
    pub files_skipped_size: usize,

    /// Errors encountered (unreadable entries, symlink loops).
    pub errors: usize,
}

/// Sequential file walker with gitignore support.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Expand `roots` into files, sorted by path.
    ///
    /// A root that does not exist is an error; problems inside directories
    /// are logged and counted.
    pub fn walk(&self, roots: &[PathBuf]) -> Result<(Vec<WalkedFile>, WalkStats)> {
        let Some((first, rest)) = roots.split_first() else {
            return Ok((Vec::new(), WalkStats::default()));
        };
        for root in roots {
            if !root.exists() {
                return Err(Error::Io {
                    path: root.clone(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::NotFound,
                        "no such file or directory",
                    ),
                });
            }
        }

        let mut builder = WalkBuilder::new(first);
        for root in rest {
            builder.add(root);
        }
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .ignore(self.config.git_ignore)
            .parents(self.config.git_ignore)
            .max_depth(self.config.max_depth)
            .follow_links(true)
            .filter_entry(|entry| !Self::should_skip_dir(entry));

        let mut files = Vec::new();
        let mut stats = WalkStats::default();

        for entry in builder.build() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("Walk error: {}", err);
                    stats.errors += 1;
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let explicit = entry.depth() == 0;
            let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
            if !explicit && size > self.config.max_file_size {
                tracing::warn!(
                    "skipping {} ({} bytes > {} byte limit)",
                    entry.path().display(),
                    size,
                    self.config.max_file_size
                );
                stats.files_skipped_size += 1;
                continue;
            }

            stats.files_found += 1;
            files.push(WalkedFile {
                path: entry.into_path(),
                size,
                explicit,
            });
        }

        files.sort_by(|a, b| a.path.cmp(&b.path));
        tracing::debug!(
            files = stats.files_found,
            skipped = stats.files_skipped_size,
            errors = stats.errors,
            "walk complete"
        );
        Ok((files, stats))
    }

    /// Skip configured directories (and their whole subtree).
    fn should_skip_dir(entry: &ignore::DirEntry) -> bool {
        entry.depth() > 0
            && entry.file_type().is_some_and(|t| t.is_dir())
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| SKIP_DIRECTORIES.contains(&name))
    }
}

/// Convenience for walking a single root.
pub fn walk_path(root: &Path, config: WalkerConfig) -> Result<(Vec<WalkedFile>, WalkStats)> {
    FileWalker::new(config).walk(&[root.to_path_buf()])
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
