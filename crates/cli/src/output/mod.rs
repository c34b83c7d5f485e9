// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for scan results.

pub mod json;
pub mod text;

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Print per-pattern counts instead of every occurrence.
    pub count: bool,
}

impl FormatOptions {
    /// Options for count mode.
    pub fn counts() -> Self {
        Self { count: true }
    }
}

/// Display form of an input path; `\` separators become `/`.
pub(crate) fn display_path(path: &std::path::Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
