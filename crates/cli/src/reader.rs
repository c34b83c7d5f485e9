// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input reading.
//!
//! Files are read whole, gated by size. Streams (stdin) are read in fixed
//! chunks so they never need to fit in memory.

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which to log large files (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Default maximum file size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Chunk size for streamed input (64KB).
pub const CHUNK_SIZE: usize = 64 * 1024;

/// File content with metadata.
#[derive(Debug)]
pub struct FileContent {
    /// The file content as bytes.
    pub bytes: Vec<u8>,

    /// File size in bytes.
    pub size: u64,
}

/// Size-gated file reader.
#[derive(Debug, Clone, Copy)]
pub struct FileReader {
    max_size: u64,
}

impl Default for FileReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl FileReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Read a file, checking size limits.
    ///
    /// Returns `Err(FileTooLarge)` for files exceeding the maximum.
    pub fn read(&self, path: &Path) -> Result<FileContent> {
        let io_err = |e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        };

        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large file"
            );
        }

        let mut buffer = Vec::with_capacity(size as usize);
        File::open(path)
            .and_then(|mut file| file.read_to_end(&mut buffer))
            .map_err(io_err)?;

        Ok(FileContent {
            size: buffer.len() as u64,
            bytes: buffer,
        })
    }
}

/// Feed a stream to `on_chunk` in pieces of at most `chunk_size` bytes.
///
/// Returns the total number of bytes read.
pub fn for_each_chunk<R: Read>(
    mut reader: R,
    chunk_size: usize,
    mut on_chunk: impl FnMut(&[u8]),
) -> std::io::Result<u64> {
    let mut buffer = vec![0u8; chunk_size.max(1)];
    let mut total = 0u64;
    loop {
        match reader.read(&mut buffer) {
            Ok(0) => return Ok(total),
            Ok(n) => {
                total += n as u64;
                on_chunk(&buffer[..n]);
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
