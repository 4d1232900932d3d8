// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated content reading for files and streams.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which reading a file is logged (1MB).
pub const LARGE_FILE_WARN: u64 = 1024 * 1024;

/// Maximum content size to read (10MB).
pub const MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Content read from a file or stream.
#[derive(Debug)]
pub struct FileContent {
    pub bytes: Vec<u8>,
    pub size: u64,
}

/// Size-gated reader.
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

    /// Read a file, rejecting it up front when it exceeds the size limit.
    pub fn read(&self, path: &Path) -> Result<FileContent> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
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
                "reading large file"
            );
        }

        let file = File::open(path).map_err(io_err)?;
        self.read_from(file, path)
    }

    /// Read a stream to its end. `origin` names it in errors.
    ///
    /// At most one byte past the limit is buffered before the read is
    /// rejected.
    pub fn read_from(&self, source: impl Read, origin: &Path) -> Result<FileContent> {
        let mut bytes = Vec::new();
        source
            .take(self.max_size.saturating_add(1))
            .read_to_end(&mut bytes)
            .map_err(|e| Error::Io {
                path: origin.to_path_buf(),
                source: e,
            })?;

        let size = bytes.len() as u64;
        if size > self.max_size {
            return Err(Error::FileTooLarge {
                path: origin.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }
        Ok(FileContent { bytes, size })
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
