// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel file walking with gitignore support.
//!
//! Files are streamed over a channel as the `ignore` walker finds them.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crossbeam_channel::{Receiver, Sender, bounded};
use ignore::overrides::OverrideBuilder;
use ignore::{WalkBuilder, WalkState};

use crate::error::{Error, Result};
use crate::reader::MAX_FILE_SIZE;

/// Default maximum directory depth.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Directories never descended into.
pub(crate) const SKIP_DIRECTORIES: &[&str] = &["node_modules", ".git"];

fn is_loop_error(err: &ignore::Error) -> bool {
    match err {
        ignore::Error::Loop { .. } => true,
        ignore::Error::WithPath { err, .. }
        | ignore::Error::WithDepth { err, .. }
        | ignore::Error::WithLineNumber { err, .. } => is_loop_error(err),
        _ => false,
    }
}

fn is_skipped_dir(entry: &ignore::DirEntry) -> bool {
    entry.file_type().is_some_and(|t| t.is_dir())
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| SKIP_DIRECTORIES.contains(&name))
}

/// Walker configuration.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Maximum directory depth.
    pub max_depth: Option<usize>,

    /// Glob patterns to exclude, relative to the walk root.
    pub exclude_patterns: Vec<String>,

    /// Whether to respect gitignore files.
    pub git_ignore: bool,

    /// Whether to skip hidden files.
    pub hidden: bool,

    /// Files larger than this are skipped with a warning.
    pub max_file_size: u64,

    /// Number of threads (0 = auto).
    pub threads: usize,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            exclude_patterns: Vec::new(),
            git_ignore: true,
            hidden: true,
            max_file_size: MAX_FILE_SIZE,
            threads: 0,
        }
    }
}

/// File discovered by the walker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    pub path: PathBuf,
    pub size: u64,
    /// Directory depth from the walk root.
    pub depth: usize,
}

/// Statistics from a walk operation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WalkStats {
    pub files_found: usize,
    /// Files skipped for exceeding the size limit.
    pub files_skipped_size: usize,
    pub symlink_loops: usize,
    pub errors: usize,
}

impl WalkStats {
    pub fn merge(&mut self, other: &WalkStats) {
        self.files_found += other.files_found;
        self.files_skipped_size += other.files_skipped_size;
        self.symlink_loops += other.symlink_loops;
        self.errors += other.errors;
    }
}

#[derive(Default)]
struct Counters {
    files_found: AtomicUsize,
    files_skipped_size: AtomicUsize,
    symlink_loops: AtomicUsize,
    errors: AtomicUsize,
}

impl Counters {
    fn snapshot(&self) -> WalkStats {
        WalkStats {
            files_found: self.files_found.load(Ordering::Relaxed),
            files_skipped_size: self.files_skipped_size.load(Ordering::Relaxed),
            symlink_loops: self.symlink_loops.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
        }
    }
}

/// Parallel file walker with gitignore support.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    fn builder(&self, root: &Path) -> Result<WalkBuilder> {
        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(self.config.hidden)
            .git_ignore(self.config.git_ignore)
            .git_exclude(self.config.git_ignore)
            .git_global(self.config.git_ignore)
            .max_depth(self.config.max_depth)
            .follow_links(true)
            .filter_entry(|entry| !is_skipped_dir(entry));

        if self.config.threads > 0 {
            builder.threads(self.config.threads);
        }

        // Override globs are whitelists; a leading `!` turns them into excludes.
        if !self.config.exclude_patterns.is_empty() {
            let mut overrides = OverrideBuilder::new(root);
            for pattern in &self.config.exclude_patterns {
                overrides
                    .add(&format!("!{}", pattern))
                    .map_err(|e| Error::Walk {
                        message: format!("invalid exclude pattern `{}`: {}", pattern, e),
                    })?;
            }
            let overrides = overrides.build().map_err(|e| Error::Walk {
                message: e.to_string(),
            })?;
            builder.overrides(overrides);
        }

        Ok(builder)
    }

    /// Walk `root`, streaming files as they are found.
    ///
    /// `root` may be a single file, which is yielded as-is.
    pub fn walk(&self, root: &Path) -> Result<(Receiver<WalkedFile>, WalkHandle)> {
        let walker = self.builder(root)?.build_parallel();
        let (tx, rx) = bounded(1000);
        let max_file_size = self.config.max_file_size;
        let counters = Arc::new(Counters::default());
        let stats = Arc::clone(&counters);

        let handle = std::thread::spawn(move || {
            walker.run(|| {
                let tx = tx.clone();
                let counters = Arc::clone(&counters);
                Box::new(move |entry| visit(entry, &tx, &counters, max_file_size))
            });
            stats.snapshot()
        });

        Ok((rx, WalkHandle { handle }))
    }

    /// Walk and collect every file, sorted by path.
    pub fn walk_collect(&self, root: &Path) -> Result<(Vec<WalkedFile>, WalkStats)> {
        let (rx, handle) = self.walk(root)?;
        let mut files: Vec<_> = rx.iter().collect();
        files.sort_by(|a, b| a.path.cmp(&b.path));
        Ok((files, handle.join()))
    }
}

fn visit(
    entry: std::result::Result<ignore::DirEntry, ignore::Error>,
    tx: &Sender<WalkedFile>,
    counters: &Counters,
    max_file_size: u64,
) -> WalkState {
    let entry = match entry {
        Ok(entry) => entry,
        Err(err) => {
            if is_loop_error(&err) {
                tracing::warn!("symlink loop detected: {}", err);
                counters.symlink_loops.fetch_add(1, Ordering::Relaxed);
            } else {
                tracing::warn!("walk error: {}", err);
                counters.errors.fetch_add(1, Ordering::Relaxed);
            }
            return WalkState::Continue;
        }
    };

    if !entry.file_type().is_some_and(|t| t.is_file()) {
        return WalkState::Continue;
    }

    let size = entry.metadata().map(|m| m.len()).unwrap_or(0);
    if size > max_file_size {
        tracing::warn!(
            "skipping {} ({} bytes > {} byte limit)",
            entry.path().display(),
            size,
            max_file_size
        );
        counters.files_skipped_size.fetch_add(1, Ordering::Relaxed);
        return WalkState::Continue;
    }

    counters.files_found.fetch_add(1, Ordering::Relaxed);
    let walked = WalkedFile {
        depth: entry.depth(),
        path: entry.into_path(),
        size,
    };
    if tx.send(walked).is_err() {
        return WalkState::Quit;
    }
    WalkState::Continue
}

/// Handle to a running walk operation.
pub struct WalkHandle {
    handle: std::thread::JoinHandle<WalkStats>,
}

impl WalkHandle {
    /// Wait for the walk to complete and return stats.
    pub fn join(self) -> WalkStats {
        self.handle.join().unwrap_or_default()
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
