// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel lint runner.
//!
//! Lints files in parallel using rayon. A file that cannot be read is
//! logged and skipped so the rest of the run still completes.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::diagnostics::DiagnosticSet;
use crate::error::Result;
use crate::lint::lint_content;
use crate::reader::FileReader;
use crate::rules::RuleSet;
use crate::walker::WalkedFile;

/// Diagnostics for one file.
#[derive(Debug, Clone)]
pub struct FileReport {
    pub path: PathBuf,
    pub diagnostics: DiagnosticSet,
}

/// Runs a rule set over files.
pub struct LintRunner<'r> {
    rules: &'r RuleSet,
    reader: FileReader,
}

impl<'r> LintRunner<'r> {
    pub fn new(rules: &'r RuleSet) -> Self {
        Self {
            rules,
            reader: FileReader::new(),
        }
    }

    pub fn with_reader(rules: &'r RuleSet, reader: FileReader) -> Self {
        Self { rules, reader }
    }

    /// Lint a single file.
    pub fn lint_file(&self, path: &Path) -> Result<FileReport> {
        let content = self.reader.read(path)?;
        Ok(FileReport {
            path: path.to_path_buf(),
            diagnostics: lint_content(self.rules, path, &content.bytes),
        })
    }

    /// Lint every file, returning reports sorted by path.
    ///
    /// Unreadable files are skipped with a warning.
    pub fn run(&self, files: &[WalkedFile]) -> Vec<FileReport> {
        let mut reports: Vec<FileReport> = files
            .par_iter()
            .filter_map(|file| match self.lint_file(&file.path) {
                Ok(report) => Some(report),
                Err(err) => {
                    tracing::warn!("skipping {}: {}", file.path.display(), err);
                    None
                }
            })
            .collect();
        reports.sort_by(|a, b| a.path.cmp(&b.path));
        tracing::debug!("linted {} of {} files", reports.len(), files.len());
        reports
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
