// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Merging diagnostics produced by external tools.
//!
//! A feed is a JSON array of records such as a language server or
//! tree-sitter query runner would emit. Each feed replaces whatever its
//! source contributed before.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::diagnostics::{Diagnostic, Source};
use crate::error::{Error, Result};
use crate::runner::FileReport;
use crate::severity::Severity;

/// One record of an external feed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExternalRecord {
    pub file: PathBuf,
    pub line: u32,
    pub col: usize,
    #[serde(default)]
    pub end_col: Option<usize>,
    /// LSP-style severity, 1 (error) to 4 (hint).
    pub severity: i64,
    pub source: String,
    #[serde(default)]
    pub rule: Option<String>,
    pub message: String,
}

impl ExternalRecord {
    fn into_diagnostic(self) -> (PathBuf, Diagnostic) {
        let diag = Diagnostic {
            line: self.line,
            col: self.col,
            end_col: self.end_col,
            severity: Severity::from_lsp(self.severity),
            source: Source::from(self.source),
            rule: self.rule,
            message: self.message,
        };
        (self.file, diag)
    }
}

/// Parse a feed from JSON text. `origin` names the feed in errors.
pub fn parse_feed(content: &str, origin: &Path) -> Result<Vec<ExternalRecord>> {
    let records: Vec<ExternalRecord> =
        serde_json::from_str(content).map_err(|e| Error::Config {
            message: format!("invalid diagnostics feed: {}", e),
            path: Some(origin.to_path_buf()),
        })?;

    if let Some(bad) = records.iter().find(|r| r.line == 0) {
        return Err(Error::Config {
            message: format!(
                "invalid diagnostics feed: {}: line numbers start at 1",
                bad.file.display()
            ),
            path: Some(origin.to_path_buf()),
        });
    }
    Ok(records)
}

/// Load a feed from a file.
pub fn load_feed(path: &Path) -> Result<Vec<ExternalRecord>> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_feed(&content, path)
}

/// Merge records into `reports`.
///
/// For every file a record names, each source's previous diagnostics are
/// replaced by the new ones. Records for files without a report get a new
/// report; the result stays sorted by path.
pub fn merge_records(reports: &mut Vec<FileReport>, records: Vec<ExternalRecord>) {
    let mut by_file: BTreeMap<PathBuf, BTreeMap<Source, Vec<Diagnostic>>> = BTreeMap::new();
    for record in records {
        let (file, diag) = record.into_diagnostic();
        by_file
            .entry(file)
            .or_default()
            .entry(diag.source.clone())
            .or_default()
            .push(diag);
    }

    for (file, sources) in by_file {
        let index = match reports.iter().position(|r| same_file(&r.path, &file)) {
            Some(index) => index,
            None => {
                reports.push(FileReport {
                    path: file,
                    diagnostics: Default::default(),
                });
                reports.len() - 1
            }
        };
        let report = &mut reports[index];
        for (source, diags) in sources {
            tracing::debug!(
                "merging {} {} diagnostics into {}",
                diags.len(),
                source,
                report.path.display()
            );
            report.diagnostics.replace_source(&source, diags);
        }
    }
    reports.sort_by(|a, b| a.path.cmp(&b.path));
}

/// Paths refer to the same file, ignoring a leading `./`.
fn same_file(a: &Path, b: &Path) -> bool {
    let strip = |p: &Path| p.strip_prefix(".").unwrap_or(p).to_path_buf();
    strip(a) == strip(b)
}

#[cfg(test)]
#[path = "merge_tests.rs"]
mod tests;
