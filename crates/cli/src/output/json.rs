// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::diagnostics::{Diagnostic, SeverityCounts};
use crate::runner::FileReport;

/// Complete JSON document for one run.
#[derive(Debug, Serialize)]
pub struct LintOutput<'a> {
    pub timestamp: String,
    pub passed: bool,
    pub files: Vec<FileOutput<'a>>,
    pub summary: Summary,
}

/// One file with at least one diagnostic.
#[derive(Debug, Serialize)]
pub struct FileOutput<'a> {
    pub path: &'a Path,
    pub diagnostics: &'a [Diagnostic],
}

/// Totals across the run.
#[derive(Debug, Serialize)]
pub struct Summary {
    #[serde(flatten)]
    pub counts: SeverityCounts,
    /// Files linted, including clean ones.
    pub files: usize,
}

/// Build the output document with the current timestamp.
pub fn create_output(reports: &[FileReport], passed: bool) -> LintOutput<'_> {
    let mut counts = SeverityCounts::default();
    for report in reports {
        counts.merge(&report.diagnostics.counts());
    }
    LintOutput {
        timestamp: Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        passed,
        files: reports
            .iter()
            .filter(|r| !r.diagnostics.is_empty())
            .map(|r| FileOutput {
                path: &r.path,
                diagnostics: r.diagnostics.as_slice(),
            })
            .collect(),
        summary: Summary {
            counts,
            files: reports.len(),
        },
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write any serializable document, pretty-printed.
    pub fn write<T: Serialize>(&mut self, output: &T) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
