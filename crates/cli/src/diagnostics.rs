// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file diagnostic storage, ordering, and navigation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::severity::Severity;

/// Maximum diagnostics kept for one file.
pub const MAX_DIAGNOSTICS: usize = 1024;

/// Producer of a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Source {
    /// The built-in pattern engine.
    Pattern,
    /// An external feed such as a language server or tree-sitter queries.
    External(String),
}

impl Source {
    pub fn as_str(&self) -> &str {
        match self {
            Source::Pattern => "pattern",
            Source::External(name) => name,
        }
    }
}

impl From<String> for Source {
    fn from(name: String) -> Self {
        if name == "pattern" {
            Source::Pattern
        } else {
            Source::External(name)
        }
    }
}

impl From<Source> for String {
    fn from(source: Source) -> Self {
        source.as_str().to_string()
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finding at a position in a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 1-based line number.
    pub line: u32,
    /// 0-based byte column.
    pub col: usize,
    /// 0-based byte column one past the end, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_col: Option<usize>,
    pub severity: Severity,
    pub source: Source,
    /// Name of the rule that produced the finding, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    pub message: String,
}

impl Diagnostic {
    /// Message as shown in result lines.
    ///
    /// Pattern findings read `rule: message`; external findings with a
    /// rule read `[rule] message`.
    pub fn display_message(&self) -> String {
        match (&self.source, &self.rule) {
            (Source::Pattern, Some(rule)) => format!("{}: {}", rule, self.message),
            (Source::External(_), Some(rule)) => format!("[{}] {}", rule, self.message),
            (_, None) => self.message.clone(),
        }
    }
}

/// Counts by severity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityCounts {
    pub errors: usize,
    pub warnings: usize,
    pub info: usize,
    pub hints: usize,
}

impl SeverityCounts {
    pub fn add(&mut self, severity: Severity) {
        match severity {
            Severity::Error => self.errors += 1,
            Severity::Warning => self.warnings += 1,
            Severity::Info => self.info += 1,
            Severity::Hint => self.hints += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.errors + self.warnings + self.info + self.hints
    }

    pub fn merge(&mut self, other: &SeverityCounts) {
        self.errors += other.errors;
        self.warnings += other.warnings;
        self.info += other.info;
        self.hints += other.hints;
    }
}

/// Diagnostics for one file, with a navigation cursor.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticSet {
    diags: Vec<Diagnostic>,
    cursor: usize,
    dropped: usize,
}

impl DiagnosticSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a diagnostic. Beyond [`MAX_DIAGNOSTICS`] it is dropped and
    /// counted instead.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        if self.diags.len() >= MAX_DIAGNOSTICS {
            self.dropped += 1;
            return false;
        }
        self.diags.push(diag);
        true
    }

    /// Remove everything and reset the cursor.
    pub fn clear(&mut self) {
        self.diags.clear();
        self.cursor = 0;
        self.dropped = 0;
    }

    /// Remove diagnostics from one source, keeping the relative order of
    /// the rest.
    pub fn clear_source(&mut self, source: &Source) {
        self.diags.retain(|d| &d.source != source);
        self.clamp_cursor();
    }

    /// Replace all diagnostics from `source` with `diags`, then sort.
    pub fn replace_source(&mut self, source: &Source, diags: impl IntoIterator<Item = Diagnostic>) {
        self.clear_source(source);
        for diag in diags {
            self.add(diag);
        }
        self.sort();
    }

    /// Stable sort by line, then column.
    pub fn sort(&mut self) {
        self.diags.sort_by_key(|d| (d.line, d.col));
    }

    /// Keep only diagnostics at least as severe as `threshold`.
    pub fn retain_severity(&mut self, threshold: Severity) {
        self.diags.retain(|d| d.severity.meets(threshold));
        self.clamp_cursor();
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.diags
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diags.iter()
    }

    pub fn len(&self) -> usize {
        self.diags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diags.is_empty()
    }

    /// Diagnostics dropped because the set was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn counts(&self) -> SeverityCounts {
        let mut counts = SeverityCounts::default();
        for d in &self.diags {
            counts.add(d.severity);
        }
        counts
    }

    /// Diagnostic under the cursor.
    pub fn current(&self) -> Option<&Diagnostic> {
        self.diags.get(self.cursor)
    }

    /// Move to the next diagnostic, wrapping to the first.
    pub fn goto_next(&mut self) -> Option<&Diagnostic> {
        if self.diags.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.diags.len();
        self.current()
    }

    /// Move to the previous diagnostic, wrapping to the last.
    pub fn goto_prev(&mut self) -> Option<&Diagnostic> {
        if self.diags.is_empty() {
            return None;
        }
        self.cursor = self
            .cursor
            .checked_sub(1)
            .unwrap_or(self.diags.len() - 1);
        self.current()
    }

    fn clamp_cursor(&mut self) {
        if self.cursor >= self.diags.len() {
            self.cursor = self.diags.len().saturating_sub(1);
        }
    }
}

impl<'a> IntoIterator for &'a DiagnosticSet {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.diags.iter()
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
