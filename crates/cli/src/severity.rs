// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic severity levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic, ordered most severe first.
///
/// Discriminants follow the LSP numbering (1 = error .. 4 = hint).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error = 1,
    #[serde(alias = "warn")]
    #[value(alias = "warn")]
    Warning = 2,
    Info = 3,
    Hint = 4,
}

impl Severity {
    /// Map an LSP-style number. Unknown values are treated as info.
    pub fn from_lsp(value: i64) -> Self {
        match value {
            1 => Severity::Error,
            2 => Severity::Warning,
            4 => Severity::Hint,
            _ => Severity::Info,
        }
    }

    /// Whether this severity is at least as severe as `threshold`.
    pub fn meets(self, threshold: Severity) -> bool {
        self <= threshold
    }

    /// Fixed-width tag for result lines.
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN ",
            Severity::Info => "INFO ",
            Severity::Hint => "HINT ",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
            Severity::Hint => "hint",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
