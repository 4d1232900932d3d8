// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern-rule linter built on a Thompson NFA.
//!
//! [`pattern`] compiles a small regular-expression dialect into an NFA and
//! simulates it over single lines. The remaining modules wrap it into a
//! linter: rule tables, per-file diagnostics, file walking, and output.

pub mod cli;
pub mod color;
pub mod config;
pub mod diagnostics;
pub mod discovery;
pub mod error;
pub mod lint;
pub mod merge;
pub mod output;
pub mod pattern;
pub mod reader;
pub mod rules;
pub mod runner;
pub mod severity;
pub mod walker;

pub use cli::{CheckArgs, Cli, Command, MatchArgs, OutputFormat, RulesArgs};
pub use config::Config;
pub use diagnostics::{Diagnostic, DiagnosticSet, Source};
pub use error::{Error, ExitCode, Result};
pub use lint::lint_content;
pub use pattern::{CompileError, Match, Matcher, Program, compile, search};
pub use rules::{Rule, RuleSet};
pub use runner::{FileReport, LintRunner};
pub use severity::Severity;
pub use walker::{FileWalker, WalkStats, WalkedFile, WalkerConfig};

#[cfg(test)]
pub mod test_utils;
