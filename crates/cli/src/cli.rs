// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::DEFAULT_LIMIT;
use crate::severity::Severity;

/// Pattern-rule linter built on a Thompson NFA
#[derive(Parser)]
#[command(name = "snare")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "SNARE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Lint files and directories
    Check(CheckArgs),
    /// List the effective rule table
    Rules(RulesArgs),
    /// Run a single pattern over a file or stdin
    Match(MatchArgs),
}

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(clap::Args)]
pub struct CheckArgs {
    /// Files or directories to lint (default: current directory)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Maximum diagnostics to display
    #[arg(long, default_value_t = DEFAULT_LIMIT, value_name = "N")]
    pub limit: usize,

    /// Show all diagnostics (no limit)
    #[arg(long)]
    pub no_limit: bool,

    /// Maximum directory depth to traverse
    #[arg(long, default_value_t = crate::walker::DEFAULT_MAX_DEPTH, value_name = "N")]
    pub max_depth: usize,

    /// Lowest severity to report (default from config, else hint)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub severity: Option<Severity>,

    /// Merge diagnostics from an external JSON feed
    #[arg(long, value_name = "FILE")]
    pub merge: Vec<PathBuf>,

    /// Skip the built-in rule table
    #[arg(long)]
    pub no_builtin: bool,

    /// Fail on any reported diagnostic, not only errors
    #[arg(long)]
    pub strict: bool,
}

#[derive(clap::Args)]
pub struct RulesArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct MatchArgs {
    /// Pattern to run
    #[arg(allow_hyphen_values = true)]
    pub pattern: String,

    /// File to search (default: stdin)
    pub file: Option<PathBuf>,

    /// Match case-insensitively
    #[arg(short = 'i', long)]
    pub ignore_case: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
