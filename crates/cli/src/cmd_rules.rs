// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules command implementation.

use std::io::Write;

use serde::Serialize;

use snare::cli::{Cli, OutputFormat, RulesArgs};
use snare::config;
use snare::error::ExitCode;
use snare::output::json::JsonFormatter;
use snare::rules::{Rule, RuleSet};

#[derive(Serialize)]
struct RuleEntry<'a> {
    #[serde(flatten)]
    rule: &'a Rule,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn entries(rules: &RuleSet) -> Vec<RuleEntry<'_>> {
    let compiled = rules.rules().iter().map(|c| RuleEntry {
        rule: &c.rule,
        error: None,
    });
    let rejected = rules.rejected().iter().map(|r| RuleEntry {
        rule: &r.rule,
        error: Some(r.error.to_string()),
    });
    compiled.chain(rejected).collect()
}

/// Run the rules command.
pub fn run(cli: &Cli, args: &RulesArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let (config, config_path) = config::resolve(cli.config.as_deref(), &cwd)?;
    let rules = config.rule_set(true, config_path.as_deref());

    let mut out = std::io::stdout().lock();
    match args.output {
        OutputFormat::Json => JsonFormatter::new(out).write(&entries(&rules))?,
        OutputFormat::Text => {
            for entry in entries(&rules) {
                let rule = entry.rule;
                match &entry.error {
                    Some(error) => writeln!(out, "{:<24} REJECTED  {}", rule.name, error)?,
                    None => {
                        write!(out, "{:<24} {:<9} {}", rule.name, rule.severity, rule.pattern)?;
                        if !rule.filetypes.is_empty() {
                            write!(out, "  [{}]", rule.filetypes.join(","))?;
                        }
                        writeln!(out)?;
                    }
                }
            }
            writeln!(
                out,
                "{} rules ({} rejected)",
                rules.len() + rules.rejected().len(),
                rules.rejected().len()
            )?;
        }
    }

    Ok(ExitCode::Success)
}
