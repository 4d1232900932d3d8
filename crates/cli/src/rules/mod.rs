// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint rules and their compiled form.
//!
//! A rule pairs a pattern with a severity and a message. Rules whose
//! pattern fails to compile are logged and set aside; they never stop the
//! remaining rules from running.

mod builtin;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pattern::{self, CompileError, Program};
use crate::severity::Severity;

pub use builtin::builtin_rules;

/// A single pattern rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Rule {
    /// Unique rule name (e.g., "todo-marker").
    pub name: String,

    /// Pattern in the engine's dialect.
    pub pattern: String,

    #[serde(default = "default_severity")]
    pub severity: Severity,

    /// Human-readable description of the finding.
    pub message: String,

    /// File extensions the rule applies to. Empty means every file.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub filetypes: Vec<String>,

    /// Per-rule override of the configured case sensitivity.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub case_sensitive: Option<bool>,
}

fn default_severity() -> Severity {
    Severity::Warning
}

impl Rule {
    /// Whether the rule applies to `path`, judged by file extension.
    ///
    /// The extension is everything after the last `.` of the file name.
    /// A file without one never matches a non-empty filetype list.
    pub fn applies_to(&self, path: &Path) -> bool {
        if self.filetypes.is_empty() {
            return true;
        }
        let Some(ext) = path
            .file_name()
            .and_then(|name| name.to_str())
            .and_then(|name| name.rsplit_once('.'))
            .map(|(_, ext)| ext)
        else {
            return false;
        };
        self.filetypes.iter().any(|ft| ft == ext)
    }
}

/// A rule together with its compiled program.
#[derive(Debug, Clone)]
pub struct CompiledRule {
    pub rule: Rule,
    pub program: Program,
}

/// A rule whose pattern did not compile.
#[derive(Debug, Clone)]
pub struct RejectedRule {
    pub rule: Rule,
    pub error: CompileError,
}

/// The compiled rule table.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    compiled: Vec<CompiledRule>,
    rejected: Vec<RejectedRule>,
}

impl RuleSet {
    /// Compile every rule. `case_sensitive` applies to rules that do not
    /// set their own.
    pub fn compile(rules: impl IntoIterator<Item = Rule>, case_sensitive: bool) -> Self {
        let mut set = RuleSet::default();
        for rule in rules {
            let sensitive = rule.case_sensitive.unwrap_or(case_sensitive);
            match pattern::compile(&rule.pattern, sensitive) {
                Ok(program) => set.compiled.push(CompiledRule { rule, program }),
                Err(error) => {
                    tracing::warn!("rule '{}': failed to compile pattern: {}", rule.name, error);
                    set.rejected.push(RejectedRule { rule, error });
                }
            }
        }
        tracing::debug!(
            compiled = set.compiled.len(),
            rejected = set.rejected.len(),
            "compiled rule table"
        );
        set
    }

    /// The built-in table, case-sensitive.
    pub fn builtin() -> Self {
        Self::compile(builtin_rules(), true)
    }

    pub fn rules(&self) -> &[CompiledRule] {
        &self.compiled
    }

    pub fn rejected(&self) -> &[RejectedRule] {
        &self.rejected
    }

    pub fn get(&self, name: &str) -> Option<&CompiledRule> {
        self.compiled.iter().find(|c| c.rule.name == name)
    }

    /// Rules that apply to `path`.
    pub fn for_path<'a>(&'a self, path: &'a Path) -> impl Iterator<Item = &'a CompiledRule> + 'a {
        self.compiled.iter().filter(move |c| c.rule.applies_to(path))
    }

    pub fn len(&self) -> usize {
        self.compiled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.compiled.is_empty()
    }
}

/// Assemble the effective rule list.
///
/// Custom rules replace built-in rules of the same name and are appended
/// otherwise. Disabled names are removed last. Returns the rules plus the
/// disabled names that matched nothing.
pub fn assemble(
    builtin: bool,
    custom: &[Rule],
    disable: &[String],
) -> (Vec<Rule>, Vec<String>) {
    let mut rules = if builtin { builtin_rules() } else { Vec::new() };

    for rule in custom {
        match rules.iter_mut().find(|r| r.name == rule.name) {
            Some(existing) => *existing = rule.clone(),
            None => rules.push(rule.clone()),
        }
    }

    let known: HashSet<&str> = rules.iter().map(|r| r.name.as_str()).collect();
    let unknown = disable
        .iter()
        .filter(|name| !known.contains(name.as_str()))
        .cloned()
        .collect();

    rules.retain(|r| !disable.contains(&r.name));
    (rules, unknown)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
