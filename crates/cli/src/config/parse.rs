// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parse helper functions for configuration.

use std::path::Path;

use super::{LintConfig, ProjectConfig, config_error};
use crate::error::Result;
use crate::rules::Rule;
use crate::severity::Severity;

const KNOWN_LINT_KEYS: &[&str] = &["builtin", "case_sensitive", "disable", "severity"];
const KNOWN_PROJECT_KEYS: &[&str] = &["exclude"];

/// Parse a TOML array of strings into a Vec<String>.
pub(super) fn parse_string_array(value: Option<&toml::Value>) -> Option<Vec<String>> {
    value?.as_array().map(|arr| {
        arr.iter()
            .filter_map(|v| v.as_str().map(String::from))
            .collect()
    })
}

/// Parse a TOML array of strings, returning empty vec if not found.
pub(super) fn parse_string_array_or_empty(value: Option<&toml::Value>) -> Vec<String> {
    parse_string_array(value).unwrap_or_default()
}

/// Parse a TOML boolean with a default function.
fn parse_bool_or_else<F>(value: Option<&toml::Value>, default: F) -> bool
where
    F: FnOnce() -> bool,
{
    value.and_then(|v| v.as_bool()).unwrap_or_else(default)
}

pub(super) fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "snare: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

/// Parse the `[lint]` table.
///
/// A severity that is not a known level is an error; everything else falls
/// back to its default.
pub(super) fn parse_lint_config(value: Option<&toml::Value>, path: &Path) -> Result<LintConfig> {
    let Some(toml::Value::Table(t)) = value else {
        return Ok(LintConfig::default());
    };

    for key in t.keys() {
        if !KNOWN_LINT_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("lint.{}", key));
        }
    }

    let severity = match t.get("severity") {
        Some(v) => v
            .clone()
            .try_into::<Severity>()
            .map_err(|e| config_error(format!("lint.severity: {}", e), path))?,
        None => LintConfig::default_severity(),
    };

    Ok(LintConfig {
        builtin: parse_bool_or_else(t.get("builtin"), LintConfig::default_builtin),
        case_sensitive: parse_bool_or_else(
            t.get("case_sensitive"),
            LintConfig::default_case_sensitive,
        ),
        disable: parse_string_array_or_empty(t.get("disable")),
        severity,
    })
}

/// Parse the `[[rule]]` array. Malformed rules are errors.
pub(super) fn parse_rules(value: Option<toml::Value>, path: &Path) -> Result<Vec<Rule>> {
    match value {
        None => Ok(Vec::new()),
        Some(v) => v
            .try_into::<Vec<Rule>>()
            .map_err(|e| config_error(format!("rule: {}", e), path)),
    }
}

/// Parse the `[project]` table.
pub(super) fn parse_project_config(value: Option<&toml::Value>, path: &Path) -> ProjectConfig {
    let Some(toml::Value::Table(t)) = value else {
        return ProjectConfig::default();
    };

    for key in t.keys() {
        if !KNOWN_PROJECT_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("project.{}", key));
        }
    }

    ProjectConfig {
        exclude: parse_string_array_or_empty(t.get("exclude")),
    }
}
