// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles snare.toml parsing with version validation and unknown key warnings.

mod parse;
mod suggest;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::discovery;
use crate::error::{Error, Result};
use crate::rules::{self, Rule, RuleSet};
use crate::severity::Severity;
use parse::{parse_lint_config, parse_project_config, parse_rules, warn_unknown_key};

pub use suggest::{suggest_rule_name, warn_unknown_rule};

/// Supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: i64,

    #[serde(default)]
    lint: Option<toml::Value>,

    #[serde(default)]
    rule: Option<toml::Value>,

    #[serde(default)]
    project: Option<toml::Value>,

    #[serde(flatten)]
    unknown: std::collections::BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Rule table settings.
    #[serde(default)]
    pub lint: LintConfig,

    /// Custom rules, one `[[rule]]` table each.
    #[serde(default, rename = "rule")]
    pub rules: Vec<Rule>,

    /// Project configuration.
    #[serde(default)]
    pub project: ProjectConfig,
}

/// `[lint]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Include the built-in rule table.
    #[serde(default = "LintConfig::default_builtin")]
    pub builtin: bool,

    /// Default case sensitivity for rules that do not set their own.
    #[serde(default = "LintConfig::default_case_sensitive")]
    pub case_sensitive: bool,

    /// Rule names to remove from the table.
    #[serde(default)]
    pub disable: Vec<String>,

    /// Lowest severity that is reported.
    #[serde(default = "LintConfig::default_severity")]
    pub severity: Severity,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            builtin: Self::default_builtin(),
            case_sensitive: Self::default_case_sensitive(),
            disable: Vec::new(),
            severity: Self::default_severity(),
        }
    }
}

impl LintConfig {
    pub(crate) fn default_builtin() -> bool {
        true
    }

    pub(crate) fn default_case_sensitive() -> bool {
        true
    }

    pub(crate) fn default_severity() -> Severity {
        Severity::Hint
    }
}

/// `[project]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Glob patterns excluded from walking.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            lint: LintConfig::default(),
            rules: Vec::new(),
            project: ProjectConfig::default(),
        }
    }
}

impl Config {
    /// Build the effective rule set.
    ///
    /// `builtin` is ANDed with `[lint] builtin`. Disabled names that match
    /// no rule are warned about with a suggestion when one is close.
    pub fn rule_set(&self, builtin: bool, path: Option<&Path>) -> RuleSet {
        let (list, unknown) = rules::assemble(
            builtin && self.lint.builtin,
            &self.rules,
            &self.lint.disable,
        );
        if !unknown.is_empty() {
            let (known, _) = rules::assemble(builtin && self.lint.builtin, &self.rules, &[]);
            let names: Vec<&str> = known.iter().map(|r| r.name.as_str()).collect();
            for name in &unknown {
                warn_unknown_rule(path, name, &names);
            }
        }
        RuleSet::compile(list, self.lint.case_sensitive)
    }
}

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "lint", "rule", "project"];

/// Resolve and load the config for a run.
///
/// An explicit path must exist; otherwise snare.toml is discovered from
/// `start` upward. Without either, defaults apply. Returns the path the
/// config came from, if any.
pub fn resolve(explicit: Option<&Path>, start: &Path) -> Result<(Config, Option<PathBuf>)> {
    match discovery::resolve_config(explicit, start)? {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let config = load_with_warnings(&path)?;
            Ok((config, Some(path)))
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok((Config::default(), None))
        }
    }
}

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse(&content, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    let content = read(path)?;
    parse_with_warnings(&content, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn config_error(message: impl Into<String>, path: &Path) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(config_error(
            format!(
                "unsupported config version {} (supported: {})\n  Upgrade snare to use this config.",
                version, SUPPORTED_VERSION
            ),
            path,
        ));
    }
    Ok(())
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error("missing required field: version", path))?;
    check_version(version, path)?;

    toml::from_str(content).map_err(|e| config_error(e.to_string(), path))
}

/// Parse config, warning on unknown keys instead of failing.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;
    if version_check.version.is_none() {
        return Err(config_error("missing required field: version", path));
    }

    let flexible: FlexibleConfig =
        toml::from_str(content).map_err(|e| config_error(e.to_string(), path))?;
    check_version(flexible.version, path)?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let lint = parse_lint_config(flexible.lint.as_ref(), path)?;
    let rules = parse_rules(flexible.rule, path)?;
    let project = parse_project_config(flexible.project.as_ref(), path);

    tracing::debug!(
        "loaded {}: {} custom rules, {} disabled",
        path.display(),
        rules.len(),
        lint.disable.len()
    );

    Ok(Config {
        version: flexible.version,
        lint,
        rules,
        project,
    })
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
