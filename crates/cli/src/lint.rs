// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Runs a rule table over file content.

use std::path::Path;

use crate::diagnostics::{Diagnostic, DiagnosticSet, Source};
use crate::pattern::Matcher;
use crate::rules::RuleSet;

/// Bytes inspected when deciding whether content is binary.
pub const BINARY_PROBE: usize = 8 * 1024;

/// Whether content looks binary (a NUL byte near the start).
pub fn is_binary(content: &[u8]) -> bool {
    let probe = &content[..content.len().min(BINARY_PROBE)];
    memchr::memchr(0, probe).is_some()
}

/// Iterate lines split on `\n`. A trailing newline does not start an
/// extra empty line.
pub fn lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let body = content.strip_suffix(b"\n").unwrap_or(content);
    let empty = content.is_empty();
    body.split(|&b| b == b'\n').filter(move |_| !empty)
}

/// Lint `content` as the file at `path`.
///
/// Every non-overlapping match of every applicable rule becomes one
/// diagnostic. The result is sorted by position.
pub fn lint_content(rules: &RuleSet, path: &Path, content: &[u8]) -> DiagnosticSet {
    let mut set = DiagnosticSet::new();
    if is_binary(content) {
        tracing::debug!("skipping binary file {}", path.display());
        return set;
    }

    let mut matchers: Vec<_> = rules
        .for_path(path)
        .map(|compiled| (compiled, Matcher::new(&compiled.program)))
        .collect();
    if matchers.is_empty() {
        return set;
    }

    for (index, line) in lines(content).enumerate() {
        let line_no = u32::try_from(index + 1).unwrap_or(u32::MAX);
        for (compiled, matcher) in &mut matchers {
            for m in matcher.find_iter(line) {
                set.add(Diagnostic {
                    line: line_no,
                    col: m.start,
                    end_col: Some(m.end),
                    severity: compiled.rule.severity,
                    source: Source::Pattern,
                    rule: Some(compiled.rule.name.clone()),
                    message: compiled.rule.message.clone(),
                });
            }
        }
    }

    if set.dropped() > 0 {
        tracing::warn!(
            "{}: {} diagnostics over the limit were dropped",
            path.display(),
            set.dropped()
        );
    }
    set.sort();
    set
}

#[cfg(test)]
#[path = "lint_tests.rs"]
mod tests;
