// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule name suggestions for config validation.

use std::path::Path;

/// Largest edit distance still considered a typo.
const MAX_DISTANCE: usize = 2;

/// Suggest a known rule name for a typo.
pub fn suggest_rule_name<'a>(unknown: &str, known: &[&'a str]) -> Option<&'a str> {
    // Empty strings can't be typos
    if unknown.is_empty() {
        return None;
    }

    // Prefix matching (require at least 3 chars to avoid false positives)
    if unknown.len() >= 3 {
        for &name in known {
            if name.starts_with(unknown) || unknown.starts_with(name) {
                return Some(name);
            }
        }
    }

    known
        .iter()
        .map(|&name| (edit_distance(unknown, name), name))
        .filter(|&(distance, _)| distance <= MAX_DISTANCE)
        .min_by_key(|&(distance, _)| distance)
        .map(|(_, name)| name)
}

/// Levenshtein distance over bytes.
fn edit_distance(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut row = vec![0; b.len() + 1];
    for (i, &ca) in a.as_bytes().iter().enumerate() {
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let substitute = prev[j] + usize::from(ca != cb);
            row[j + 1] = substitute.min(prev[j + 1] + 1).min(row[j] + 1);
        }
        std::mem::swap(&mut prev, &mut row);
    }
    prev[b.len()]
}

/// Warn about a disabled rule name that matches nothing.
pub fn warn_unknown_rule(path: Option<&Path>, name: &str, known: &[&str]) {
    let origin = path
        .map(|p| format!("{}: ", p.display()))
        .unwrap_or_default();
    match suggest_rule_name(name, known) {
        Some(suggested) => eprintln!(
            "snare: warning: {}unknown rule `{}` in lint.disable. Did you mean `{}`?",
            origin, name, suggested
        ),
        None => eprintln!(
            "snare: warning: {}unknown rule `{}` in lint.disable (see `snare rules`)",
            origin, name
        ),
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
