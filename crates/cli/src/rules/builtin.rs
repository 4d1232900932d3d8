// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in rule table.

use super::Rule;
use crate::severity::Severity;

const C_FAMILY: &str = "c,h,cpp,hpp";
const JS_FAMILY: &str = "js,ts,jsx,tsx";

/// (name, pattern, severity, message, filetypes)
type Entry = (&'static str, &'static str, Severity, &'static str, &'static str);

const BUILTIN: &[Entry] = &[
    // Style
    ("trailing-whitespace", "[ \t][ \t]*$", Severity::Warning, "Trailing whitespace", ""),
    (
        "line-too-long-80",
        "^................................................................................",
        Severity::Info,
        "Line exceeds 80 characters",
        "",
    ),
    ("tab-after-space", " \t", Severity::Warning, "Tab after space (mixed indentation)", ""),
    ("space-after-tab", "\t ", Severity::Warning, "Space after tab (mixed indentation)", ""),
    ("multiple-spaces", "   ", Severity::Hint, "Three or more consecutive spaces", ""),
    ("trailing-comma", ",$", Severity::Hint, "Trailing comma at end of line", ""),
    ("space-before-paren", " (", Severity::Hint, "Space before opening parenthesis", C_FAMILY),
    ("no-space-after-comma", ",[^ \t\n]", Severity::Hint, "Missing space after comma", ""),
    ("double-blank", "^$", Severity::Hint, "Blank line (check for multiple)", ""),
    // Documentation markers
    ("todo-marker", "TODO", Severity::Info, "TODO marker found", ""),
    ("fixme-marker", "FIXME", Severity::Info, "FIXME marker found", ""),
    ("xxx-marker", "XXX", Severity::Warning, "XXX marker found (needs attention)", ""),
    ("hack-marker", "HACK", Severity::Warning, "HACK marker found", ""),
    ("bug-marker", "BUG", Severity::Warning, "BUG marker found", ""),
    ("warn-marker", "WARNING", Severity::Info, "WARNING marker in comment", ""),
    ("deprecated-marker", "DEPRECATED", Severity::Warning, "DEPRECATED marker found", ""),
    ("noqa-marker", "noqa", Severity::Hint, "Lint suppression marker", ""),
    // C: dangerous functions
    ("dangerous-gets", "gets[ \t]*(", Severity::Error, "gets() is unsafe - use fgets() instead", C_FAMILY),
    (
        "dangerous-strcpy",
        "strcpy[ \t]*(",
        Severity::Warning,
        "strcpy() can overflow - use strncpy() or strlcpy()",
        C_FAMILY,
    ),
    (
        "dangerous-strcat",
        "strcat[ \t]*(",
        Severity::Warning,
        "strcat() can overflow - use strncat() or strlcat()",
        C_FAMILY,
    ),
    ("dangerous-sprintf", "sprintf[ \t]*(", Severity::Warning, "sprintf() can overflow - use snprintf()", C_FAMILY),
    (
        "dangerous-vsprintf",
        "vsprintf[ \t]*(",
        Severity::Warning,
        "vsprintf() can overflow - use vsnprintf()",
        C_FAMILY,
    ),
    ("dangerous-scanf", "scanf[ \t]*(", Severity::Warning, "scanf() without width limit can overflow", C_FAMILY),
    (
        "dangerous-sscanf",
        "sscanf[ \t]*(",
        Severity::Hint,
        "sscanf() - ensure format specifiers have width limits",
        C_FAMILY,
    ),
    (
        "dangerous-system",
        "system[ \t]*(",
        Severity::Warning,
        "system() can be exploited - validate input carefully",
        C_FAMILY,
    ),
    (
        "dangerous-popen",
        "popen[ \t]*(",
        Severity::Warning,
        "popen() can be exploited - validate input carefully",
        C_FAMILY,
    ),
    ("dangerous-mktemp", "mktemp[ \t]*(", Severity::Warning, "mktemp() is insecure - use mkstemp()", C_FAMILY),
    ("dangerous-tmpnam", "tmpnam[ \t]*(", Severity::Warning, "tmpnam() is insecure - use mkstemp()", C_FAMILY),
    // Hardcoded secrets
    ("hardcoded-password", "password[ \t]*=[ \t]*\"", Severity::Warning, "Possible hardcoded password", ""),
    ("hardcoded-passwd", "passwd[ \t]*=[ \t]*\"", Severity::Warning, "Possible hardcoded password", ""),
    ("hardcoded-secret", "secret[ \t]*=[ \t]*\"", Severity::Warning, "Possible hardcoded secret", ""),
    ("hardcoded-apikey", "api_key[ \t]*=[ \t]*\"", Severity::Warning, "Possible hardcoded API key", ""),
    ("hardcoded-token", "token[ \t]*=[ \t]*\"", Severity::Warning, "Possible hardcoded token", ""),
    ("private-key-begin", "-----BEGIN", Severity::Error, "Private key material detected", ""),
    ("aws-key-pattern", "AKIA", Severity::Warning, "Possible AWS access key (starts with AKIA)", ""),
    // Bug patterns
    ("double-semicolon", ";;", Severity::Warning, "Double semicolon - possible typo", ""),
    (
        "empty-if-body",
        ");[ \t]*$",
        Severity::Hint,
        "Statement ends with ); - check for empty if body",
        C_FAMILY,
    ),
    (
        "self-assign-pattern",
        "= *[a-z_][a-z_0-9]* *;",
        Severity::Hint,
        "Simple assignment - verify not self-assignment",
        "",
    ),
    (
        "null-literal-cmp",
        "== NULL",
        Severity::Hint,
        "Consider using !ptr instead of ptr == NULL",
        C_FAMILY,
    ),
    (
        "null-literal-cmp2",
        "!= NULL",
        Severity::Hint,
        "Consider using ptr instead of ptr != NULL",
        C_FAMILY,
    ),
    ("zero-division-risk", "/ 0", Severity::Error, "Division by zero", ""),
    // Debug leftovers
    ("console-log", "console.log", Severity::Info, "console.log() left in code", JS_FAMILY),
    ("console-debug", "console.debug", Severity::Info, "console.debug() left in code", JS_FAMILY),
    ("debugger-stmt", "debugger", Severity::Warning, "debugger statement left in code", JS_FAMILY),
    ("python-breakpoint", "breakpoint()", Severity::Warning, "breakpoint() left in code", "py"),
    ("python-pdb", "pdb.set_trace", Severity::Warning, "pdb.set_trace() left in code", "py"),
    (
        "debug-printf",
        "DEBUG",
        Severity::Hint,
        "DEBUG marker - verify intended for production",
        C_FAMILY,
    ),
    // Misc
    (
        "magic-number-large",
        "= [0-9][0-9][0-9][0-9]",
        Severity::Hint,
        "Magic number (4+ digits) - consider named constant",
        "",
    ),
    ("goto-statement", "goto ", Severity::Info, "goto statement found", C_FAMILY),
    (
        "infinite-loop",
        "while[ \t]*(1)",
        Severity::Info,
        "Infinite loop - ensure exit condition exists",
        C_FAMILY,
    ),
];

/// The default rule table, in declaration order.
pub fn builtin_rules() -> Vec<Rule> {
    BUILTIN
        .iter()
        .map(|&(name, pattern, severity, message, filetypes)| Rule {
            name: name.to_string(),
            pattern: pattern.to_string(),
            severity,
            message: message.to_string(),
            filetypes: filetypes
                .split(',')
                .filter(|ext| !ext.is_empty())
                .map(String::from)
                .collect(),
            case_sensitive: None,
        })
        .collect()
}
