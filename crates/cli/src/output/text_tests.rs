// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::PathBuf;

use termcolor::Buffer;
use yare::parameterized;

use super::*;
use crate::diagnostics::{DiagnosticSet, Source};
use crate::severity::Severity;

fn diag(line: u32, col: usize, severity: Severity) -> Diagnostic {
    Diagnostic {
        line,
        col,
        end_col: None,
        severity,
        source: Source::Pattern,
        rule: Some("todo-marker".into()),
        message: "TODO marker found".into(),
    }
}

fn report(path: &str, diags: Vec<Diagnostic>) -> FileReport {
    let mut diagnostics = DiagnosticSet::new();
    for d in diags {
        diagnostics.add(d);
    }
    FileReport {
        path: PathBuf::from(path),
        diagnostics,
    }
}

fn render(options: FormatOptions, reports: &[FileReport]) -> String {
    let mut formatter = TextFormatter::new(Buffer::no_color(), options);
    for r in reports {
        formatter.write_file(r).unwrap();
    }
    let total: usize = reports.iter().map(|r| r.diagnostics.len()).sum();
    formatter.write_truncation_message(total).unwrap();
    String::from_utf8(formatter.into_inner().into_inner()).unwrap()
}

#[test]
fn result_line_format() {
    assert_eq!(
        format_result_line(&diag(3, 7, Severity::Info)),
        "   3:  7 [INFO ] todo-marker: TODO marker found"
    );
    assert_eq!(
        format_result_line(&diag(12345, 1234, Severity::Error)),
        "12345:1234 [ERROR] todo-marker: TODO marker found"
    );
}

#[test]
fn writes_header_and_results() {
    let out = render(
        FormatOptions::default(),
        &[report("src/main.c", vec![diag(1, 0, Severity::Warning), diag(2, 4, Severity::Hint)])],
    );
    assert_eq!(
        out,
        "Lint: src/main.c (2 issues)\n\
         \x20  1:  0 [WARN ] todo-marker: TODO marker found\n\
         \x20  2:  4 [HINT ] todo-marker: TODO marker found\n\
         \n"
    );
}

#[test]
fn singular_issue_header() {
    let out = render(FormatOptions::default(), &[report("a.txt", vec![diag(1, 0, Severity::Info)])]);
    assert!(out.starts_with("Lint: a.txt (1 issue)\n"), "{out}");
}

#[test]
fn clean_files_are_silent() {
    assert_eq!(render(FormatOptions::default(), &[report("a.txt", vec![])]), "");
}

#[test]
fn limit_truncates_across_files() {
    let reports = [
        report("a.txt", vec![diag(1, 0, Severity::Info), diag(2, 0, Severity::Info)]),
        report("b.txt", vec![diag(1, 0, Severity::Info)]),
    ];
    let out = render(FormatOptions::with_limit(1), &reports);
    assert_eq!(out.matches("[INFO ]").count(), 1);
    assert!(!out.contains("b.txt"), "{out}");
    assert!(out.contains("Stopped after 1 of 3 issues"), "{out}");
}

#[test]
fn no_limit_shows_everything() {
    let diags = (1..=60).map(|l| diag(l, 0, Severity::Hint)).collect();
    let out = render(FormatOptions::no_limit(), &[report("a.txt", diags)]);
    assert_eq!(out.matches("[HINT ]").count(), 60);
    assert!(!out.contains("Stopped"));
}

#[test]
fn default_limit_is_fifty() {
    let diags = (1..=60).map(|l| diag(l, 0, Severity::Hint)).collect();
    let out = render(FormatOptions::default(), &[report("a.txt", diags)]);
    assert_eq!(out.matches("[HINT ]").count(), 50);
}

#[parameterized(
    none = { 0, 0, "No issues found\n" },
    one = { 1, 1, "1 issue in 1 file\n" },
    many = { 5, 2, "5 issues in 2 files\n" },
)]
fn summary_line(total: usize, files: usize, expected: &str) {
    let mut formatter = TextFormatter::new(Buffer::no_color(), FormatOptions::default());
    formatter.write_summary(total, files).unwrap();
    let out = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
    assert_eq!(out, expected);
}

#[parameterized(
    padded = { "   3:  7 [INFO ] x", Some((3, 7)) },
    wide = { "12345:1234 [ERROR] x", Some((12345, 1234)) },
    header = { "Lint: a.txt (1 issue)", None },
    zero_line = { "   0:  1 [INFO ] x", None },
    missing_col = { "  4: [INFO ]", None },
    empty = { "", None },
)]
fn parses_locations(line: &str, expected: Option<(u32, usize)>) {
    assert_eq!(parse_location(line), expected);
}

#[test]
fn parse_location_inverts_result_line() {
    let d = diag(42, 17, Severity::Warning);
    assert_eq!(parse_location(&format_result_line(&d)), Some((42, 17)));
}
