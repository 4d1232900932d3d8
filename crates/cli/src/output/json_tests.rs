// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::path::PathBuf;

use super::{JsonFormatter, create_output};
use crate::diagnostics::{Diagnostic, DiagnosticSet, Source};
use crate::runner::FileReport;
use crate::severity::Severity;

fn report(path: &str, severities: &[Severity]) -> FileReport {
    let mut diagnostics = DiagnosticSet::new();
    for (i, &severity) in severities.iter().enumerate() {
        diagnostics.add(Diagnostic {
            line: i as u32 + 1,
            col: 2,
            end_col: Some(6),
            severity,
            source: Source::Pattern,
            rule: Some("todo-marker".into()),
            message: "TODO marker found".into(),
        });
    }
    FileReport {
        path: PathBuf::from(path),
        diagnostics,
    }
}

fn render(reports: &[FileReport], passed: bool) -> serde_json::Value {
    let mut buffer = Vec::new();
    JsonFormatter::new(&mut buffer)
        .write(&create_output(reports, passed))
        .unwrap();
    serde_json::from_slice(&buffer).unwrap()
}

#[test]
fn document_has_top_level_fields() {
    let json = render(&[], true);
    assert_eq!(json["passed"], true);
    assert!(json["files"].as_array().unwrap().is_empty());
    let timestamp = json["timestamp"].as_str().unwrap();
    assert!(timestamp.contains('T') && timestamp.ends_with('Z'), "{timestamp}");
}

#[test]
fn clean_files_are_counted_but_not_listed() {
    let reports = [
        report("a.c", &[Severity::Error, Severity::Hint]),
        report("b.c", &[]),
    ];
    let json = render(&reports, false);

    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["path"], "a.c");
    assert_eq!(json["summary"]["files"], 2);
    assert_eq!(json["summary"]["errors"], 1);
    assert_eq!(json["summary"]["hints"], 1);
    assert_eq!(json["summary"]["warnings"], 0);
    assert_eq!(json["passed"], false);
}

#[test]
fn diagnostics_serialize_all_fields() {
    let json = render(&[report("a.c", &[Severity::Warning])], true);
    let d = &json["files"][0]["diagnostics"][0];
    assert_eq!(d["line"], 1);
    assert_eq!(d["col"], 2);
    assert_eq!(d["end_col"], 6);
    assert_eq!(d["severity"], "warning");
    assert_eq!(d["source"], "pattern");
    assert_eq!(d["rule"], "todo-marker");
    assert_eq!(d["message"], "TODO marker found");
}
