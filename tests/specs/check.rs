// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `snare check`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

const GETS_C: &str = "int main(void) {\n    char buf[8];\n    gets(buf);\n}\n";

#[test]
fn clean_tree_reports_no_issues() {
    let project = Project::new(&[("src/ok.txt", "nothing to see\n")]);
    project
        .snare(&["check", "src"])
        .assert()
        .success()
        .stdout("No issues found\n");
}

#[test]
fn error_finding_fails_the_run() {
    let project = Project::new(&[("src/main.c", GETS_C)]);
    project
        .snare(&["check", "src"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("Lint: src/main.c ("))
        .stdout(predicates::str::contains(
            "   3:  4 [ERROR] dangerous-gets: gets() is unsafe - use fgets() instead",
        ));
}

#[test]
fn gets_rule_only_applies_to_c_files() {
    let project = Project::new(&[("src/notes.md", "never call gets(buf)\n")]);
    project
        .snare(&["check", "src"])
        .assert()
        .success()
        .stdout(predicates::str::contains("dangerous-gets").not());
}

#[test]
fn warnings_pass_unless_strict() {
    let project = Project::new(&[("src/a.txt", "XXX revisit\n")]);
    project
        .snare(&["check", "src"])
        .assert()
        .success()
        .stdout(predicates::str::contains("[WARN ] xxx-marker: XXX marker found"))
        .stdout(predicates::str::contains("1 issue in 1 file"));

    project.snare(&["check", "src", "--strict"]).assert().code(1);
}

#[test]
fn severity_threshold_filters_output() {
    let project = Project::new(&[("src/a.txt", "TODO: XXX\n")]);
    project
        .snare(&["check", "src", "--severity", "warn"])
        .assert()
        .success()
        .stdout(predicates::str::contains("xxx-marker"))
        .stdout(predicates::str::contains("todo-marker").not());
}

#[test]
fn blank_lines_are_reported() {
    let project = Project::new(&[("src/a.txt", "one\n\ntwo\n")]);
    project
        .snare(&["check", "src"])
        .assert()
        .success()
        .stdout(predicates::str::contains("   2:  0 [HINT ] double-blank"));
}

#[test]
fn limit_truncates_output() {
    let project = Project::new(&[("src/a.txt", "TODO\nTODO\nTODO\n")]);
    project
        .snare(&["check", "src", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Stopped after 2 of 3 issues"));

    project
        .snare(&["check", "src", "--no-limit"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Stopped").not());
}

#[test]
fn json_output_structure() {
    let project = Project::new(&[("src/main.c", GETS_C), ("src/clean.txt", "ok\n")]);
    let output = project.snare(&["check", "src", "-o", "json"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json = stdout_json(&output);
    assert_eq!(json["passed"], false);
    assert_eq!(json["summary"]["files"], 2);
    assert!(json["summary"]["errors"].as_u64().unwrap() >= 1);

    let files = json["files"].as_array().unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0]["path"], "src/main.c");
    let gets = files[0]["diagnostics"]
        .as_array()
        .unwrap()
        .iter()
        .find(|d| d["rule"] == "dangerous-gets")
        .unwrap();
    assert_eq!(gets["line"], 3);
    assert_eq!(gets["col"], 4);
    assert_eq!(gets["end_col"], 9);
    assert_eq!(gets["severity"], "error");
}

#[test]
fn merges_external_feed() {
    let project = Project::new(&[("src/a.txt", "fine\n")]);
    project.write(
        "feed.json",
        r#"[{"file": "src/a.txt", "line": 1, "col": 2, "severity": 1,
             "source": "lsp", "rule": "E42", "message": "type mismatch"}]"#,
    );
    project
        .snare(&["check", "src", "--merge", "feed.json"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("   1:  2 [ERROR] [E42] type mismatch"));
}

#[test]
fn malformed_feed_is_a_config_error() {
    let project = Project::new(&[("src/a.txt", "fine\n")]);
    project.write("feed.json", "{oops");
    project
        .snare(&["check", "src", "--merge", "feed.json"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid diagnostics feed"));
}

#[test]
fn missing_path_is_an_argument_error() {
    let project = Project::new(&[]);
    project
        .snare(&["check", "does-not-exist"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("path not found"));
}

#[test]
fn no_builtin_without_custom_rules_finds_nothing() {
    let project = Project::new(&[("src/main.c", GETS_C)]);
    project
        .snare(&["check", "src", "--no-builtin"])
        .assert()
        .success()
        .stdout("No issues found\n");
}

#[test]
fn single_file_argument() {
    let project = Project::new(&[("src/main.c", GETS_C), ("src/other.txt", "TODO\n")]);
    project
        .snare(&["check", "src/main.c"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("other.txt").not());
}

#[test]
fn binary_files_are_skipped() {
    let project = Project::new(&[("src/blob.bin", "TODO\0TODO\n")]);
    project
        .snare(&["check", "src"])
        .assert()
        .success()
        .stdout("No issues found\n");
}

#[test]
fn no_color_env_disables_ansi() {
    let project = Project::new(&[("src/a.txt", "TODO\n")]);
    let output = project
        .snare(&["check", "src"])
        .env("NO_COLOR", "1")
        .env("COLOR", "1")
        .output()
        .unwrap();
    assert!(!String::from_utf8_lossy(&output.stdout).contains("\x1b["));
}

#[test]
fn color_env_forces_ansi() {
    let project = Project::new(&[("src/a.txt", "TODO\n")]);
    let output = project
        .snare(&["check", "src"])
        .env("COLOR", "1")
        .output()
        .unwrap();
    assert!(String::from_utf8_lossy(&output.stdout).contains("\x1b["));
}
