// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `snare match`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn prints_every_match_with_span() {
    let project = Project::new(&[("notes.txt", "TODO one\nnothing\nTODO TODO\n")]);
    project
        .snare(&["match", "TODO", "notes.txt"])
        .assert()
        .success()
        .stdout("1:0-4: TODO one\n3:0-4: TODO TODO\n3:5-9: TODO TODO\n");
}

#[test]
fn reads_stdin_without_file() {
    snare_cmd()
        .args(["match", "gets[ \t]*("])
        .write_stdin("x = gets (buf);\n")
        .assert()
        .success()
        .stdout("1:4-10: x = gets (buf);\n");
}

#[test]
fn star_takes_the_longest_run() {
    snare_cmd()
        .args(["match", "a*"])
        .write_stdin("aaa\n")
        .assert()
        .success()
        .stdout(predicates::str::starts_with("1:0-3: aaa\n"));
}

#[test]
fn anchors_match_empty_lines() {
    snare_cmd()
        .args(["match", "^$"])
        .write_stdin("a\n\nb\n")
        .assert()
        .success()
        .stdout("2:0-0: \n");
}

#[test]
fn ignore_case_flag() {
    snare_cmd()
        .args(["match", "-i", "fixme"])
        .write_stdin("// FixMe\n")
        .assert()
        .success()
        .stdout("1:3-8: // FixMe\n");
}

#[test]
fn no_match_exits_one() {
    snare_cmd()
        .args(["match", "needle"])
        .write_stdin("haystack\n")
        .assert()
        .code(1)
        .stdout(predicates::str::is_empty());
}

#[test]
fn invalid_pattern_exits_two() {
    snare_cmd()
        .args(["match", "a|b"])
        .write_stdin("a\n")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid pattern `a|b`"));
}

#[test]
fn missing_file_is_reported() {
    let project = Project::new(&[]);
    project
        .snare(&["match", "x", "missing.txt"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("missing.txt"));
}
