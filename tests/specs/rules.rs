// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `snare rules`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn lists_builtin_rules() {
    let project = Project::new(&[]);
    project
        .snare(&["rules"])
        .assert()
        .success()
        .stdout(predicates::str::contains("dangerous-gets"))
        .stdout(predicates::str::contains("(0 rejected)"));
}

#[test]
fn marks_rejected_rules() {
    let project = Project::with_config(
        "version = 1\n[[rule]]\nname = \"bad\"\npattern = \"x{2}\"\nmessage = \"m\"\n",
        &[],
    );
    project
        .snare(&["rules"])
        .assert()
        .success()
        .stdout(predicates::str::is_match(r"bad +REJECTED +unsupported metacharacter `\{`").unwrap())
        .stdout(predicates::str::contains("(1 rejected)"));
}

#[test]
fn json_lists_rules_with_errors() {
    let project = Project::with_config(
        "version = 1\n[lint]\nbuiltin = false\n\
         [[rule]]\nname = \"ok\"\npattern = \"ok\"\nmessage = \"m\"\n\
         [[rule]]\nname = \"bad\"\npattern = \"*\"\nmessage = \"m\"\n",
        &[],
    );
    let output = project.snare(&["rules", "-o", "json"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let rules = json.as_array().unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0]["name"], "ok");
    assert_eq!(rules[0]["severity"], "warning");
    assert!(rules[0].get("error").is_none());
    assert_eq!(rules[1]["name"], "bad");
    assert!(rules[1]["error"].as_str().is_some());
}
