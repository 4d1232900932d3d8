// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for snare.toml handling.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

#[test]
fn custom_rule_is_applied() {
    let project = Project::with_config(
        r#"version = 1

[[rule]]
name = "no-printf"
pattern = "printf[ \t]*("
severity = "error"
message = "use the logger"
filetypes = ["c"]
"#,
        &[("src/main.c", "printf(\"hi\");\n")],
    );
    project
        .snare(&["check", "src"])
        .assert()
        .code(1)
        .stdout(predicates::str::contains("[ERROR] no-printf: use the logger"));
}

#[test]
fn disabled_rules_are_not_run() {
    let project = Project::with_config(
        "version = 1\n[lint]\ndisable = [\"todo-marker\"]\n",
        &[("src/a.txt", "TODO\n")],
    );
    project
        .snare(&["check", "src"])
        .assert()
        .success()
        .stdout("No issues found\n");
}

#[test]
fn unknown_disabled_rule_suggests_name() {
    let project = Project::with_config(
        "version = 1\n[lint]\ndisable = [\"todo-makrer\"]\n",
        &[("src/a.txt", "ok\n")],
    );
    project
        .snare(&["check", "src"])
        .assert()
        .success()
        .stderr(predicates::str::contains("Did you mean `todo-marker`?"));
}

#[test]
fn configured_severity_threshold() {
    let project = Project::with_config(
        "version = 1\n[lint]\nseverity = \"error\"\n",
        &[("src/a.txt", "TODO XXX\n")],
    );
    project
        .snare(&["check", "src"])
        .assert()
        .success()
        .stdout("No issues found\n");
}

#[test]
fn case_insensitive_config() {
    let project = Project::with_config(
        "version = 1\n[lint]\ncase_sensitive = false\n",
        &[("src/a.txt", "todo: later\n")],
    );
    project
        .snare(&["check", "src"])
        .assert()
        .success()
        .stdout(predicates::str::contains("todo-marker"));
}

#[test]
fn project_exclude_skips_paths() {
    let project = Project::with_config(
        "version = 1\n[project]\nexclude = [\"vendor/**\"]\n",
        &[("vendor/lib.c", "gets(x);\n"), ("app/ok.txt", "ok\n")],
    );
    project.snare(&["check"]).assert().success();
}

#[test]
fn unknown_keys_warn_but_run() {
    let project = Project::with_config("version = 1\nextra = true\n", &[("src/a.txt", "ok\n")]);
    project
        .snare(&["check", "src"])
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized field `extra`"));
}

#[test]
fn unsupported_version_is_config_error() {
    let project = Project::with_config("version = 7\n", &[]);
    project
        .snare(&["check"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("unsupported config version 7"));
}

#[test]
fn invalid_pattern_in_config_is_skipped_with_warning() {
    let project = Project::with_config(
        r#"version = 1

[lint]
builtin = false

[[rule]]
name = "broken"
pattern = "a|b"
message = "never runs"

[[rule]]
name = "works"
pattern = "needle"
message = "found it"
"#,
        &[("src/a.txt", "needle\n")],
    );
    project
        .snare(&["check", "src"])
        .env("SNARE_LOG", "warn")
        .assert()
        .success()
        .stdout(predicates::str::contains("works: found it"))
        .stderr(predicates::str::contains("rule 'broken'"));
}

#[test]
fn explicit_config_via_env() {
    let project = Project::new(&[("src/a.txt", "TODO\n")]);
    project.write("alt/custom.toml", "version = 1\n[lint]\nbuiltin = false\n");
    project
        .snare(&["check", "src"])
        .env("SNARE_CONFIG", project.path().join("alt/custom.toml"))
        .assert()
        .success()
        .stdout("No issues found\n");
}

#[test]
fn missing_explicit_config_is_an_error() {
    let project = Project::new(&[]);
    project
        .snare(&["-C", "nope.toml", "check"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("config file not found"));
}
