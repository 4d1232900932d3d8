// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use assert_cmd::Command;
use std::path::Path;

use tempfile::TempDir;

/// Returns a Command configured to run the snare binary.
///
/// Color and logging variables from the outer environment are cleared so
/// output is deterministic.
pub fn snare_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("snare"));
    cmd.env_remove("SNARE_LOG")
        .env_remove("SNARE_CONFIG")
        .env_remove("COLOR")
        .env_remove("NO_COLOR");
    cmd
}

/// A temporary project rooted at its own git root, so config discovery
/// never escapes it.
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn new(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let project = Self { dir };
        for (path, content) in files {
            project.write(path, content);
        }
        project
    }

    /// A project with a snare.toml.
    pub fn with_config(config: &str, files: &[(&str, &str)]) -> Self {
        let project = Self::new(files);
        project.write("snare.toml", config);
        project
    }

    pub fn write(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run `snare` with `args` inside the project.
    pub fn snare(&self, args: &[&str]) -> Command {
        let mut cmd = snare_cmd();
        cmd.args(args).current_dir(self.path());
        cmd
    }
}

/// Parse stdout as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}
