// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match command implementation.

use std::io::Write;
use std::path::Path;

use snare::cli::MatchArgs;
use snare::error::{Error, ExitCode};
use snare::lint::lines;
use snare::pattern::{self, Matcher};
use snare::reader::FileReader;

/// Run the match command.
pub fn run(args: &MatchArgs) -> anyhow::Result<ExitCode> {
    let program = pattern::compile(&args.pattern, !args.ignore_case).map_err(|source| {
        Error::Pattern {
            pattern: args.pattern.clone(),
            source,
        }
    })?;

    let reader = FileReader::new();
    let content = match &args.file {
        Some(path) => reader.read(path)?,
        None => reader.read_from(std::io::stdin().lock(), Path::new("<stdin>"))?,
    };

    let mut matcher = Matcher::new(&program);
    let mut out = std::io::stdout().lock();
    let mut found = 0usize;
    for (index, line) in lines(&content.bytes).enumerate() {
        let text = String::from_utf8_lossy(line);
        for m in matcher.find_iter(line) {
            writeln!(out, "{}:{}-{}: {}", index + 1, m.start, m.end, text)?;
            found += 1;
        }
    }
    tracing::debug!("{} matches", found);

    Ok(if found > 0 {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    })
}
