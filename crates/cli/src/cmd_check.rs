// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Check command implementation.

use std::path::{Path, PathBuf};

use snare::cli::{CheckArgs, Cli, OutputFormat};
use snare::color::resolve_color;
use snare::config;
use snare::error::{Error, ExitCode};
use snare::merge;
use snare::output::FormatOptions;
use snare::output::json::{self, JsonFormatter};
use snare::output::text::TextFormatter;
use snare::runner::{FileReport, LintRunner};
use snare::severity::Severity;
use snare::walker::{FileWalker, WalkStats, WalkerConfig};

/// Directory config discovery starts from.
fn discovery_start(cwd: &Path, paths: &[PathBuf]) -> PathBuf {
    let Some(first) = paths.first() else {
        return cwd.to_path_buf();
    };
    let path = cwd.join(first);
    if path.is_file() {
        path.parent().map(Path::to_path_buf).unwrap_or(path)
    } else {
        path
    }
}

/// Drop a leading `./` so reported paths read naturally.
fn display_path(path: PathBuf) -> PathBuf {
    match path.strip_prefix(".") {
        Ok(stripped) if !stripped.as_os_str().is_empty() => stripped.to_path_buf(),
        _ => path,
    }
}

/// Run the check command.
pub fn run(cli: &Cli, args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let (config, config_path) =
        config::resolve(cli.config.as_deref(), &discovery_start(&cwd, &args.paths))?;

    let rules = config.rule_set(!args.no_builtin, config_path.as_deref());
    tracing::debug!(
        "{} rules active, {} rejected",
        rules.len(),
        rules.rejected().len()
    );

    let walker = FileWalker::new(WalkerConfig {
        max_depth: Some(args.max_depth),
        exclude_patterns: config.project.exclude.clone(),
        ..Default::default()
    });

    let roots = if args.paths.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };

    let mut files = Vec::new();
    let mut stats = WalkStats::default();
    for root in &roots {
        if !root.exists() {
            return Err(Error::Argument(format!("path not found: {}", root.display())).into());
        }
        let (found, walk_stats) = walker.walk_collect(root)?;
        files.extend(found);
        stats.merge(&walk_stats);
    }
    for file in &mut files {
        file.path = display_path(std::mem::take(&mut file.path));
    }
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files.dedup_by(|a, b| a.path == b.path);
    tracing::debug!("walked {} files ({:?})", files.len(), stats);

    let mut reports = LintRunner::new(&rules).run(&files);

    for feed in &args.merge {
        let records = merge::load_feed(feed)?;
        tracing::debug!("merging {} records from {}", records.len(), feed.display());
        merge::merge_records(&mut reports, records);
    }

    let threshold = args.severity.unwrap_or(config.lint.severity);
    for report in &mut reports {
        report.diagnostics.retain_severity(threshold);
    }

    let passed = !failed(&reports, args.strict);
    match args.output {
        OutputFormat::Text => write_text(args, &reports)?,
        OutputFormat::Json => {
            let output = json::create_output(&reports, passed);
            JsonFormatter::new(std::io::stdout().lock()).write(&output)?;
        }
    }

    Ok(if passed {
        ExitCode::Success
    } else {
        ExitCode::CheckFailed
    })
}

/// Whether the run fails: any error, or anything at all when strict.
fn failed(reports: &[FileReport], strict: bool) -> bool {
    reports
        .iter()
        .flat_map(|r| &r.diagnostics)
        .any(|d| strict || d.severity == Severity::Error)
}

fn write_text(args: &CheckArgs, reports: &[FileReport]) -> std::io::Result<()> {
    let options = if args.no_limit {
        FormatOptions::no_limit()
    } else {
        FormatOptions::with_limit(args.limit)
    };
    let mut formatter = TextFormatter::stdout(resolve_color(), options);

    let mut total = 0;
    let mut files_with_issues = 0;
    for report in reports {
        if report.diagnostics.is_empty() {
            continue;
        }
        total += report.diagnostics.len();
        files_with_issues += 1;
        formatter.write_file(report)?;
    }
    formatter.write_truncation_message(total)?;
    formatter.write_summary(total, files_with_issues)
}
