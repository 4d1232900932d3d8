// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! Lint: src/main.c (2 issues)
//!    3:  4 [ERROR] dangerous-gets: gets() is unsafe - use fgets() instead
//!   12:  0 [INFO ] todo-marker: TODO marker found
//! ```

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::color::scheme;
use crate::diagnostics::Diagnostic;
use crate::runner::FileReport;

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format one result line without color.
pub fn format_result_line(d: &Diagnostic) -> String {
    format!(
        "{:>4}:{:>3} [{}] {}",
        d.line,
        d.col,
        d.severity.label(),
        d.display_message()
    )
}

/// Recover `(line, col)` from a result line.
///
/// Accepts leading spaces, digits, `:`, spaces, digits. The line number
/// must be positive.
pub fn parse_location(result_line: &str) -> Option<(u32, usize)> {
    let rest = result_line.trim_start_matches(' ');
    let (line, rest) = split_digits(rest)?;
    let rest = rest.strip_prefix(':')?.trim_start_matches(' ');
    let (col, _) = split_digits(rest)?;

    let line: u32 = line.parse().ok()?;
    if line == 0 {
        return None;
    }
    Some((line, col.parse().ok()?))
}

fn split_digits(s: &str) -> Option<(&str, &str)> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    Some(s.split_at(end))
}

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
    shown: usize,
    truncated: bool,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self {
            out,
            options,
            shown: 0,
            truncated: false,
        }
    }

    /// Write one file's diagnostics. Files without any are silent.
    ///
    /// Returns true once the limit has been reached.
    pub fn write_file(&mut self, report: &FileReport) -> std::io::Result<bool> {
        let count = report.diagnostics.len();
        if count == 0 || self.truncated {
            return Ok(self.truncated);
        }

        self.out.set_color(&scheme::header())?;
        write!(self.out, "Lint: ")?;
        self.out.set_color(&scheme::path())?;
        write!(self.out, "{}", report.path.display())?;
        self.out.reset()?;
        writeln!(self.out, " ({} issue{})", count, plural(count))?;

        for d in &report.diagnostics {
            if let Some(limit) = self.options.limit
                && self.shown >= limit
            {
                self.truncated = true;
                break;
            }
            self.write_diagnostic(d)?;
            self.shown += 1;
        }
        writeln!(self.out)?;

        Ok(self.truncated)
    }

    fn write_diagnostic(&mut self, d: &Diagnostic) -> std::io::Result<()> {
        self.out.set_color(&scheme::line_number())?;
        write!(self.out, "{:>4}", d.line)?;
        self.out.reset()?;
        write!(self.out, ":{:>3} [", d.col)?;
        self.out.set_color(&scheme::severity(d.severity))?;
        write!(self.out, "{}", d.severity.label())?;
        self.out.reset()?;
        writeln!(self.out, "] {}", d.display_message())
    }

    /// Write the truncation notice if the limit cut output short.
    pub fn write_truncation_message(&mut self, total: usize) -> std::io::Result<()> {
        if let Some(limit) = self.options.limit
            && self.truncated
            && total > limit
        {
            writeln!(
                self.out,
                "Stopped after {} of {} issues. Use --no-limit to see all.",
                limit, total
            )?;
        }
        Ok(())
    }

    /// Write the summary line.
    pub fn write_summary(&mut self, total: usize, files: usize) -> std::io::Result<()> {
        if total == 0 {
            self.out.set_color(&scheme::clean())?;
            write!(self.out, "No issues found")?;
            self.out.reset()?;
            return writeln!(self.out);
        }
        writeln!(
            self.out,
            "{} issue{} in {} file{}",
            total,
            plural(total),
            files,
            plural(files)
        )
    }

    pub fn was_truncated(&self) -> bool {
        self.truncated
    }

    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
