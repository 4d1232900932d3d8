// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection order:
//! 1. NO_COLOR env var → no color
//! 2. COLOR env var → use color
//! 3. otherwise color only when stdout is a TTY

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// Resolve color choice from environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` set to any value
/// (including empty) disables color.
pub fn resolve_color() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for lint output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    use crate::severity::Severity;

    /// Bold `Lint:` header.
    pub fn header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Cyan file path.
    pub fn path() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow line number.
    pub fn line_number() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Severity tag color.
    pub fn severity(severity: Severity) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match severity {
            Severity::Error => spec.set_fg(Some(Color::Red)).set_bold(true),
            Severity::Warning => spec.set_fg(Some(Color::Yellow)).set_bold(true),
            Severity::Info => spec.set_fg(Some(Color::Blue)),
            Severity::Hint => spec.set_dimmed(true),
        };
        spec
    }

    /// Green summary when nothing was found.
    pub fn clean() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
