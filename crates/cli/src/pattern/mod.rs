// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Thompson NFA pattern engine.
//!
//! Patterns are compiled straight into a flat state graph
//! ([`compile`]) and simulated without backtracking ([`Matcher`]).
//! The dialect is deliberately small: literals, `.`, byte classes, `*`
//! on a single unit, and line anchors. Matching is byte-oriented and
//! confined to a single line.

pub mod compile;
pub mod matcher;
pub mod program;
mod state_list;

pub use compile::{CompileError, compile};
pub use matcher::{FindIter, Match, MatchPolicy, Matcher, find_all, search, search_earliest};
pub use program::{ByteClass, MAX_STATES, Program, State, StateId, StateKind};
pub use state_list::{MAX_ACTIVE, StateList};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
