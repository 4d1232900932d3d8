// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel-state simulation of a compiled program.
//!
//! For each candidate start offset the matcher keeps a frontier of active
//! states, advancing all of them one byte at a time. There is no
//! backtracking: work per start offset is bounded by line length times
//! program size.

use std::mem;
use std::ops::Range;

use serde::Serialize;

use super::program::{Program, StateId, StateKind};
use super::state_list::StateList;

/// A match within one line, in byte offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Match {
    /// Offset of the first matched byte.
    pub start: usize,
    /// Offset one past the last matched byte.
    pub end: usize,
}

impl Match {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Zero-width matches come from anchors and `*`.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }
}

/// Which end to report once a start offset has produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Keep simulating until the frontier dies; report the last accepting
    /// position.
    #[default]
    Longest,
    /// Stop at the first accepting position.
    Earliest,
}

/// Per-call scratch space for searching one program.
///
/// The program is only read. A matcher is cheap to build and must not be
/// shared between threads; each thread creates its own.
pub struct Matcher<'p> {
    program: &'p Program,
    policy: MatchPolicy,
    current: StateList,
    next: StateList,
}

impl<'p> Matcher<'p> {
    pub fn new(program: &'p Program) -> Self {
        Self::with_policy(program, MatchPolicy::default())
    }

    pub fn with_policy(program: &'p Program, policy: MatchPolicy) -> Self {
        Self {
            program,
            policy,
            current: StateList::new(program.len()),
            next: StateList::new(program.len()),
        }
    }

    pub fn program(&self) -> &'p Program {
        self.program
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }

    /// Find the leftmost match in `line`.
    pub fn find(&mut self, line: &[u8]) -> Option<Match> {
        self.find_at(line, 0)
    }

    /// Find the leftmost match starting at or after `offset`.
    ///
    /// `^` still anchors to offset 0 of `line`, not to `offset`.
    pub fn find_at(&mut self, line: &[u8], offset: usize) -> Option<Match> {
        if offset > line.len() {
            return None;
        }
        if self.program.is_anchored_start() && offset > 0 {
            return None;
        }

        for start in offset..=line.len() {
            if let Some(end) = self.run_from(line, start) {
                return Some(Match { start, end });
            }
            if self.program.is_anchored_start() {
                break;
            }
        }
        None
    }

    /// Iterate over every non-overlapping match in `line`.
    ///
    /// After a match the scan resumes at its end, or one byte past its
    /// start when the match was empty.
    pub fn find_iter<'m, 'l>(&'m mut self, line: &'l [u8]) -> FindIter<'m, 'p, 'l> {
        FindIter {
            matcher: self,
            line,
            offset: 0,
        }
    }

    /// Simulate from a single start offset. Returns the end of the match
    /// chosen by the policy.
    fn run_from(&mut self, line: &[u8], start: usize) -> Option<usize> {
        let program = self.program;
        let policy = self.policy;
        let Self { current, next, .. } = self;
        let len = line.len();

        current.clear();
        add_state(program, current, program.start(), start == 0, start == len);

        // Zero-length match before consuming anything (`^$`, `a*`, ...).
        let mut best = None;
        if has_match(program, current) {
            if policy == MatchPolicy::Earliest {
                return Some(start);
            }
            best = Some(start);
        }

        for pos in start..len {
            let byte = program.fold(line[pos]);
            let at_eol = pos + 1 == len;

            next.clear();
            step(program, current, byte, next, at_eol);
            mem::swap(current, next);

            if has_match(program, current) {
                if policy == MatchPolicy::Earliest {
                    return Some(pos + 1);
                }
                best = Some(pos + 1);
            }
            if current.is_empty() {
                break;
            }
        }

        best
    }
}

/// Iterator returned by [`Matcher::find_iter`].
pub struct FindIter<'m, 'p, 'l> {
    matcher: &'m mut Matcher<'p>,
    line: &'l [u8],
    offset: usize,
}

impl Iterator for FindIter<'_, '_, '_> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        let found = self.matcher.find_at(self.line, self.offset)?;
        self.offset = if found.is_empty() {
            found.start + 1
        } else {
            found.end
        };
        Some(found)
    }
}

/// Add `id` and everything reachable from it through epsilon edges.
///
/// Splits fork, anchors pass only when their condition holds, and
/// consuming states and the match state land in the list.
fn add_state(program: &Program, list: &mut StateList, mut id: StateId, at_bol: bool, at_eol: bool) {
    loop {
        if !list.visit(id) {
            return;
        }
        let state = program.state(id);
        match state.kind {
            StateKind::Split => {
                if let Some(exit) = state.out1 {
                    add_state(program, list, exit, at_bol, at_eol);
                }
            }
            StateKind::LineStart if !at_bol => return,
            StateKind::LineEnd if !at_eol => return,
            StateKind::LineStart | StateKind::LineEnd => {}
            _ => {
                if !list.push(id) {
                    tracing::trace!(state = id, "active list full, dropping state");
                }
                return;
            }
        }
        match state.out {
            Some(out) => id = out,
            None => return,
        }
    }
}

/// Advance every state in `current` over `byte`, collecting the closures
/// of their successors into `next`.
fn step(program: &Program, current: &StateList, byte: u8, next: &mut StateList, at_eol: bool) {
    for &id in current.as_slice() {
        let state = program.state(id);
        if state.accepts(byte)
            && let Some(out) = state.out
        {
            add_state(program, next, out, false, at_eol);
        }
    }
}

fn has_match(program: &Program, list: &StateList) -> bool {
    list.as_slice()
        .iter()
        .any(|&id| program.state(id).kind == StateKind::Match)
}

/// Leftmost match in `line`, extended as far as possible at that start.
pub fn search(program: &Program, line: &[u8]) -> Option<Match> {
    Matcher::new(program).find(line)
}

/// Leftmost match in `line`, ending as early as possible at that start.
pub fn search_earliest(program: &Program, line: &[u8]) -> Option<Match> {
    Matcher::with_policy(program, MatchPolicy::Earliest).find(line)
}

/// All non-overlapping matches in `line`.
pub fn find_all(program: &Program, line: &[u8]) -> Vec<Match> {
    Matcher::new(program).find_iter(line).collect()
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
