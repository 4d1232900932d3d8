// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compiler.
//!
//! Direct Thompson construction in a single left-to-right pass. Each
//! consuming unit appends one state; the previous fragment's dangling edge
//! is back-patched to it. There is no intermediate syntax tree.
//!
//! Grammar:
//! - `c` literal byte, `\c` escaped literal byte
//! - `.` any byte
//! - `[abc]`, `[a-z]`, `[^...]` byte classes (negation never matches `\n`)
//! - `X*` zero or more of `.`, a class, or an unescaped literal
//! - `^` as the first byte, `$` as the last byte

use super::program::{ByteClass, MAX_STATES, Program, State, StateId, StateKind, fold};

/// Error during pattern compilation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompileError {
    #[error("empty pattern")]
    Empty,

    #[error("unterminated character class at offset {offset}")]
    UnterminatedClass { offset: usize },

    #[error("empty character class at offset {offset}")]
    EmptyClass { offset: usize },

    #[error("`*` at offset {offset} has nothing to repeat")]
    StrayStar { offset: usize },

    #[error("unsupported metacharacter `{ch}` at offset {offset} (escape it with `\\`)")]
    Unsupported { ch: char, offset: usize },

    #[error("anchor `{ch}` at offset {offset} is only valid at the edge of the pattern")]
    MisplacedAnchor { ch: char, offset: usize },

    #[error("pattern ends with an unfinished escape")]
    DanglingEscape,

    #[error("pattern needs more than {limit} states")]
    TooManyStates { limit: usize },
}

/// Compile `pattern` into a program.
///
/// With `case_sensitive = false` every literal and class member is folded
/// to lower case here, and the matcher folds subject bytes the same way.
pub fn compile(pattern: &str, case_sensitive: bool) -> Result<Program, CompileError> {
    Compiler::new(pattern.as_bytes(), case_sensitive).run()
}

struct Compiler<'a> {
    pattern: &'a [u8],
    pos: usize,
    case_sensitive: bool,
    states: Vec<State>,
    /// Entry of the fragment built so far.
    start: Option<StateId>,
    /// State whose dangling edge leads to the next fragment.
    last: Option<StateId>,
}

impl<'a> Compiler<'a> {
    fn new(pattern: &'a [u8], case_sensitive: bool) -> Self {
        Self {
            pattern,
            pos: 0,
            case_sensitive,
            states: Vec::with_capacity((pattern.len() * 2 + 3).min(MAX_STATES)),
            start: None,
            last: None,
        }
    }

    fn run(mut self) -> Result<Program, CompileError> {
        if self.pattern.is_empty() {
            return Err(CompileError::Empty);
        }

        let anchored_start = self.eat(b'^');
        let mut anchored_end = false;

        while let Some(byte) = self.peek() {
            let offset = self.pos;
            match byte {
                b'\\' => {
                    self.pos += 1;
                    let escaped = self.bump().ok_or(CompileError::DanglingEscape)?;
                    // Escaped literals never take a `*`.
                    let id = self.push(StateKind::Literal(self.fold(escaped)))?;
                    self.link(id, id);
                }
                b'.' => {
                    self.pos += 1;
                    let id = self.push(StateKind::Any)?;
                    self.attach_repeatable(id)?;
                }
                b'[' => {
                    let class = self.parse_class()?;
                    let id = self.push(StateKind::Class(class))?;
                    self.attach_repeatable(id)?;
                }
                b'*' => return Err(CompileError::StrayStar { offset }),
                b'$' if offset + 1 == self.pattern.len() => {
                    self.pos += 1;
                    anchored_end = true;
                }
                b'^' | b'$' => {
                    return Err(CompileError::MisplacedAnchor {
                        ch: char::from(byte),
                        offset,
                    });
                }
                b'|' | b'+' | b'?' | b'{' | b'}' => {
                    return Err(CompileError::Unsupported {
                        ch: char::from(byte),
                        offset,
                    });
                }
                _ => {
                    self.pos += 1;
                    let id = self.push(StateKind::Literal(self.fold(byte)))?;
                    self.attach_repeatable(id)?;
                }
            }
        }

        let accept = self.push(StateKind::Match)?;
        let tail = if anchored_end {
            let eol = self.push(StateKind::LineEnd)?;
            self.states[eol].out = Some(accept);
            eol
        } else {
            accept
        };

        let mut start = match self.last {
            Some(prev) => {
                self.patch(prev, tail);
                self.start.unwrap_or(tail)
            }
            None => tail,
        };

        if anchored_start {
            let bol = self.push(StateKind::LineStart)?;
            self.states[bol].out = Some(start);
            start = bol;
        }

        tracing::trace!(
            states = self.states.len(),
            pattern = %String::from_utf8_lossy(self.pattern),
            "compiled pattern"
        );

        Ok(Program::new(self.states, start, self.case_sensitive))
    }

    /// Link a consuming state, wrapping it in a `*` loop if one follows.
    fn attach_repeatable(&mut self, id: StateId) -> Result<(), CompileError> {
        if !self.eat(b'*') {
            self.link(id, id);
            return Ok(());
        }

        // Split -> {id (loop), exit}; id -> Split.
        let split = self.push(StateKind::Split)?;
        self.states[split].out = Some(id);
        self.states[id].out = Some(split);
        self.link(split, split);
        Ok(())
    }

    /// Connect the previous fragment to `entry` and make `tail` the new
    /// dangling end.
    fn link(&mut self, entry: StateId, tail: StateId) {
        match self.last {
            Some(prev) => self.patch(prev, entry),
            None => self.start = Some(entry),
        }
        self.last = Some(tail);
    }

    /// Resolve the dangling edge of `id`. A split's loop edge is set when
    /// it is created, so only its exit can dangle.
    fn patch(&mut self, id: StateId, target: StateId) {
        let state = &mut self.states[id];
        match state.kind {
            StateKind::Split => state.out1 = Some(target),
            _ => state.out = Some(target),
        }
    }

    fn push(&mut self, kind: StateKind) -> Result<StateId, CompileError> {
        if self.states.len() >= MAX_STATES {
            return Err(CompileError::TooManyStates { limit: MAX_STATES });
        }
        self.states.push(State::new(kind));
        Ok(self.states.len() - 1)
    }

    /// Parse `[...]` starting at the opening bracket.
    fn parse_class(&mut self) -> Result<ByteClass, CompileError> {
        let open = self.pos;
        self.pos += 1;
        let negate = self.eat(b'^');

        match self.peek() {
            None => return Err(CompileError::UnterminatedClass { offset: open }),
            Some(b']') => return Err(CompileError::EmptyClass { offset: open }),
            Some(_) => {}
        }

        let mut class = ByteClass::empty();
        loop {
            let lo = match self.bump() {
                None => return Err(CompileError::UnterminatedClass { offset: open }),
                Some(b']') => break,
                Some(byte) => self.fold(byte),
            };

            match (self.peek(), self.peek_at(1)) {
                (Some(b'-'), Some(hi)) if hi != b']' => {
                    self.pos += 2;
                    let hi = self.fold(hi);
                    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
                    class.insert_range(lo, hi);
                }
                _ => class.insert(lo),
            }
        }

        if negate {
            class.negate();
            class.remove(b'\n');
        }
        Ok(class)
    }

    fn fold(&self, byte: u8) -> u8 {
        fold(byte, self.case_sensitive)
    }

    fn peek(&self) -> Option<u8> {
        self.peek_at(0)
    }

    fn peek_at(&self, ahead: usize) -> Option<u8> {
        self.pattern.get(self.pos + ahead).copied()
    }

    fn bump(&mut self) -> Option<u8> {
        let byte = self.peek()?;
        self.pos += 1;
        Some(byte)
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "compile_tests.rs"]
mod tests;
