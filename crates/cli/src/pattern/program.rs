// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled program representation.
//!
//! A program is a flat arena of states. Edges are indices into the same
//! arena, so the cycles introduced by `*` need no pointers.

use std::fmt;

/// Maximum number of states a single program may hold.
pub const MAX_STATES: usize = 512;

/// Index of a state within its program.
pub type StateId = usize;

/// 256-bit byte membership set (one bit per byte value).
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteClass([u8; 32]);

impl ByteClass {
    /// A class containing no bytes.
    pub const fn empty() -> Self {
        Self([0; 32])
    }

    pub fn insert(&mut self, byte: u8) {
        self.0[usize::from(byte >> 3)] |= 1 << (byte & 7);
    }

    pub fn remove(&mut self, byte: u8) {
        self.0[usize::from(byte >> 3)] &= !(1 << (byte & 7));
    }

    /// Insert every byte in `lo..=hi`.
    pub fn insert_range(&mut self, lo: u8, hi: u8) {
        for byte in lo..=hi {
            self.insert(byte);
        }
    }

    pub fn contains(&self, byte: u8) -> bool {
        self.0[usize::from(byte >> 3)] & (1 << (byte & 7)) != 0
    }

    /// Flip membership of all 256 bytes.
    pub fn negate(&mut self) {
        for bits in &mut self.0 {
            *bits = !*bits;
        }
    }

    /// Number of member bytes.
    pub fn len(&self) -> usize {
        self.0.iter().map(|bits| bits.count_ones() as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&bits| bits == 0)
    }
}

impl fmt::Debug for ByteClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let members = (0..=u8::MAX)
            .filter(|&b| self.contains(b))
            .map(|b| b.escape_ascii().to_string());
        f.debug_set().entries(members).finish()
    }
}

/// What a state does when the simulation reaches it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateKind {
    /// Consume exactly this (already case-folded) byte.
    Literal(u8),
    /// Consume any byte.
    Any,
    /// Consume any byte in the set.
    Class(ByteClass),
    /// Epsilon fork: follow both `out` and `out1`.
    Split,
    /// Accept.
    Match,
    /// Zero-width: only passable at the true start of the line.
    LineStart,
    /// Zero-width: only passable at the end of the line.
    LineEnd,
}

/// One node of the NFA graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    pub kind: StateKind,
    /// Primary successor. `None` only for `Match`.
    pub out: Option<StateId>,
    /// Secondary successor, used only by `Split` (the exit of a `*` loop).
    pub out1: Option<StateId>,
}

impl State {
    pub(crate) fn new(kind: StateKind) -> Self {
        Self {
            kind,
            out: None,
            out1: None,
        }
    }

    /// Whether this state consumes `byte`. Zero-width states never do.
    #[inline]
    pub fn accepts(&self, byte: u8) -> bool {
        match &self.kind {
            StateKind::Literal(c) => *c == byte,
            StateKind::Any => true,
            StateKind::Class(class) => class.contains(byte),
            _ => false,
        }
    }
}

/// A fully linked NFA, immutable once compiled.
///
/// Only [`compile`](super::compile) produces programs, so every program
/// in existence is valid for matching. Programs are plain data: clone
/// them freely and share them across threads by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    states: Vec<State>,
    start: StateId,
    case_sensitive: bool,
}

impl Program {
    pub(crate) fn new(states: Vec<State>, start: StateId, case_sensitive: bool) -> Self {
        Self {
            states,
            start,
            case_sensitive,
        }
    }

    /// Entry state of the graph.
    pub fn start(&self) -> StateId {
        self.start
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Number of states in use.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether the program can only match at offset 0 of a line.
    pub fn is_anchored_start(&self) -> bool {
        self.states[self.start].kind == StateKind::LineStart
    }

    /// Fold a subject byte the same way pattern bytes were folded.
    #[inline]
    pub fn fold(&self, byte: u8) -> u8 {
        fold(byte, self.case_sensitive)
    }
}

#[inline]
pub(crate) fn fold(byte: u8, case_sensitive: bool) -> u8 {
    if case_sensitive {
        byte
    } else {
        byte.to_ascii_lowercase()
    }
}
