// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use super::*;

#[test]
fn visit_reports_first_visit_only() {
    let mut list = StateList::new(4);
    assert!(list.visit(2));
    assert!(!list.visit(2));
    assert!(list.visit(3));
}

#[test]
fn clear_forgets_visits_and_ids() {
    let mut list = StateList::new(4);
    list.visit(1);
    list.push(1);
    list.clear();

    assert!(list.is_empty());
    assert!(list.visit(1));
}

#[test]
fn push_drops_states_beyond_capacity() {
    let mut list = StateList::with_capacity(8, 2);
    assert!(list.push(0));
    assert!(list.push(1));
    assert!(!list.push(2));
    assert_eq!(list.as_slice(), &[0, 1]);
}

#[test]
fn generation_wraparound_resets_marks() {
    let mut list = StateList::new(2);
    list.generation = u32::MAX;
    list.visit(0);
    list.clear();

    assert_eq!(list.generation, 1);
    assert!(list.visit(0));
}
