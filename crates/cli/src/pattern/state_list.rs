// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Active-state list used during simulation.

use super::program::StateId;

/// Maximum number of active states held by one list.
pub const MAX_ACTIVE: usize = 1024;

/// Ordered set of active state ids, rebuilt on every simulation step.
///
/// Besides the ids themselves the list remembers which states the current
/// epsilon closure already visited, so a state is expanded at most once
/// per step. Clearing is O(1): visits are stamped with a generation number.
#[derive(Debug, Clone)]
pub struct StateList {
    ids: Vec<StateId>,
    visited: Vec<u32>,
    generation: u32,
    capacity: usize,
}

impl StateList {
    /// Create a list able to track states `0..state_count`.
    pub fn new(state_count: usize) -> Self {
        Self::with_capacity(state_count, MAX_ACTIVE)
    }

    pub fn with_capacity(state_count: usize, capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity.min(state_count)),
            visited: vec![0; state_count],
            generation: 1,
            capacity,
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            self.visited.fill(0);
            self.generation = 1;
        }
    }

    /// Record a visit to `id`. Returns false if it was already visited
    /// since the last [`clear`](Self::clear).
    #[inline]
    pub fn visit(&mut self, id: StateId) -> bool {
        if self.visited[id] == self.generation {
            return false;
        }
        self.visited[id] = self.generation;
        true
    }

    /// Append `id`. Returns false, dropping the state, when the list is full.
    #[inline]
    pub fn push(&mut self, id: StateId) -> bool {
        if self.ids.len() >= self.capacity {
            return false;
        }
        self.ids.push(id);
        true
    }

    pub fn as_slice(&self) -> &[StateId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
#[path = "state_list_tests.rs"]
mod tests;
