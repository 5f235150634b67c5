// SPDX-License-Identifier: MPL-2.0
//! Busy state for buttons that start a request.
//!
//! A busy button is disabled and draws a spinner, optionally next to a
//! replacement label. Views are rebuilt from state, so resetting a button
//! restores its own label and enabled state.

use std::collections::hash_map::{self, HashMap};
use std::fmt;
use std::hash::Hash;

/// Buttons currently busy, keyed by `K`, each with an optional label.
#[derive(Debug, Clone)]
pub struct BusyButtons<K> {
    busy: HashMap<K, Option<String>>,
}

impl<K> Default for BusyButtons<K> {
    fn default() -> Self {
        Self {
            busy: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash + fmt::Debug> BusyButtons<K> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `key` busy. `None` shows only the spinner.
    ///
    /// Returns `false` if it was already busy; the first label is kept.
    pub fn start(&mut self, key: K, label: Option<String>) -> bool {
        match self.busy.entry(key) {
            hash_map::Entry::Occupied(_) => false,
            hash_map::Entry::Vacant(slot) => {
                slot.insert(label);
                tracing::trace!(?key, "button busy");
                true
            }
        }
    }

    /// Returns `key` to its idle state. Returns `false` if it was not busy.
    pub fn reset(&mut self, key: K) -> bool {
        self.busy.remove(&key).is_some()
    }

    #[must_use]
    pub fn is_busy(&self, key: K) -> bool {
        self.busy.contains_key(&key)
    }

    /// Replacement label of a busy button.
    #[must_use]
    pub fn label(&self, key: K) -> Option<&str> {
        self.busy.get(&key).and_then(Option::as_deref)
    }

    /// Whether no button is busy.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.busy.is_empty()
    }
}
