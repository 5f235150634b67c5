// SPDX-License-Identifier: MPL-2.0
//! Insertion-ordered collection of non-removed notifications.
//!
//! The store owns the per-notification runtime state ([`Entry`]) and enforces
//! the concurrency cap at admission. It never touches timers: evicted entries
//! are handed back so the caller can cancel whatever they still hold.

use super::countdown::Countdown;
use super::eviction;
use super::notification::{Behavior, Notification, NotificationId, State};
use super::scheduler::TimerHandle;
use std::collections::VecDeque;
use std::time::Instant;

/// A notification plus its lifecycle bookkeeping.
#[derive(Debug, Clone)]
pub struct Entry {
    notification: Notification,
    behavior: Behavior,
    state: State,
    countdown: Option<Countdown>,
    timer: Option<TimerHandle>,
    dismissing_since: Option<Instant>,
}

impl Entry {
    /// Wraps a notification in the Scheduled state.
    #[must_use]
    pub fn new(notification: Notification, behavior: Behavior) -> Self {
        Self {
            notification,
            behavior,
            state: State::Scheduled,
            countdown: None,
            timer: None,
            dismissing_since: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.notification.id()
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn behavior(&self) -> &Behavior {
        &self.behavior
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    pub(crate) fn set_state(&mut self, state: State) {
        self.state = state;
    }

    #[must_use]
    pub fn countdown(&self) -> Option<&Countdown> {
        self.countdown.as_ref()
    }

    pub(crate) fn countdown_mut(&mut self) -> Option<&mut Countdown> {
        self.countdown.as_mut()
    }

    pub(crate) fn set_countdown(&mut self, countdown: Countdown) {
        self.countdown = Some(countdown);
    }

    /// Pending timer owned by this entry, if any.
    #[must_use]
    pub fn timer(&self) -> Option<TimerHandle> {
        self.timer
    }

    pub(crate) fn set_timer(&mut self, timer: Option<TimerHandle>) {
        self.timer = timer;
    }

    pub(crate) fn take_timer(&mut self) -> Option<TimerHandle> {
        self.timer.take()
    }

    #[must_use]
    pub fn dismissing_since(&self) -> Option<Instant> {
        self.dismissing_since
    }

    pub(crate) fn set_dismissing_since(&mut self, at: Instant) {
        self.dismissing_since = Some(at);
    }

    /// Time left before auto-dismiss. `None` for persistent notifications.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Option<std::time::Duration> {
        self.countdown.map(|countdown| countdown.remaining(now))
    }

    /// Fraction of the progress strip still filled, if one is shown.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        if !self.behavior.progress_indicator {
            return None;
        }
        self.countdown
            .map(|countdown| match self.state {
                State::Dismissing | State::Removed => 0.0,
                _ => countdown.fraction_left(now),
            })
    }
}

/// Result of [`Store::admit`].
#[derive(Debug)]
pub struct Admission {
    pub id: NotificationId,
    /// Entries removed to make room, oldest first. Already in `Removed`.
    pub evicted: Vec<Entry>,
}

#[derive(Debug, Default)]
pub struct Store {
    entries: VecDeque<Entry>,
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `entry` after evicting oldest live entries until it fits under `cap`.
    pub fn admit(&mut self, entry: Entry, cap: usize) -> Admission {
        let mut evicted = Vec::new();
        while let Some(victim) = eviction::select_victim(self.entries.iter(), cap) {
            match self.remove(victim) {
                Some(removed) => evicted.push(removed),
                None => break,
            }
        }

        let id = entry.id();
        self.entries.push_back(entry);
        Admission { id, evicted }
    }

    /// Detaches a notification and marks it `Removed`. `None` if absent.
    pub fn remove(&mut self, id: NotificationId) -> Option<Entry> {
        let position = self.entries.iter().position(|entry| entry.id() == id)?;
        let mut entry = self.entries.remove(position)?;
        entry.set_state(State::Removed);
        Some(entry)
    }

    /// Detaches every notification, in admission order.
    pub fn drain(&mut self) -> Vec<Entry> {
        self.entries
            .drain(..)
            .map(|mut entry| {
                entry.set_state(State::Removed);
                entry
            })
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn get_mut(&mut self, id: NotificationId) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    /// Entries in admission order.
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Number of non-removed notifications, including those still dismissing.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Number of notifications counting against the cap.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.state().is_live())
            .count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::notification::{Category, Defaults};

    fn live_entry(title: &str) -> Entry {
        let notification = Notification::new(Category::Success, title, "", Instant::now());
        let behavior = notification.options().resolve(&Defaults::default());
        let mut entry = Entry::new(notification, behavior);
        entry.set_state(State::Active);
        entry
    }

    #[test]
    fn new_store_is_empty() {
        let store = Store::new();
        assert_eq!(store.count(), 0);
        assert_eq!(store.live_count(), 0);
        assert!(store.is_empty());
    }

    #[test]
    fn admit_keeps_admission_order() {
        let mut store = Store::new();
        let ids: Vec<_> = ["a", "b", "c"]
            .into_iter()
            .map(|title| store.admit(live_entry(title), 5).id)
            .collect();

        let stored: Vec<_> = store.iter().map(Entry::id).collect();
        assert_eq!(stored, ids);
    }

    #[test]
    fn admit_at_cap_evicts_oldest_live() {
        let mut store = Store::new();
        let first = store.admit(live_entry("first"), 2).id;
        let second = store.admit(live_entry("second"), 2).id;

        let admission = store.admit(live_entry("third"), 2);

        assert_eq!(admission.evicted.len(), 1);
        assert_eq!(admission.evicted[0].id(), first);
        assert_eq!(admission.evicted[0].state(), State::Removed);
        assert!(store.get(first).is_none());
        assert!(store.get(second).is_some());
        assert_eq!(store.live_count(), 2);
    }

    #[test]
    fn lowering_cap_evicts_until_new_entry_fits() {
        let mut store = Store::new();
        for title in ["a", "b", "c", "d"] {
            store.admit(live_entry(title), 5);
        }

        let admission = store.admit(live_entry("e"), 2);

        assert_eq!(admission.evicted.len(), 3);
        assert_eq!(store.live_count(), 2);
    }

    #[test]
    fn remove_is_idempotent() {
        let mut store = Store::new();
        let id = store.admit(live_entry("only"), 5).id;

        let removed = store.remove(id).expect("entry should be present");
        assert_eq!(removed.state(), State::Removed);
        assert!(store.remove(id).is_none());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn dismissing_entries_count_but_are_not_live() {
        let mut store = Store::new();
        let id = store.admit(live_entry("closing"), 5).id;
        store
            .get_mut(id)
            .expect("entry should be present")
            .set_state(State::Dismissing);

        assert_eq!(store.count(), 1);
        assert_eq!(store.live_count(), 0);
    }

    #[test]
    fn drain_marks_everything_removed() {
        let mut store = Store::new();
        store.admit(live_entry("a"), 5);
        store.admit(live_entry("b"), 5);

        let drained = store.drain();
        assert_eq!(drained.len(), 2);
        assert!(drained.iter().all(|entry| entry.state() == State::Removed));
        assert!(store.is_empty());
    }
}
