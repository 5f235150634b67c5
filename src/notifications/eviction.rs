// SPDX-License-Identifier: MPL-2.0
//! Oldest-first eviction under the concurrency cap.

use super::notification::NotificationId;
use super::store::Entry;

/// Picks the notification to sacrifice so one more can be admitted.
///
/// Returns the earliest-admitted live (Active or Paused) entry when the number
/// of live entries is at or above `cap`, otherwise `None`. `entries` must be in
/// admission order. Dismissing entries never count and are never chosen.
pub fn select_victim<'a>(
    entries: impl IntoIterator<Item = &'a Entry>,
    cap: usize,
) -> Option<NotificationId> {
    let mut live = entries.into_iter().filter(|entry| entry.state().is_live());
    let oldest = live.next()?;
    let live_count = 1 + live.count();
    (live_count >= cap).then(|| oldest.id())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::notification::{Category, Defaults, Notification, State};
    use std::time::Instant;

    fn entry_in(state: State) -> Entry {
        let notification = Notification::new(Category::Info, "t", "b", Instant::now());
        let behavior = notification.options().resolve(&Defaults::default());
        let mut entry = Entry::new(notification, behavior);
        entry.set_state(state);
        entry
    }

    #[test]
    fn no_victim_below_cap() {
        let entries = vec![entry_in(State::Active), entry_in(State::Paused)];
        assert_eq!(select_victim(&entries, 3), None);
    }

    #[test]
    fn oldest_live_entry_is_chosen_at_cap() {
        let entries = vec![
            entry_in(State::Active),
            entry_in(State::Paused),
            entry_in(State::Active),
        ];
        assert_eq!(select_victim(&entries, 3), Some(entries[0].id()));
    }

    #[test]
    fn dismissing_entries_are_skipped() {
        let entries = vec![
            entry_in(State::Dismissing),
            entry_in(State::Paused),
            entry_in(State::Active),
        ];
        assert_eq!(select_victim(&entries, 2), Some(entries[1].id()));
        assert_eq!(select_victim(&entries, 3), None);
    }

    #[test]
    fn empty_store_has_no_victim() {
        let entries: Vec<Entry> = Vec::new();
        assert_eq!(select_victim(&entries, 1), None);
    }
}
