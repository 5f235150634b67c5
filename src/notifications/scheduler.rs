// SPDX-License-Identifier: MPL-2.0
//! Deadline queue of cancellable timer tasks.
//!
//! Every pending timer is an explicit [`TimerHandle`]. The owner stores the
//! handle next to the state it guards and cancels it when that state goes
//! away. The event loop calls [`Scheduler::take_due`] on each tick; tasks come
//! back in deadline order, ties broken by scheduling order.

use super::notification::NotificationId;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerTask {
    /// Countdown of an active notification reached zero.
    Expire(NotificationId),
    /// Exit animation of a dismissing notification finished.
    Remove(NotificationId),
}

impl TimerTask {
    #[must_use]
    pub fn target(&self) -> NotificationId {
        match self {
            TimerTask::Expire(id) | TimerTask::Remove(id) => *id,
        }
    }
}

/// A task handed back by [`Scheduler::take_due`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired {
    pub handle: TimerHandle,
    pub task: TimerTask,
    pub deadline: Instant,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    next_handle: u64,
    queue: BTreeMap<(Instant, TimerHandle), TimerTask>,
    deadlines: HashMap<TimerHandle, Instant>,
}

impl Scheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `task` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, task: TimerTask) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        self.queue.insert((deadline, handle), task);
        self.deadlines.insert(handle, deadline);
        handle
    }

    /// Cancels a pending task. Returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle) {
            Some(deadline) => self.queue.remove(&(deadline, handle)).is_some(),
            None => false,
        }
    }

    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle)
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.keys().next().map(|(deadline, _)| *deadline)
    }

    /// Removes and returns every task whose deadline is at or before `now`.
    pub fn take_due(&mut self, now: Instant) -> Vec<Fired> {
        let mut fired = Vec::new();
        while let Some(entry) = self.queue.first_entry() {
            let (deadline, handle) = *entry.key();
            if deadline > now {
                break;
            }
            let task = entry.remove();
            self.deadlines.remove(&handle);
            fired.push(Fired {
                handle,
                task,
                deadline,
            });
        }
        fired
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Cancels everything.
    pub fn clear(&mut self) {
        self.queue.clear();
        self.deadlines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn due_tasks_come_back_in_deadline_order() {
        let t0 = Instant::now();
        let (a, b, c) = (NotificationId::new(), NotificationId::new(), NotificationId::new());
        let mut scheduler = Scheduler::new();

        scheduler.schedule(t0 + ms(300), TimerTask::Expire(a));
        scheduler.schedule(t0 + ms(100), TimerTask::Remove(b));
        scheduler.schedule(t0 + ms(900), TimerTask::Expire(c));

        let fired: Vec<_> = scheduler
            .take_due(t0 + ms(500))
            .into_iter()
            .map(|f| f.task)
            .collect();

        assert_eq!(fired, vec![TimerTask::Remove(b), TimerTask::Expire(a)]);
        assert_eq!(scheduler.len(), 1);
        assert_eq!(scheduler.next_deadline(), Some(t0 + ms(900)));
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let t0 = Instant::now();
        let (a, b) = (NotificationId::new(), NotificationId::new());
        let mut scheduler = Scheduler::new();

        scheduler.schedule(t0 + ms(100), TimerTask::Expire(a));
        scheduler.schedule(t0 + ms(100), TimerTask::Expire(b));

        let fired: Vec<_> = scheduler
            .take_due(t0 + ms(100))
            .into_iter()
            .map(|f| f.task.target())
            .collect();
        assert_eq!(fired, vec![a, b]);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let t0 = Instant::now();
        let id = NotificationId::new();
        let mut scheduler = Scheduler::new();

        let handle = scheduler.schedule(t0 + ms(100), TimerTask::Expire(id));
        assert!(scheduler.is_pending(handle));
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));

        assert!(scheduler.take_due(t0 + ms(10_000)).is_empty());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn fired_handle_is_no_longer_pending() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(t0, TimerTask::Remove(NotificationId::new()));

        let fired = scheduler.take_due(t0);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].handle, handle);
        assert!(!scheduler.is_pending(handle));
        assert!(!scheduler.cancel(handle));
    }

    #[test]
    fn clear_drops_everything() {
        let t0 = Instant::now();
        let mut scheduler = Scheduler::new();
        for offset in 0..10 {
            scheduler.schedule(t0 + ms(offset), TimerTask::Expire(NotificationId::new()));
        }
        scheduler.clear();
        assert!(scheduler.take_due(t0 + ms(100)).is_empty());
        assert_eq!(scheduler.next_deadline(), None);
    }
}
