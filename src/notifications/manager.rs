// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` is the public face of the toast system. It admits new
//! notifications (evicting the oldest when the cap is reached), runs their
//! countdowns through the [`Scheduler`], reacts to hover and close requests,
//! and removes them after the exit animation.
//!
//! Every operation takes the caller's `now`. The application passes
//! `Instant::now()` (or the instant carried by a tick); tests pass synthetic
//! instants so timing is fully deterministic.

use super::countdown::Countdown;
use super::notification::{Category, Defaults, Notification, NotificationId, Options, State};
use super::scheduler::{Scheduler, TimerTask};
use super::store::{Entry, Store};
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Close button pressed.
    Dismiss(NotificationId),
    /// Pointer entered a toast.
    HoverEnter(NotificationId),
    /// Pointer left a toast.
    HoverExit(NotificationId),
    /// Periodic tick firing due timers.
    Tick(Instant),
}

/// Why a notification started its exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Expired,
    Closed,
}

/// Lifecycle hooks, collected until the host drains them with
/// [`Manager::take_events`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Admitted(NotificationId),
    /// Removed immediately to make room for a newer notification.
    Evicted(NotificationId),
    Paused(NotificationId),
    Resumed(NotificationId),
    Dismissing {
        id: NotificationId,
        reason: DismissReason,
    },
    Removed(NotificationId),
}

/// Owns every on-screen notification and its timers.
#[derive(Debug)]
pub struct Manager {
    store: Store,
    scheduler: Scheduler,
    defaults: Defaults,
    /// Whether the host can currently draw the overlay.
    surface_attached: bool,
    /// Whether the overlay container currently exists.
    overlay_mounted: bool,
    events: Vec<Event>,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new()
    }
}

impl Manager {
    /// Creates an empty manager with the built-in defaults and an attached surface.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(Defaults::default())
    }

    #[must_use]
    pub fn with_defaults(defaults: Defaults) -> Self {
        Self {
            store: Store::new(),
            scheduler: Scheduler::new(),
            defaults,
            surface_attached: true,
            overlay_mounted: false,
            events: Vec::new(),
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    // -------------------------------------------------------------------------
    // Mount point
    // -------------------------------------------------------------------------

    /// Marks the host surface as able to draw toasts.
    pub fn attach_surface(&mut self) {
        self.surface_attached = true;
    }

    /// The host can no longer draw: everything on screen is dropped and
    /// further requests become no-ops until [`Manager::attach_surface`].
    pub fn detach_surface(&mut self) {
        self.dismiss_all();
        self.surface_attached = false;
    }

    /// Whether the overlay container currently exists.
    #[must_use]
    pub fn has_overlay(&self) -> bool {
        self.overlay_mounted
    }

    // -------------------------------------------------------------------------
    // Admission
    // -------------------------------------------------------------------------

    /// Admits a notification and starts its countdown.
    ///
    /// Evicts the oldest live notification first if the cap is reached.
    /// Without an attached surface nothing is admitted, but the id is still
    /// returned; later requests with it are no-ops.
    pub fn push(&mut self, notification: Notification, now: Instant) -> NotificationId {
        let id = notification.id();
        if !self.surface_attached {
            tracing::debug!(%id, "no surface attached, dropping notification");
            return id;
        }

        let behavior = notification.options().resolve(&self.defaults);
        let admission = self
            .store
            .admit(Entry::new(notification, behavior), behavior.max_concurrent);

        for mut evicted in admission.evicted {
            if let Some(timer) = evicted.take_timer() {
                self.scheduler.cancel(timer);
            }
            tracing::debug!(id = %evicted.id(), "evicted to respect cap");
            self.events.push(Event::Evicted(evicted.id()));
        }

        self.overlay_mounted = true;
        self.activate(id, now);
        self.events.push(Event::Admitted(id));
        id
    }

    /// Builds and admits a notification in one call.
    pub fn notify(
        &mut self,
        category: Category,
        title: impl Into<String>,
        body: impl Into<String>,
        options: Options,
        now: Instant,
    ) -> NotificationId {
        let notification = Notification::new(category, title, body, now).with_options(options);
        self.push(notification, now)
    }

    pub fn success(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        now: Instant,
    ) -> NotificationId {
        self.notify(Category::Success, title, body, Options::default(), now)
    }

    pub fn error(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        now: Instant,
    ) -> NotificationId {
        self.notify(Category::Error, title, body, Options::default(), now)
    }

    pub fn warning(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        now: Instant,
    ) -> NotificationId {
        self.notify(Category::Warning, title, body, Options::default(), now)
    }

    pub fn info(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
        now: Instant,
    ) -> NotificationId {
        self.notify(Category::Info, title, body, Options::default(), now)
    }

    /// Admits a notification with a caller-defined category tag.
    pub fn custom(
        &mut self,
        tag: &str,
        title: impl Into<String>,
        body: impl Into<String>,
        options: Options,
        now: Instant,
    ) -> NotificationId {
        self.notify(Category::from_tag(tag), title, body, options, now)
    }

    /// Scheduled -> Active, arming the expiry timer for timed notifications.
    fn activate(&mut self, id: NotificationId, now: Instant) {
        let Some(entry) = self.store.get_mut(id) else {
            return;
        };
        entry.set_state(State::Active);

        if let Some(lifetime) = entry.behavior().lifetime {
            let countdown = Countdown::start(lifetime, now);
            let timer = self
                .scheduler
                .schedule(now + lifetime, TimerTask::Expire(id));
            entry.set_countdown(countdown);
            entry.set_timer(Some(timer));
        }
    }

    // -------------------------------------------------------------------------
    // Pause / resume
    // -------------------------------------------------------------------------

    /// Freezes the countdown of an active, timed, hover-pausable notification.
    ///
    /// A countdown that already ran out is dismissed as expired instead, even
    /// if no tick has observed it yet.
    ///
    /// Returns `true` if the notification was paused.
    pub fn pause(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(entry) = self.store.get_mut(id) else {
            return false;
        };
        if entry.state() != State::Active || !entry.behavior().pause_on_hover {
            return false;
        }
        let Some(countdown) = entry.countdown_mut() else {
            return false;
        };
        if countdown.is_expired(now) {
            let deadline = countdown.deadline().unwrap_or(now);
            self.begin_dismiss(id, deadline, DismissReason::Expired);
            return false;
        }

        countdown.pause(now);
        entry.set_state(State::Paused);
        if let Some(timer) = entry.take_timer() {
            self.scheduler.cancel(timer);
        }
        self.events.push(Event::Paused(id));
        true
    }

    /// Restarts the countdown of a paused notification with its remaining time.
    ///
    /// Returns `true` if the notification was resumed.
    pub fn resume(&mut self, id: NotificationId, now: Instant) -> bool {
        let Some(entry) = self.store.get_mut(id) else {
            return false;
        };
        if entry.state() != State::Paused {
            return false;
        }
        let Some(countdown) = entry.countdown_mut() else {
            return false;
        };

        countdown.resume(now);
        let deadline = countdown.deadline().unwrap_or(now);
        let timer = self.scheduler.schedule(deadline, TimerTask::Expire(id));
        entry.set_timer(Some(timer));
        entry.set_state(State::Active);
        self.events.push(Event::Resumed(id));
        true
    }

    // -------------------------------------------------------------------------
    // Dismissal
    // -------------------------------------------------------------------------

    /// Starts the exit animation of a visible notification (close button).
    ///
    /// Returns `false` if the notification is absent or already dismissing.
    pub fn dismiss(&mut self, id: NotificationId, now: Instant) -> bool {
        let is_live = self
            .store
            .get(id)
            .is_some_and(|entry| entry.state().is_live());
        if is_live {
            self.begin_dismiss(id, now, DismissReason::Closed);
        }
        is_live
    }

    /// Removes every notification immediately, skipping the exit animation,
    /// and cancels all pending timers.
    pub fn dismiss_all(&mut self) {
        for mut entry in self.store.drain() {
            if let Some(timer) = entry.take_timer() {
                self.scheduler.cancel(timer);
            }
            self.events.push(Event::Removed(entry.id()));
        }
        self.scheduler.clear();
        self.teardown_overlay_if_empty();
    }

    fn begin_dismiss(&mut self, id: NotificationId, at: Instant, reason: DismissReason) {
        let exit_delay = self.defaults.exit_delay;
        let Some(entry) = self.store.get_mut(id) else {
            return;
        };
        if let Some(timer) = entry.take_timer() {
            self.scheduler.cancel(timer);
        }
        if let Some(countdown) = entry.countdown_mut() {
            countdown.pause(at);
        }
        entry.set_state(State::Dismissing);
        entry.set_dismissing_since(at);
        self.events.push(Event::Dismissing { id, reason });
        tracing::debug!(%id, ?reason, "dismissing notification");

        if exit_delay.is_zero() {
            self.finish_removal(id);
        } else {
            let timer = self
                .scheduler
                .schedule(at + exit_delay, TimerTask::Remove(id));
            entry.set_timer(Some(timer));
        }
    }

    fn finish_removal(&mut self, id: NotificationId) {
        if let Some(mut entry) = self.store.remove(id) {
            if let Some(timer) = entry.take_timer() {
                self.scheduler.cancel(timer);
            }
            self.events.push(Event::Removed(id));
        }
        self.teardown_overlay_if_empty();
    }

    fn teardown_overlay_if_empty(&mut self) {
        if self.store.is_empty() && std::mem::take(&mut self.overlay_mounted) {
            tracing::trace!("overlay torn down");
        }
    }

    // -------------------------------------------------------------------------
    // Event loop
    // -------------------------------------------------------------------------

    /// Fires every timer due at or before `now`.
    ///
    /// A task only acts if its owner still holds the same handle; anything
    /// else is stale and ignored. Tasks armed while processing (an exit delay
    /// that already elapsed) fire in the same call.
    pub fn tick(&mut self, now: Instant) {
        loop {
            let due = self.scheduler.take_due(now);
            if due.is_empty() {
                break;
            }

            for fired in due {
                let id = fired.task.target();
                let Some(entry) = self.store.get_mut(id) else {
                    tracing::trace!(%id, "timer fired for removed notification");
                    continue;
                };
                if entry.timer() != Some(fired.handle) {
                    tracing::trace!(%id, "stale timer ignored");
                    continue;
                }
                entry.set_timer(None);

                match (fired.task, entry.state()) {
                    (TimerTask::Expire(_), State::Active) => {
                        self.begin_dismiss(id, fired.deadline, DismissReason::Expired);
                    }
                    (TimerTask::Remove(_), State::Dismissing) => self.finish_removal(id),
                    (task, state) => {
                        tracing::trace!(%id, ?task, ?state, "timer does not apply in current state");
                    }
                }
            }
        }
    }

    /// Routes a UI message.
    pub fn handle_message(&mut self, message: Message, now: Instant) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(id, now);
            }
            Message::HoverEnter(id) => {
                self.pause(id, now);
            }
            Message::HoverExit(id) => {
                self.resume(id, now);
            }
            Message::Tick(at) => self.tick(at),
        }
    }

    /// Drains the lifecycle events recorded since the last call.
    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Notifications currently drawn (including those dismissing), oldest first.
    pub fn visible(&self) -> impl Iterator<Item = &Entry> {
        self.store.iter()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Entry> {
        self.store.get(id)
    }

    /// Current state, or `None` once the notification left the store.
    #[must_use]
    pub fn state(&self, id: NotificationId) -> Option<State> {
        self.store.get(id).map(Entry::state)
    }

    /// Time left before auto-dismiss.
    #[must_use]
    pub fn remaining(&self, id: NotificationId, now: Instant) -> Option<Duration> {
        self.store.get(id).and_then(|entry| entry.remaining(now))
    }

    /// Number of notifications on screen, including dismissing ones.
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Number of Active or Paused notifications.
    #[must_use]
    pub fn live_count(&self) -> usize {
        self.store.live_count()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.store.is_empty()
    }

    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    /// When the next timer fires, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.scheduler.next_deadline()
    }
}
