// SPDX-License-Identifier: MPL-2.0
//! Pausable countdown for a single notification.
//!
//! All bookkeeping is wall-clock `Duration` arithmetic. Pausing subtracts the
//! time spent running since the last (re)start; resuming records a new start.
//! Because `Duration` is exact to the nanosecond, any number of pause/resume
//! cycles leaves `remaining == total - time_spent_running`.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    total: Duration,
    /// Remaining time as of `running_since` (or frozen while paused).
    remaining: Duration,
    /// `Some` while running.
    running_since: Option<Instant>,
}

impl Countdown {
    /// Starts a countdown of `total` at `now`.
    #[must_use]
    pub fn start(total: Duration, now: Instant) -> Self {
        Self {
            total,
            remaining: total,
            running_since: Some(now),
        }
    }

    /// Freezes the countdown. No-op if already paused.
    pub fn pause(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            let elapsed = now.saturating_duration_since(since);
            self.remaining = self.remaining.saturating_sub(elapsed);
        }
    }

    /// Restarts the countdown with whatever time is left. No-op if running.
    pub fn resume(&mut self, now: Instant) {
        if self.running_since.is_none() {
            self.running_since = Some(now);
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.running_since.is_none()
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.total
    }

    /// Time left at `now`.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.running_since {
            Some(since) => self
                .remaining
                .saturating_sub(now.saturating_duration_since(since)),
            None => self.remaining,
        }
    }

    /// Instant at which the countdown reaches zero, if running.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.running_since.map(|since| since + self.remaining)
    }

    #[must_use]
    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    /// Fraction of the lifetime still left, from 1.0 down to 0.0.
    #[must_use]
    pub fn fraction_left(&self, now: Instant) -> f32 {
        if self.total.is_zero() {
            return 0.0;
        }
        (self.remaining(now).as_secs_f64() / self.total.as_secs_f64()).clamp(0.0, 1.0) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn running_countdown_decreases() {
        let t0 = Instant::now();
        let countdown = Countdown::start(ms(4000), t0);

        assert_eq!(countdown.remaining(t0), ms(4000));
        assert_eq!(countdown.remaining(t0 + ms(1500)), ms(2500));
        assert_eq!(countdown.deadline(), Some(t0 + ms(4000)));
        assert!(countdown.is_expired(t0 + ms(4000)));
    }

    #[test]
    fn pause_freezes_remaining_time() {
        let t0 = Instant::now();
        let mut countdown = Countdown::start(ms(4000), t0);

        countdown.pause(t0 + ms(1000));
        assert!(countdown.is_paused());
        assert_eq!(countdown.deadline(), None);
        assert_eq!(countdown.remaining(t0 + ms(1000)), ms(3000));
        assert_eq!(countdown.remaining(t0 + ms(60_000)), ms(3000));
    }

    #[test]
    fn resume_restarts_from_remaining() {
        let t0 = Instant::now();
        let mut countdown = Countdown::start(ms(4000), t0);

        countdown.pause(t0 + ms(1000));
        let resumed_at = t0 + ms(6000);
        countdown.resume(resumed_at);

        assert_eq!(countdown.deadline(), Some(resumed_at + ms(3000)));
        assert!(!countdown.is_expired(resumed_at + ms(2999)));
        assert!(countdown.is_expired(resumed_at + ms(3000)));
    }

    #[test]
    fn repeated_pause_resume_cycles_do_not_drift() {
        let t0 = Instant::now();
        let mut countdown = Countdown::start(ms(4000), t0);
        let mut now = t0;
        let mut active = Duration::ZERO;

        for cycle in 0..50u64 {
            let run = Duration::from_micros(13_337 + cycle);
            now += run;
            active += run;
            countdown.pause(now);
            now += ms(250);
            countdown.resume(now);
        }

        assert_eq!(countdown.remaining(now), ms(4000) - active);
    }

    #[test]
    fn double_pause_and_double_resume_are_noops() {
        let t0 = Instant::now();
        let mut countdown = Countdown::start(ms(4000), t0);

        countdown.pause(t0 + ms(500));
        countdown.pause(t0 + ms(2500));
        assert_eq!(countdown.remaining(t0 + ms(2500)), ms(3500));

        countdown.resume(t0 + ms(3000));
        countdown.resume(t0 + ms(3500));
        assert_eq!(countdown.deadline(), Some(t0 + ms(3000) + ms(3500)));
    }

    #[test]
    fn fraction_left_tracks_wall_clock() {
        let t0 = Instant::now();
        let countdown = Countdown::start(ms(4000), t0);

        assert!((countdown.fraction_left(t0) - 1.0).abs() < f32::EPSILON);
        assert!((countdown.fraction_left(t0 + ms(1000)) - 0.75).abs() < 1e-6);
        assert_eq!(countdown.fraction_left(t0 + ms(9000)), 0.0);
    }
}
