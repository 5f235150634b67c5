// SPDX-License-Identifier: MPL-2.0
//! Loading indicator state.
//!
//! - [`LoadingBar`] - global progress strip (this module)
//! - [`overlay`] - spinner overlay over a content area
//! - [`busy`] - busy state of buttons that start a request
//!
//! The loading bar is a thin strip pinned to the top of the window. While a request is in
//! flight it creeps toward [`LOADING_CREEP_CEILING`], fast at first and
//! slower as it approaches. Completion snaps it to 100% and clears it after
//! the reset delay; a failure additionally tints it for the error flash.
//!
//! The bar advances one creep step per tick, so its speed follows the
//! configured tick interval.

pub mod busy;
pub mod overlay;

pub use busy::BusyButtons;
pub use overlay::ContentOverlay;

use crate::config::{LoadingConfig, LOADING_CREEP_CEILING, LOADING_CREEP_FACTOR};
use std::time::{Duration, Instant};

/// Timing of the completion and error animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub reset_delay: Duration,
    pub error_flash: Duration,
}

impl Default for Timing {
    fn default() -> Self {
        LoadingConfig::default().to_timing()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Loading,
    /// Full bar shown until `reset_at`.
    Completing { reset_at: Instant },
}

#[derive(Debug, Clone)]
pub struct LoadingBar {
    timing: Timing,
    phase: Phase,
    /// Percent, 0.0..=100.0.
    progress: f32,
    error_until: Option<Instant>,
}

impl Default for LoadingBar {
    fn default() -> Self {
        Self::new(Timing::default())
    }
}

impl LoadingBar {
    #[must_use]
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            phase: Phase::Idle,
            progress: 0.0,
            error_until: None,
        }
    }

    /// Begins a new request. Restarts from zero if one was already running.
    pub fn start(&mut self) {
        self.phase = Phase::Loading;
        self.progress = 0.0;
        tracing::trace!("loading bar started");
    }

    /// Advances the creep by one step. No-op unless loading.
    pub fn step(&mut self) {
        if self.phase != Phase::Loading {
            return;
        }
        let increment = (100.0 - self.progress) * LOADING_CREEP_FACTOR;
        self.progress = (self.progress + increment).min(LOADING_CREEP_CEILING);
    }

    /// Fills the bar and schedules the reset.
    pub fn complete(&mut self, now: Instant) {
        self.progress = 100.0;
        self.phase = Phase::Completing {
            reset_at: now + self.timing.reset_delay,
        };
    }

    /// Completes the bar with the error tint.
    pub fn error(&mut self, now: Instant) {
        self.error_until = Some(now + self.timing.error_flash);
        self.complete(now);
    }

    /// Advances the creep and expires finished animations.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Loading => self.step(),
            Phase::Completing { reset_at } if now >= reset_at => {
                self.phase = Phase::Idle;
                self.progress = 0.0;
            }
            _ => {}
        }
        if self.error_until.is_some_and(|until| now >= until) {
            self.error_until = None;
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    /// Whether the strip is drawn at all.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Whether ticks still change anything.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_visible() || self.error_until.is_some()
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        self.error_until.is_some()
    }

    /// Filled portion in percent.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }
}
