// SPDX-License-Identifier: MPL-2.0
//! Loading overlay drawn over a content area.
//!
//! While shown, the overlay covers its area with a light or dark scrim, a
//! label and a spinner that turns on every tick. Hiding it starts a fade-out
//! of [`OVERLAY_FADE_MS`]; the overlay disappears once the fade has run.

use crate::config::OVERLAY_FADE_MS;
use std::f32::consts::TAU;
use std::time::{Duration, Instant};

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Hidden,
    Shown,
    FadingOut { since: Instant },
}

#[derive(Debug, Clone)]
pub struct ContentOverlay {
    phase: Phase,
    label: String,
    dark: bool,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
    fade: Duration,
}

impl Default for ContentOverlay {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentOverlay {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Hidden,
            label: String::new(),
            dark: false,
            spinner_rotation: 0.0,
            fade: Duration::from_millis(OVERLAY_FADE_MS),
        }
    }

    /// Shows the overlay with `label`. Showing it again during the fade-out
    /// brings it back at full opacity.
    pub fn show(&mut self, label: impl Into<String>, dark: bool) {
        if self.phase == Phase::Hidden {
            self.spinner_rotation = 0.0;
        }
        self.phase = Phase::Shown;
        self.label = label.into();
        self.dark = dark;
        tracing::trace!(dark, "content overlay shown");
    }

    /// Starts the fade-out. No-op unless the overlay is shown.
    pub fn hide(&mut self, now: Instant) {
        if self.phase == Phase::Shown {
            self.phase = Phase::FadingOut { since: now };
        }
    }

    /// Turns the spinner and removes the overlay once its fade has run.
    pub fn tick(&mut self, now: Instant) {
        match self.phase {
            Phase::Hidden => return,
            Phase::FadingOut { since } if now.saturating_duration_since(since) >= self.fade => {
                self.phase = Phase::Hidden;
                self.spinner_rotation = 0.0;
                return;
            }
            _ => {}
        }
        self.spinner_rotation = (self.spinner_rotation + SPINNER_SPEED) % TAU;
    }

    /// Whether anything is drawn, including a fading overlay.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }

    /// Whether the overlay is up and not fading out.
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.phase == Phase::Shown
    }

    /// Whether ticks still change anything.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.is_visible()
    }

    /// Opacity multiplier in `0.0..=1.0`, falling linearly during the fade.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Hidden => 0.0,
            Phase::Shown => 1.0,
            Phase::FadingOut { since } => {
                let elapsed = now.saturating_duration_since(since);
                if elapsed >= self.fade {
                    0.0
                } else {
                    1.0 - elapsed.as_secs_f32() / self.fade.as_secs_f32()
                }
            }
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_overlay_is_hidden() {
        let overlay = ContentOverlay::new();
        assert!(!overlay.is_visible());
        assert!(!overlay.is_animating());
        assert_eq!(overlay.opacity(Instant::now()), 0.0);
    }

    #[test]
    fn show_sets_label_and_scrim() {
        let mut overlay = ContentOverlay::new();
        overlay.show("Loading...", true);

        assert!(overlay.is_shown());
        assert_eq!(overlay.label(), "Loading...");
        assert!(overlay.is_dark());
        assert_eq!(overlay.opacity(Instant::now()), 1.0);
    }

    #[test]
    fn tick_turns_the_spinner() {
        let t0 = Instant::now();
        let mut overlay = ContentOverlay::new();
        overlay.show("Loading...", false);

        overlay.tick(t0);
        overlay.tick(t0 + ms(50));
        assert!((overlay.spinner_rotation() - 2.0 * SPINNER_SPEED).abs() < 1e-6);
    }

    #[test]
    fn spinner_wraps_after_a_full_turn() {
        let t0 = Instant::now();
        let mut overlay = ContentOverlay::new();
        overlay.show("Loading...", false);

        for i in 0..200 {
            overlay.tick(t0 + ms(i * 16));
            assert!(overlay.spinner_rotation() < TAU);
        }
    }

    #[test]
    fn hide_fades_out_then_disappears() {
        let t0 = Instant::now();
        let mut overlay = ContentOverlay::new();
        overlay.show("Loading...", false);

        overlay.hide(t0);
        assert!(overlay.is_visible());
        assert!(!overlay.is_shown());
        assert!((overlay.opacity(t0 + ms(150)) - 0.5).abs() < 1e-3);

        overlay.tick(t0 + ms(299));
        assert!(overlay.is_visible());

        overlay.tick(t0 + ms(300));
        assert!(!overlay.is_visible());
        assert_eq!(overlay.spinner_rotation(), 0.0);
    }

    #[test]
    fn hide_when_hidden_is_a_noop() {
        let t0 = Instant::now();
        let mut overlay = ContentOverlay::new();
        overlay.hide(t0);
        overlay.tick(t0);
        assert!(!overlay.is_visible());
    }

    #[test]
    fn show_during_fade_restores_full_opacity() {
        let t0 = Instant::now();
        let mut overlay = ContentOverlay::new();
        overlay.show("Loading...", false);
        overlay.hide(t0);

        overlay.show("Loading...", false);
        overlay.tick(t0 + ms(1000));
        assert!(overlay.is_shown());
        assert_eq!(overlay.opacity(t0 + ms(1000)), 1.0);
    }
}
