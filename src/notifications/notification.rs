// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct, its `Category`, the
//! per-call `Options`, and the lifecycle `State` used throughout the
//! notification system.

use crate::config::{clamp_max_concurrent, MAX_DURATION_MS};
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Category determines the accent color and icon of a toast.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    Success,
    Error,
    Warning,
    Info,
    /// Caller-defined tag. Styled like `Info`.
    Custom(String),
}

impl Category {
    /// Parses a category tag. Unknown tags become [`Category::Custom`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "success" => Category::Success,
            "error" => Category::Error,
            "warning" => Category::Warning,
            "info" => Category::Info,
            _ => Category::Custom(tag.trim().to_string()),
        }
    }

    /// Returns the tag for this category.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Category::Success => "success",
            Category::Error => "error",
            Category::Warning => "warning",
            Category::Info => "info",
            Category::Custom(tag) => tag,
        }
    }

    /// Returns the accent color for this category.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Category::Success => palette::SUCCESS_500,
            Category::Error => palette::ERROR_500,
            Category::Warning => palette::WARNING_500,
            Category::Info | Category::Custom(_) => palette::INFO_500,
        }
    }

    /// Returns the glyph drawn in front of the title.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Category::Success => "\u{2714}",
            Category::Error => "\u{2716}",
            Category::Warning => "\u{26A0}",
            Category::Info | Category::Custom(_) => "\u{2139}",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    /// Created, not yet admitted.
    Scheduled,
    /// Visible; countdown running (or persistent).
    Active,
    /// Visible; countdown frozen.
    Paused,
    /// Exit animation in progress.
    Dismissing,
    /// Detached from the store.
    Removed,
}

impl State {
    /// Whether the notification counts against the concurrency cap.
    #[must_use]
    pub fn is_live(self) -> bool {
        matches!(self, State::Active | State::Paused)
    }
}

/// Per-call overrides. Unset fields fall back to the manager's [`Defaults`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Options {
    /// Lifetime in milliseconds; zero or negative means persistent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_button: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_indicator: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_on_hover: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_concurrent: Option<usize>,
}

impl Options {
    #[must_use]
    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Shorthand for a toast that stays until closed.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.duration_ms(0)
    }

    #[must_use]
    pub fn close_button(mut self, enabled: bool) -> Self {
        self.close_button = Some(enabled);
        self
    }

    #[must_use]
    pub fn progress_indicator(mut self, enabled: bool) -> Self {
        self.progress_indicator = Some(enabled);
        self
    }

    #[must_use]
    pub fn pause_on_hover(mut self, enabled: bool) -> Self {
        self.pause_on_hover = Some(enabled);
        self
    }

    #[must_use]
    pub fn max_concurrent(mut self, cap: usize) -> Self {
        self.max_concurrent = Some(cap);
        self
    }

    /// Fills unset fields from `defaults`.
    #[must_use]
    pub fn resolve(&self, defaults: &Defaults) -> Behavior {
        let duration_ms = self
            .duration_ms
            .unwrap_or(defaults.duration_ms)
            .min(MAX_DURATION_MS);
        let lifetime = u64::try_from(duration_ms)
            .ok()
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        Behavior {
            lifetime,
            close_button: self.close_button.unwrap_or(defaults.close_button),
            // Persistent toasts never show a progress strip.
            progress_indicator: lifetime.is_some()
                && self.progress_indicator.unwrap_or(defaults.progress_indicator),
            pause_on_hover: self.pause_on_hover.unwrap_or(defaults.pause_on_hover),
            max_concurrent: clamp_max_concurrent(
                self.max_concurrent.unwrap_or(defaults.max_concurrent),
            ),
        }
    }
}

/// Manager-wide defaults, usually resolved from `settings.toml`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub duration_ms: i64,
    pub close_button: bool,
    pub progress_indicator: bool,
    pub pause_on_hover: bool,
    pub max_concurrent: usize,
    /// Delay between Dismissing and Removed.
    pub exit_delay: Duration,
}

impl Default for Defaults {
    fn default() -> Self {
        crate::config::NotificationConfig::default().to_defaults()
    }
}

/// Fully resolved behavior of one notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Behavior {
    /// `None` for persistent notifications.
    pub lifetime: Option<Duration>,
    pub close_button: bool,
    pub progress_indicator: bool,
    pub pause_on_hover: bool,
    pub max_concurrent: usize,
}

impl Behavior {
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        self.lifetime.is_none()
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    category: Category,
    /// Plain text; never interpreted as markup.
    title: String,
    body: String,
    options: Options,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification. `created_at` is taken from the caller's clock.
    pub fn new(
        category: Category,
        title: impl Into<String>,
        body: impl Into<String>,
        created_at: Instant,
    ) -> Self {
        Self {
            id: NotificationId::new(),
            category,
            title: title.into(),
            body: body.into(),
            options: Options::default(),
            created_at,
        }
    }

    /// Replaces the per-call options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(category: Category) -> Notification {
        Notification::new(category, "title", "body", Instant::now())
    }

    #[test]
    fn notification_ids_are_unique() {
        let n1 = sample(Category::Success);
        let n2 = sample(Category::Success);
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn category_colors_are_distinct() {
        let success = Category::Success.color();
        let info = Category::Info.color();
        let warning = Category::Warning.color();
        let error = Category::Error.color();

        assert_ne!(success, info);
        assert_ne!(success, warning);
        assert_ne!(success, error);
        assert_ne!(info, warning);
        assert_ne!(info, error);
        assert_ne!(warning, error);
    }

    #[test]
    fn custom_category_falls_back_to_info_styling() {
        let custom = Category::Custom("promo".to_string());
        assert_eq!(custom.color(), Category::Info.color());
        assert_eq!(custom.glyph(), Category::Info.glyph());
        assert_eq!(custom.as_str(), "promo");
    }

    #[test]
    fn from_tag_recognizes_builtin_categories() {
        assert_eq!(Category::from_tag("success"), Category::Success);
        assert_eq!(Category::from_tag("ERROR"), Category::Error);
        assert_eq!(Category::from_tag(" warning "), Category::Warning);
        assert_eq!(Category::from_tag("info"), Category::Info);
        assert_eq!(
            Category::from_tag("cart"),
            Category::Custom("cart".to_string())
        );
    }

    #[test]
    fn only_active_and_paused_are_live() {
        assert!(State::Active.is_live());
        assert!(State::Paused.is_live());
        assert!(!State::Scheduled.is_live());
        assert!(!State::Dismissing.is_live());
        assert!(!State::Removed.is_live());
    }

    #[test]
    fn resolve_uses_defaults_when_unset() {
        let behavior = Options::default().resolve(&Defaults::default());

        assert_eq!(behavior.lifetime, Some(Duration::from_millis(4000)));
        assert!(behavior.close_button);
        assert!(behavior.progress_indicator);
        assert!(behavior.pause_on_hover);
        assert_eq!(behavior.max_concurrent, 5);
    }

    #[test]
    fn zero_or_negative_duration_is_persistent_without_progress() {
        for duration in [0, -1, -4000] {
            let behavior = Options::default()
                .duration_ms(duration)
                .progress_indicator(true)
                .resolve(&Defaults::default());
            assert!(behavior.is_persistent());
            assert!(!behavior.progress_indicator);
        }
    }

    #[test]
    fn overrides_take_precedence() {
        let behavior = Options::default()
            .duration_ms(1500)
            .close_button(false)
            .pause_on_hover(false)
            .max_concurrent(2)
            .resolve(&Defaults::default());

        assert_eq!(behavior.lifetime, Some(Duration::from_millis(1500)));
        assert!(!behavior.close_button);
        assert!(!behavior.pause_on_hover);
        assert_eq!(behavior.max_concurrent, 2);
    }

    #[test]
    fn options_deserialize_from_camel_case() {
        let options: Options =
            toml::from_str("durationMs = 2000\ncloseButton = false\nmaxConcurrent = 3\n")
                .expect("options should parse");
        assert_eq!(options.duration_ms, Some(2000));
        assert_eq!(options.close_button, Some(false));
        assert_eq!(options.max_concurrent, Some(3));
        assert_eq!(options.pause_on_hover, None);
    }
}
