// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Toast lifetime, concurrency cap, exit animation
//! - **Tick**: Event-loop tick driving timers and animations
//! - **Loading Bar**: Global progress strip and content overlay timing

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default visible lifetime of a toast (in milliseconds).
pub const DEFAULT_DURATION_MS: i64 = 4000;

/// Longest lifetime a caller or config may request (in milliseconds).
pub const MAX_DURATION_MS: i64 = 120_000;

/// Default maximum number of live toasts on screen at once.
pub const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Minimum concurrency cap. A cap of zero would evict every new toast.
pub const MIN_MAX_CONCURRENT: usize = 1;

/// Maximum concurrency cap.
pub const MAX_MAX_CONCURRENT: usize = 20;

/// Default exit animation delay between Dismissing and Removed (in milliseconds).
pub const DEFAULT_EXIT_DELAY_MS: u64 = 300;

/// Maximum exit animation delay (in milliseconds).
pub const MAX_EXIT_DELAY_MS: u64 = 2000;

// ==========================================================================
// Tick Defaults
// ==========================================================================

/// Default tick interval (in milliseconds). Bounds dismissal error.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Minimum tick interval (in milliseconds), roughly one frame at 60 Hz.
pub const MIN_TICK_INTERVAL_MS: u64 = 16;

/// Maximum tick interval (in milliseconds).
pub const MAX_TICK_INTERVAL_MS: u64 = 250;

// ==========================================================================
// Loading Bar Defaults
// ==========================================================================

/// Delay before a completed bar resets to empty (in milliseconds).
pub const DEFAULT_LOADING_RESET_DELAY_MS: u64 = 400;

/// Longest reset delay a config may request (in milliseconds).
pub const MAX_LOADING_RESET_DELAY_MS: u64 = 5000;

/// How long the error tint stays after a failed request (in milliseconds).
pub const DEFAULT_LOADING_ERROR_FLASH_MS: u64 = 1000;

/// Longest error tint a config may request (in milliseconds).
pub const MAX_LOADING_ERROR_FLASH_MS: u64 = 10_000;

/// Fade-out of a content loading overlay after it is hidden (in milliseconds).
pub const OVERLAY_FADE_MS: u64 = 300;

/// Progress ceiling while a request is still in flight (percent).
pub const LOADING_CREEP_CEILING: f32 = 95.0;

/// Fraction of the remaining distance covered by each creep step.
pub const LOADING_CREEP_FACTOR: f32 = 0.1;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DURATION_MS > 0);
    assert!(DEFAULT_DURATION_MS <= MAX_DURATION_MS);

    assert!(MIN_MAX_CONCURRENT > 0);
    assert!(DEFAULT_MAX_CONCURRENT >= MIN_MAX_CONCURRENT);
    assert!(DEFAULT_MAX_CONCURRENT <= MAX_MAX_CONCURRENT);

    assert!(DEFAULT_EXIT_DELAY_MS <= MAX_EXIT_DELAY_MS);

    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);

    assert!(DEFAULT_LOADING_RESET_DELAY_MS <= MAX_LOADING_RESET_DELAY_MS);
    assert!(DEFAULT_LOADING_ERROR_FLASH_MS <= MAX_LOADING_ERROR_FLASH_MS);
    assert!(OVERLAY_FADE_MS > 0);
    assert!(LOADING_CREEP_CEILING > 0.0 && LOADING_CREEP_CEILING < 100.0);
    assert!(LOADING_CREEP_FACTOR > 0.0 && LOADING_CREEP_FACTOR < 1.0);
};
