// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[notifications]` - Toast defaults (lifetime, cap, exit delay, placement)
//! - `[loading]` - Global loading bar timing
//!
//! Every field is optional. Missing fields fall back to [`defaults`], and
//! out-of-range values are clamped when resolved.
//!
//! # Examples
//!
//! ```no_run
//! use storefront_ui::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.notifications.max_concurrent = Some(3);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use crate::loading::Timing;
use crate::notifications::Defaults;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key surfaced as a toast when the config file cannot be parsed.
pub const CONFIG_LOAD_WARNING_KEY: &str = "notification-config-load-error";

/// Screen corner (or edge center) where the toast stack is anchored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// Whether toasts stack from the top edge of the window.
    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Position::TopLeft | Position::TopCenter | Position::TopRight)
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "es-ES").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Toast notification settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Default lifetime in milliseconds. Zero or negative means persistent.
    #[serde(default = "default_duration_ms", skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<i64>,

    /// Maximum number of live toasts.
    #[serde(
        default = "default_max_concurrent",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_concurrent: Option<usize>,

    /// Exit animation delay in milliseconds.
    #[serde(default = "default_exit_delay_ms", skip_serializing_if = "Option::is_none")]
    pub exit_delay_ms: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_button: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_indicator: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pause_on_hover: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Tick interval in milliseconds for timers and animations.
    #[serde(
        default = "default_tick_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub tick_interval_ms: Option<u64>,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            max_concurrent: default_max_concurrent(),
            exit_delay_ms: default_exit_delay_ms(),
            close_button: Some(true),
            progress_indicator: Some(true),
            pause_on_hover: Some(true),
            position: Some(Position::default()),
            tick_interval_ms: default_tick_interval_ms(),
        }
    }
}

impl NotificationConfig {
    /// Resolves the section into concrete manager defaults, clamping each value.
    #[must_use]
    pub fn to_defaults(&self) -> Defaults {
        let exit_delay_ms = self
            .exit_delay_ms
            .unwrap_or(DEFAULT_EXIT_DELAY_MS)
            .min(MAX_EXIT_DELAY_MS);

        Defaults {
            duration_ms: self
                .duration_ms
                .unwrap_or(DEFAULT_DURATION_MS)
                .min(MAX_DURATION_MS),
            close_button: self.close_button.unwrap_or(true),
            progress_indicator: self.progress_indicator.unwrap_or(true),
            pause_on_hover: self.pause_on_hover.unwrap_or(true),
            max_concurrent: clamp_max_concurrent(
                self.max_concurrent.unwrap_or(DEFAULT_MAX_CONCURRENT),
            ),
            exit_delay: Duration::from_millis(exit_delay_ms),
        }
    }

    /// Resolved toast placement.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position.unwrap_or_default()
    }

    /// Resolved tick interval.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        let ms = self
            .tick_interval_ms
            .unwrap_or(DEFAULT_TICK_INTERVAL_MS)
            .clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS);
        Duration::from_millis(ms)
    }
}

/// Global loading bar settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoadingConfig {
    #[serde(
        default = "default_loading_reset_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub reset_delay_ms: Option<u64>,

    #[serde(
        default = "default_loading_error_flash_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub error_flash_ms: Option<u64>,
}

impl Default for LoadingConfig {
    fn default() -> Self {
        Self {
            reset_delay_ms: default_loading_reset_delay_ms(),
            error_flash_ms: default_loading_error_flash_ms(),
        }
    }
}

impl LoadingConfig {
    /// Resolves the section into loading bar timing, capping each delay.
    #[must_use]
    pub fn to_timing(&self) -> Timing {
        let reset_delay_ms = self
            .reset_delay_ms
            .unwrap_or(DEFAULT_LOADING_RESET_DELAY_MS)
            .min(MAX_LOADING_RESET_DELAY_MS);
        let error_flash_ms = self
            .error_flash_ms
            .unwrap_or(DEFAULT_LOADING_ERROR_FLASH_MS)
            .min(MAX_LOADING_ERROR_FLASH_MS);

        Timing {
            reset_delay: Duration::from_millis(reset_delay_ms),
            error_flash: Duration::from_millis(error_flash_ms),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub loading: LoadingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_duration_ms() -> Option<i64> {
    Some(DEFAULT_DURATION_MS)
}

fn default_max_concurrent() -> Option<usize> {
    Some(DEFAULT_MAX_CONCURRENT)
}

fn default_exit_delay_ms() -> Option<u64> {
    Some(DEFAULT_EXIT_DELAY_MS)
}

fn default_tick_interval_ms() -> Option<u64> {
    Some(DEFAULT_TICK_INTERVAL_MS)
}

fn default_loading_reset_delay_ms() -> Option<u64> {
    Some(DEFAULT_LOADING_RESET_DELAY_MS)
}

fn default_loading_error_flash_ms() -> Option<u64> {
    Some(DEFAULT_LOADING_ERROR_FLASH_MS)
}

/// Keeps the concurrency cap inside the supported range.
#[must_use]
pub fn clamp_max_concurrent(value: usize) -> usize {
    value.clamp(MIN_MAX_CONCURRENT, MAX_MAX_CONCURRENT)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded configuration");
                    return (config, None);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default configuration");
                    return (Config::default(), Some(CONFIG_LOAD_WARNING_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
