// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! Built-in strings (demo labels, toast texts, the loading caption) are
//! Fluent messages embedded from `assets/i18n/*.ftl`.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Runtime language switching
//! - `MISSING: <key>` placeholder when a translation is absent

pub mod fluent;

pub use fluent::{I18n, DEFAULT_LOCALE};
