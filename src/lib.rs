// SPDX-License-Identifier: MPL-2.0
//! `storefront_ui` provides toast notifications and loading indicators for
//! storefront front-ends built with the Iced GUI framework.
//!
//! The [`notifications`] module owns the toast lifecycle (admission with
//! oldest-first eviction, pausable countdowns, exit delay), [`loading`] the
//! loading bar, content overlay and busy button state, and [`ui`] their views. [`app`] is a demo application
//! wiring both to simulated shop actions.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod loading;
pub mod notifications;
pub mod ui;
