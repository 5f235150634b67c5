// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications::NotificationMessage;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Notification(NotificationMessage),
    /// Periodic tick driving toast timers and loading animations.
    Tick(Instant),
    AddToCart,
    /// Try to add one more product to a full compare list.
    CompareFull,
    NetworkError,
    PersistentNotice,
    /// Simulate loading a product quick view.
    QuickView(Request),
    QuickViewLoaded(Request, Result<(), String>),
    ClearAll,
}

/// Demo requests whose button goes busy while they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Request {
    QuickView,
    /// Quick view against an endpoint that always fails.
    QuickViewFailing,
}

impl Request {
    #[must_use]
    pub fn fails(self) -> bool {
        matches!(self, Request::QuickViewFailing)
    }
}

/// Runtime flags passed from the launcher.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Optional config directory override (`--config-dir`).
    pub config_dir: Option<PathBuf>,
}
