// SPDX-License-Identifier: MPL-2.0
//! Toast notification lifecycle.
//!
//! Toasts inform shoppers about actions (item added to cart, network errors,
//! comparison limits) without blocking interaction. This module owns their
//! state; rendering lives in [`crate::ui::toast`].
//!
//! # Components
//!
//! - [`notification`] - `Notification`, its `Category`, per-call `Options`
//! - [`countdown`] - pausable lifetime countdown
//! - [`scheduler`] - deadline queue of cancellable timers
//! - [`eviction`] - oldest-first victim selection under the cap
//! - [`store`] - insertion-ordered entries with admission
//! - [`manager`] - `Manager` tying everything together
//!
//! # Usage
//!
//! ```
//! use std::time::{Duration, Instant};
//! use storefront_ui::notifications::{Category, Manager, Options, State};
//!
//! let t0 = Instant::now();
//! let mut manager = Manager::new();
//!
//! let id = manager.notify(
//!     Category::Success,
//!     "Added to cart",
//!     "Trail runner, size 42",
//!     Options::default().duration_ms(2000),
//!     t0,
//! );
//!
//! manager.tick(t0 + Duration::from_millis(2000));
//! assert_eq!(manager.state(id), Some(State::Dismissing));
//! ```
//!
//! # Lifecycle
//!
//! Scheduled -> Active <-> Paused -> Dismissing -> Removed. Eviction jumps
//! straight to Removed. Persistent toasts (duration <= 0) stay Active until
//! closed or evicted.

pub mod countdown;
pub mod eviction;
pub mod manager;
pub mod notification;
pub mod scheduler;
pub mod store;

pub use manager::{DismissReason, Event, Manager, Message as NotificationMessage};
pub use notification::{Behavior, Category, Defaults, Notification, NotificationId, Options, State};
pub use store::Entry;
