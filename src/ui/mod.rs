// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they borrow
//! state from [`crate::notifications`] and [`crate::loading`] and emit
//! messages back to the owner.
//!
//! - [`toast`] - Toast cards and the positioned overlay
//! - [`loading_bar`] - Global loading strip
//! - [`strip`] - Fill strip shared by both
//! - [`content_overlay`] - Spinner overlay over a content area
//! - [`spinner`] - Canvas spinner used by the overlay and busy buttons
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod content_overlay;
pub mod design_tokens;
pub mod loading_bar;
pub mod spinner;
pub mod strip;
pub mod toast;

pub use toast::Toast;
