// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the periodic tick driving toast timers and loading animations.
///
/// The tick only runs while something needs it, so an idle window does not
/// wake up.
pub fn create_tick_subscription(
    interval: Duration,
    has_notifications: bool,
    loading_animating: bool,
) -> Subscription<Message> {
    if has_notifications || loading_animating {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
