// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::config::TICK_INTERVAL_MS;
use super::Message;
use iced::{time, Subscription};
use std::time::Duration;

/// Creates the frame tick subscription, active only while the card settles.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
