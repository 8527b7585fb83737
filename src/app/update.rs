// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.

use super::config::TICK_INTERVAL_MS;
use crate::card::TiltCard;
use crate::ui::widgets::CardEvent;
use glam::Vec2;
use std::time::{Duration, Instant};

/// Mutable state the handlers work on.
pub struct UpdateContext<'a> {
    pub card: &'a mut TiltCard,
    pub last_tick: &'a mut Option<Instant>,
}

/// Forwards a canvas pointer event to the card's gesture hooks.
pub fn handle_card_event(ctx: &mut UpdateContext<'_>, event: CardEvent) {
    match event {
        CardEvent::Pressed(position) => {
            ctx.card.on_pointer_pressed(Vec2::new(position.x, position.y));
            *ctx.last_tick = None;
        }
        CardEvent::Moved(position) => {
            ctx.card.on_pointer_moved(Vec2::new(position.x, position.y));
        }
        CardEvent::Released => {
            ctx.card.on_pointer_released();
        }
    }
}

/// Advances the settling card by the time elapsed since the previous tick.
///
/// The first tick after a release has no predecessor and advances by one
/// nominal tick interval.
pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) {
    let elapsed = ctx
        .last_tick
        .map_or(Duration::from_millis(TICK_INTERVAL_MS), |last| {
            now.saturating_duration_since(last)
        });

    if ctx.card.tick(elapsed.as_secs_f32()) {
        *ctx.last_tick = Some(now);
    } else {
        *ctx.last_tick = None;
    }
}
