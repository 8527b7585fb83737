// SPDX-License-Identifier: MPL-2.0
//! Tilt card component state.
//!
//! [`TiltCard`] owns one card's tilt and wires the three parts together:
//! the [`GestureTracker`](gesture::GestureTracker) writes the tilt while
//! dragging, the [`ReturnToRest`](animator::ReturnToRest) animator writes it
//! while settling, and [`compose`](compose::compose) reads it every frame.
//!
//! Evaluation is pull-based: the host calls [`TiltCard::tick`] once per frame
//! while [`TiltCard::is_animating`] is true and reads
//! [`TiltCard::transforms`] when it renders. [`TiltCard::take_dirty`] tells a
//! renderer whether its cached geometry is stale.
//!
//! # Example
//!
//! ```
//! use iced_tilt::card::TiltCard;
//! use iced_tilt::domain::card::CardConfig;
//!
//! let mut card = TiltCard::new(CardConfig::default().with_max_angle(10.0));
//! card.on_drag_update(50.0, 0.0);
//! assert_eq!(card.transforms().card.rotate_y, 10.0);
//!
//! card.on_drag_end();
//! while card.tick(1.0 / 60.0) {}
//! assert!(card.tilt().is_rest());
//! ```

pub mod animator;
pub mod compose;
pub mod gesture;

pub use animator::{Phase, ReturnToRest};
pub use compose::{compose, CardRotation, ComposedTransforms, ContentTransform, SheenTransform};
pub use gesture::GestureTracker;

use crate::domain::card::{CardConfig, DragSample, TiltState};
use glam::Vec2;

/// Longest frame delta fed to the springs, in seconds.
pub const MAX_FRAME_SECS: f32 = 0.05;

/// One interactive tilt card.
#[derive(Debug, Clone)]
pub struct TiltCard {
    config: CardConfig,
    tilt: TiltState,
    tracker: GestureTracker,
    animator: ReturnToRest,
    dirty: bool,
}

impl TiltCard {
    #[must_use]
    pub fn new(config: CardConfig) -> Self {
        Self {
            config,
            tilt: TiltState::REST,
            tracker: GestureTracker::new(config.sensitivity),
            animator: ReturnToRest::new(config.spring),
            dirty: true,
        }
    }

    #[must_use]
    pub fn config(&self) -> &CardConfig {
        &self.config
    }

    #[must_use]
    pub fn tilt(&self) -> TiltState {
        self.tilt
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.animator.phase()
    }

    /// Returns true while a pointer drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.tracker.is_dragging()
    }

    /// Returns true while the card needs frame ticks.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_settling()
    }

    /// Composes the layer transforms for the current tilt.
    #[must_use]
    pub fn transforms(&self) -> ComposedTransforms {
        compose(self.tilt, &self.config)
    }

    /// Returns whether the tilt changed since the last call, and resets the flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // -------------------------------------------------------------------------
    // Gesture hooks
    // -------------------------------------------------------------------------

    /// Begins a drag; any settling animation stops where it is.
    pub fn on_drag_start(&mut self) {
        self.animator.begin_drag();
    }

    /// Applies the cumulative drag translation since the gesture started.
    pub fn on_drag_update(&mut self, dx: f32, dy: f32) {
        if self.animator.phase() != Phase::Dragging {
            self.animator.begin_drag();
        }
        self.set_tilt(self.tracker.tilt_for(DragSample::new(dx, dy)));
    }

    /// Ends the drag and lets the card spring back to rest.
    pub fn on_drag_end(&mut self) {
        self.tracker.stop();
        self.animator.release(self.tilt);
    }

    // -------------------------------------------------------------------------
    // Pointer convenience
    // -------------------------------------------------------------------------

    /// Pointer pressed on the card at `position`.
    pub fn on_pointer_pressed(&mut self, position: Vec2) {
        self.tracker.start(position);
        self.on_drag_start();
    }

    /// Pointer moved to `position`. Ignored unless a drag is in progress.
    pub fn on_pointer_moved(&mut self, position: Vec2) {
        if let Some(sample) = self.tracker.sample_at(position) {
            self.on_drag_update(sample.dx, sample.dy);
        }
    }

    /// Pointer released or lost. Ignored unless a drag is in progress.
    pub fn on_pointer_released(&mut self) {
        if self.tracker.is_dragging() {
            self.on_drag_end();
        }
    }

    // -------------------------------------------------------------------------
    // Frame loop
    // -------------------------------------------------------------------------

    /// Advances the return-to-rest animation by `dt` seconds (capped at
    /// [`MAX_FRAME_SECS`]). Returns true if still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        if !self.animator.is_settling() {
            return false;
        }
        let mut tilt = self.tilt;
        let animating = self.animator.tick(dt.min(MAX_FRAME_SECS), &mut tilt);
        self.set_tilt(tilt);
        animating
    }

    fn set_tilt(&mut self, tilt: TiltState) {
        if tilt != self.tilt {
            self.tilt = tilt;
            self.dirty = true;
        }
    }
}

impl Default for TiltCard {
    fn default() -> Self {
        Self::new(CardConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Sensitivity;

    const FRAME: f32 = 1.0 / 60.0;

    fn card() -> TiltCard {
        TiltCard::new(
            CardConfig::default()
                .with_max_angle(10.0)
                .with_sensitivity(Sensitivity::uniform(0.3)),
        )
    }

    #[test]
    fn new_card_is_flat_and_idle() {
        let card = card();
        assert!(card.tilt().is_rest());
        assert_eq!(card.phase(), Phase::Resting);
        assert!(!card.is_animating());
    }

    #[test]
    fn drag_update_applies_linear_formula_without_clamping() {
        let mut card = card();
        card.on_drag_start();
        card.on_drag_update(50.0, -20.0);

        let tilt = card.tilt();
        assert!((tilt.yaw - 15.0).abs() < 1e-4);
        assert!((tilt.pitch - 6.0).abs() < 1e-4);
        assert_eq!(card.transforms().card.rotate_y, 10.0);
    }

    #[test]
    fn drag_end_starts_settling() {
        let mut card = card();
        card.on_drag_update(30.0, 30.0);
        card.on_drag_end();
        assert_eq!(card.phase(), Phase::Settling);
        assert!(card.is_animating());
    }

    #[test]
    fn new_drag_while_settling_takes_over_exactly() {
        let mut card = card();
        card.on_drag_update(40.0, 40.0);
        card.on_drag_end();
        for _ in 0..5 {
            card.tick(FRAME);
        }

        card.on_drag_start();
        assert_eq!(card.phase(), Phase::Dragging);
        card.on_drag_update(10.0, -10.0);

        let expected = TiltState::new(-10.0 * -0.3, 10.0 * 0.3);
        assert_eq!(card.tilt(), expected);
        assert!(!card.tick(FRAME));
        assert_eq!(card.tilt(), expected);
    }

    #[test]
    fn drag_update_without_start_still_interrupts_settling() {
        let mut card = card();
        card.on_drag_update(40.0, 0.0);
        card.on_drag_end();
        card.tick(FRAME);

        card.on_drag_update(5.0, 0.0);
        assert_eq!(card.phase(), Phase::Dragging);
    }

    #[test]
    fn pointer_events_track_cumulative_translation() {
        let mut card = card();
        card.on_pointer_pressed(Vec2::new(100.0, 100.0));
        card.on_pointer_moved(Vec2::new(110.0, 100.0));
        card.on_pointer_moved(Vec2::new(120.0, 100.0));
        assert!((card.tilt().yaw - 6.0).abs() < 1e-4);

        card.on_pointer_released();
        assert!(card.is_animating());
    }

    #[test]
    fn pointer_moves_without_press_are_ignored() {
        let mut card = card();
        card.on_pointer_moved(Vec2::new(500.0, 500.0));
        card.on_pointer_released();
        assert!(card.tilt().is_rest());
        assert_eq!(card.phase(), Phase::Resting);
    }

    #[test]
    fn dirty_flag_tracks_changes() {
        let mut card = card();
        assert!(card.take_dirty());
        assert!(!card.take_dirty());

        card.on_drag_update(0.0, 0.0);
        assert!(!card.take_dirty());

        card.on_drag_update(1.0, 0.0);
        assert!(card.take_dirty());
    }

    #[test]
    fn idle_tick_does_not_mark_dirty() {
        let mut card = card();
        card.on_drag_update(20.0, 0.0);
        card.on_drag_end();
        let _ = card.take_dirty();

        assert!(card.tick(0.0));
        assert!(!card.take_dirty());

        assert!(card.tick(1.0 / 60.0));
        assert!(card.take_dirty());
    }

    #[test]
    fn huge_frame_gap_is_capped() {
        let mut card = card();
        card.on_drag_update(40.0, 0.0);
        card.on_drag_end();
        card.tick(10.0);
        let yaw = card.tilt().yaw;
        assert!(yaw.is_finite());
        assert!(yaw > 0.0 && yaw < 12.0);
    }
}
