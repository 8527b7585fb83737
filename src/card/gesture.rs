// SPDX-License-Identifier: MPL-2.0
//! Drag gesture tracking.
//!
//! Turns pointer positions into cumulative drag samples and drag samples
//! into raw tilt values.

use crate::domain::card::{DragSample, Sensitivity, TiltState};
use glam::Vec2;

/// Tracks one pointer drag over the card.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    sensitivity: Sensitivity,

    /// Pointer position where the drag started
    origin: Option<Vec2>,
}

impl GestureTracker {
    #[must_use]
    pub fn new(sensitivity: Sensitivity) -> Self {
        Self {
            sensitivity,
            origin: None,
        }
    }

    /// Starts a drag at the given pointer position.
    pub fn start(&mut self, position: Vec2) {
        self.origin = Some(position);
    }

    /// Stops the drag.
    pub fn stop(&mut self) {
        self.origin = None;
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.origin.is_some()
    }

    /// Cumulative translation from the drag origin to `position`.
    #[must_use]
    pub fn sample_at(&self, position: Vec2) -> Option<DragSample> {
        let origin = self.origin?;
        let delta = position - origin;
        Some(DragSample::new(delta.x, delta.y))
    }

    /// Raw tilt for a drag sample. Dragging down tips the top edge toward the
    /// viewer; dragging right turns the right edge away.
    #[must_use]
    pub fn tilt_for(&self, sample: DragSample) -> TiltState {
        TiltState {
            pitch: sample.dy * -self.sensitivity.y,
            yaw: sample.dx * self.sensitivity.x,
        }
    }
}
