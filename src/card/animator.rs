// SPDX-License-Identifier: MPL-2.0
//! Return-to-rest animation.
//!
//! While the pointer is down the gesture tracker owns the tilt. On release
//! each axis is handed to its own damped spring heading for zero. A new drag
//! abandons the springs mid-flight; the tracker overwrites the tilt on its
//! next update, so there is no jump.

use crate::domain::card::TiltState;
use crate::motion::{Spring, SpringConfig};

/// Who currently drives the tilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Flat and idle; no frame work needed.
    #[default]
    Resting,
    /// The gesture tracker sets the tilt directly.
    Dragging,
    /// Springs pull the tilt back to rest.
    Settling,
}

/// Spring-driven return of both tilt axes to zero.
#[derive(Debug, Clone)]
pub struct ReturnToRest {
    phase: Phase,
    config: SpringConfig,
    pitch: Spring,
    yaw: Spring,
}

impl ReturnToRest {
    #[must_use]
    pub fn new(config: SpringConfig) -> Self {
        Self {
            phase: Phase::Resting,
            config,
            pitch: Spring::new(config),
            yaw: Spring::new(config),
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.phase == Phase::Settling
    }

    /// Hands the tilt to the gesture tracker, abandoning any running springs.
    pub fn begin_drag(&mut self) {
        if self.phase == Phase::Settling {
            log::debug!(
                "settling interrupted at pitch {:.3}, yaw {:.3}",
                self.pitch.position,
                self.yaw.position
            );
        }
        self.phase = Phase::Dragging;
    }

    /// Starts settling from `tilt`. A card already at rest goes straight to
    /// [`Phase::Resting`].
    pub fn release(&mut self, tilt: TiltState) {
        if tilt.is_rest() {
            self.phase = Phase::Resting;
            return;
        }
        self.pitch = Spring::released_from(tilt.pitch, self.config);
        self.yaw = Spring::released_from(tilt.yaw, self.config);
        self.phase = Phase::Settling;
        log::debug!(
            "settling from pitch {:.3}, yaw {:.3}",
            tilt.pitch,
            tilt.yaw
        );
    }

    /// Advances the springs by `dt` seconds and writes their positions into
    /// `tilt`. Returns true if still animating.
    pub fn tick(&mut self, dt: f32, tilt: &mut TiltState) -> bool {
        if self.phase != Phase::Settling {
            return false;
        }

        let pitch_moving = self.pitch.advance(dt);
        let yaw_moving = self.yaw.advance(dt);
        tilt.pitch = self.pitch.position;
        tilt.yaw = self.yaw.position;

        if pitch_moving || yaw_moving {
            return true;
        }

        *tilt = TiltState::REST;
        self.phase = Phase::Resting;
        log::debug!("card settled");
        false
    }
}
