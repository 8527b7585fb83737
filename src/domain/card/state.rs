// SPDX-License-Identifier: MPL-2.0
//! Mutable tilt state and the drag samples that feed it.

/// Current tilt of a card, in degrees.
///
/// `pitch` rotates around the horizontal axis, `yaw` around the vertical one.
/// Values are raw: an aggressive drag may push them past the configured
/// maximum angle, and the composer clamps them when reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    pub pitch: f32,
    pub yaw: f32,
}

impl TiltState {
    /// The flat, untilted card.
    pub const REST: Self = Self {
        pitch: 0.0,
        yaw: 0.0,
    };

    #[must_use]
    pub const fn new(pitch: f32, yaw: f32) -> Self {
        Self { pitch, yaw }
    }

    #[must_use]
    pub fn is_rest(self) -> bool {
        self.pitch == 0.0 && self.yaw == 0.0
    }
}

/// Cumulative pointer translation since the gesture started, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSample {
    pub dx: f32,
    pub dy: f32,
}

impl DragSample {
    #[must_use]
    pub const fn new(dx: f32, dy: f32) -> Self {
        Self { dx, dy }
    }
}
