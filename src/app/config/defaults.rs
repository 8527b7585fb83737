// SPDX-License-Identifier: MPL-2.0
//! Application-level default values and bounds.
//!
//! Card tunables default to [`crate::domain::card::config::defaults`]; this
//! module holds what the showcase application adds on top.
//!
//! # Categories
//!
//! - **Preset**: Card preset used when nothing else is configured
//! - **Tilt**: Bounds for the maximum tilt accepted from settings and CLI
//! - **Frame Loop**: Tick cadence while the card settles

use crate::domain::card::CardPreset;

// ==========================================================================
// Preset Defaults
// ==========================================================================

/// Preset applied before any `settings.toml` override.
pub const DEFAULT_PRESET: CardPreset = CardPreset::Component;

// ==========================================================================
// Tilt Bounds
// ==========================================================================

/// Minimum accepted maximum tilt, in degrees.
pub const MIN_MAX_ANGLE: f32 = 0.0;

/// Maximum accepted maximum tilt, in degrees. At 90 the card turns edge-on.
pub const MAX_MAX_ANGLE: f32 = 85.0;

// ==========================================================================
// Frame Loop Defaults
// ==========================================================================

/// Interval between animation ticks while settling, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_ANGLE >= 0.0);
    assert!(MAX_MAX_ANGLE > MIN_MAX_ANGLE);
    assert!(MAX_MAX_ANGLE < 90.0);
    assert!(TICK_INTERVAL_MS > 0);
};
