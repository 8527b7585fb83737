// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::card::CardPreset;
use crate::ui::widgets::CardEvent;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer interaction on the card canvas.
    Card(CardEvent),
    /// Frame tick while the card settles.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Card preset, overriding the `preset` key of `settings.toml`.
    pub preset: Option<CardPreset>,
    /// Maximum tilt in degrees, overriding every other source.
    pub max_angle: Option<f32>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TILT_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Write `preset` and `max_angle` back to `settings.toml` before launching.
    pub save_config: bool,
}
