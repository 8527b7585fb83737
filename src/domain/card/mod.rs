// SPDX-License-Identifier: MPL-2.0
//! Card domain types.
//!
//! Value objects describing a tilt card independently of any presentation
//! framework: its configuration and its mutable tilt.

pub mod config;
pub mod state;

pub use config::{CardConfig, CardPreset, ParallaxDirection, Sensitivity, SheenConfig};
pub use state::{DragSample, TiltState};
