// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`widgets`] - The tilt card canvas program
//! - [`styles`] - Container styles for the showcase window
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod styles;
pub mod widgets;
