// SPDX-License-Identifier: MPL-2.0
//! Immutable per-card configuration.
//!
//! Every tunable of the card lives here: the clamp angle, parallax depth,
//! drag sensitivity, spring constants and sheen ranges. None of these values
//! is load-bearing; [`CardPreset`] bundles two tuned sets.

use crate::error::{Error, Result};
use crate::motion::{Span, SpringConfig};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Defaults
// =============================================================================

/// Default values for [`CardConfig`].
pub mod defaults {
    pub const WIDTH: f32 = 300.0;
    pub const HEIGHT: f32 = 450.0;
    /// Maximum tilt in degrees.
    pub const MAX_ANGLE: f32 = 12.0;
    /// Content parallax travel in pixels.
    pub const PARALLAX_OFFSET: f32 = 2.0;
    /// Share of `MAX_ANGLE` the content layer rotates back against the card.
    pub const COUNTER_ROTATION_RATIO: f32 = 0.1;
    /// Viewer distance for the card perspective, in pixels.
    pub const PERSPECTIVE: f32 = 1000.0;
    /// Degrees of tilt per pixel of drag.
    pub const SENSITIVITY: f32 = 0.3;
    /// Horizontal sheen travel in pixels of the sheen layer.
    pub const SHEEN_SLIDE: f32 = 120.0;
    pub const SHEEN_OPACITY_MIN: f32 = 0.2;
    pub const SHEEN_OPACITY_MAX: f32 = 0.5;
    /// Sheen over-scale so its edges stay hidden behind the card mask.
    pub const SHEEN_SCALE: f32 = 1.3;
}

// =============================================================================
// Parts
// =============================================================================

/// Which way the content layer shifts relative to the tilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParallaxDirection {
    /// Content moves against the tilt, as if it sat below the card surface.
    #[default]
    Inverted,
    /// Content moves with the tilt, as if it floated above the card.
    Follow,
}

/// Degrees of tilt produced per pixel of drag on each axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sensitivity {
    pub x: f32,
    pub y: f32,
}

impl Sensitivity {
    #[must_use]
    pub const fn uniform(value: f32) -> Self {
        Self { x: value, y: value }
    }
}

impl Default for Sensitivity {
    fn default() -> Self {
        Self::uniform(defaults::SENSITIVITY)
    }
}

/// Light-reflection overlay tunables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheenConfig {
    pub slide: f32,
    pub opacity_min: f32,
    pub opacity_max: f32,
    pub scale: f32,
}

impl SheenConfig {
    /// Horizontal travel, from full left tilt to full right tilt.
    #[must_use]
    pub fn slide_span(&self) -> Span {
        Span::new(self.slide, -self.slide)
    }

    #[must_use]
    pub fn opacity_span(&self) -> Span {
        Span::new(self.opacity_min, self.opacity_max)
    }
}

impl Default for SheenConfig {
    fn default() -> Self {
        Self {
            slide: defaults::SHEEN_SLIDE,
            opacity_min: defaults::SHEEN_OPACITY_MIN,
            opacity_max: defaults::SHEEN_OPACITY_MAX,
            scale: defaults::SHEEN_SCALE,
        }
    }
}

// =============================================================================
// CardConfig
// =============================================================================

/// Configuration of one tilt card, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardConfig {
    pub width: f32,
    pub height: f32,
    pub max_angle: f32,
    pub parallax_offset: f32,
    pub parallax: ParallaxDirection,
    pub counter_rotation_ratio: f32,
    pub perspective: f32,
    pub sensitivity: Sensitivity,
    pub spring: SpringConfig,
    pub sheen: SheenConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            width: defaults::WIDTH,
            height: defaults::HEIGHT,
            max_angle: defaults::MAX_ANGLE,
            parallax_offset: defaults::PARALLAX_OFFSET,
            parallax: ParallaxDirection::default(),
            counter_rotation_ratio: defaults::COUNTER_ROTATION_RATIO,
            perspective: defaults::PERSPECTIVE,
            sensitivity: Sensitivity::default(),
            spring: SpringConfig::default(),
            sheen: SheenConfig::default(),
        }
    }
}

impl CardConfig {
    #[must_use]
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_max_angle(mut self, max_angle: f32) -> Self {
        self.max_angle = max_angle;
        self
    }

    #[must_use]
    pub fn with_parallax_offset(mut self, offset: f32) -> Self {
        self.parallax_offset = offset;
        self
    }

    #[must_use]
    pub fn with_parallax(mut self, direction: ParallaxDirection) -> Self {
        self.parallax = direction;
        self
    }

    #[must_use]
    pub fn with_counter_rotation_ratio(mut self, ratio: f32) -> Self {
        self.counter_rotation_ratio = ratio;
        self
    }

    #[must_use]
    pub fn with_perspective(mut self, perspective: f32) -> Self {
        self.perspective = perspective;
        self
    }

    #[must_use]
    pub fn with_sensitivity(mut self, sensitivity: Sensitivity) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    #[must_use]
    pub fn with_spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    #[must_use]
    pub fn with_sheen(mut self, sheen: SheenConfig) -> Self {
        self.sheen = sheen;
        self
    }

    /// Tilt range `[-max_angle, max_angle]`.
    #[must_use]
    pub fn angle_span(&self) -> Span {
        Span::symmetric(self.max_angle)
    }

    /// Content translation range for a tilt sweeping from `-max_angle` to `max_angle`.
    #[must_use]
    pub fn parallax_span(&self) -> Span {
        let inverted = Span::new(self.parallax_offset, -self.parallax_offset);
        match self.parallax {
            ParallaxDirection::Inverted => inverted,
            ParallaxDirection::Follow => inverted.reversed(),
        }
    }

    /// Content counter-rotation range for a tilt sweeping from `-max_angle` to `max_angle`.
    #[must_use]
    pub fn counter_rotation_span(&self) -> Span {
        let limit = self.max_angle * self.counter_rotation_ratio;
        Span::new(limit, -limit)
    }

    /// Rejects values the composer and spring cannot work with.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCard`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        fn non_negative(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidCard(format!(
                    "{name} must be a finite non-negative number, got {value}"
                )))
            }
        }

        fn positive(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(Error::InvalidCard(format!(
                    "{name} must be a finite positive number, got {value}"
                )))
            }
        }

        positive("width", self.width)?;
        positive("height", self.height)?;
        non_negative("max_angle", self.max_angle)?;
        non_negative("parallax_offset", self.parallax_offset)?;
        non_negative("counter_rotation_ratio", self.counter_rotation_ratio)?;
        positive("perspective", self.perspective)?;
        non_negative("sensitivity.x", self.sensitivity.x)?;
        non_negative("sensitivity.y", self.sensitivity.y)?;
        positive("spring.mass", self.spring.mass)?;
        positive("spring.stiffness", self.spring.stiffness)?;
        positive("spring.damping", self.spring.damping)?;
        non_negative("sheen.slide", self.sheen.slide)?;
        non_negative("sheen.opacity_min", self.sheen.opacity_min)?;
        non_negative("sheen.opacity_max", self.sheen.opacity_max)?;
        positive("sheen.scale", self.sheen.scale)?;

        if self.sheen.opacity_min > self.sheen.opacity_max || self.sheen.opacity_max > 1.0 {
            return Err(Error::InvalidCard(format!(
                "sheen opacity range must satisfy min <= max <= 1, got {}..{}",
                self.sheen.opacity_min, self.sheen.opacity_max
            )));
        }
        Ok(())
    }
}

// =============================================================================
// Presets
// =============================================================================

/// Tuned configuration sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardPreset {
    /// Subtle reusable card: small tilt, content sunk below the surface.
    #[default]
    Component,
    /// Large demo card: wide tilt, content floating above the surface.
    Showcase,
}

impl CardPreset {
    pub const ALL: [CardPreset; 2] = [CardPreset::Component, CardPreset::Showcase];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CardPreset::Component => "component",
            CardPreset::Showcase => "showcase",
        }
    }

    #[must_use]
    pub fn config(self) -> CardConfig {
        match self {
            CardPreset::Component => CardConfig::default()
                .with_max_angle(12.0)
                .with_parallax_offset(2.0)
                .with_sensitivity(Sensitivity::uniform(0.4)),
            CardPreset::Showcase => CardConfig::default()
                .with_size(320.0, 480.0)
                .with_max_angle(30.0)
                .with_parallax_offset(20.0)
                .with_parallax(ParallaxDirection::Follow)
                .with_counter_rotation_ratio(0.0)
                .with_sensitivity(Sensitivity::uniform(0.2))
                .with_sheen(SheenConfig {
                    opacity_max: 0.25,
                    ..SheenConfig::default()
                }),
        }
    }
}

impl fmt::Display for CardPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CardPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        CardPreset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::Config(format!("unknown card preset: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(CardConfig::default().validate(), Ok(()));
    }

    #[test]
    fn presets_are_valid() {
        for preset in CardPreset::ALL {
            assert_eq!(preset.config().validate(), Ok(()), "{preset}");
        }
    }

    #[test]
    fn zero_max_angle_is_accepted() {
        assert!(CardConfig::default().with_max_angle(0.0).validate().is_ok());
    }

    #[test]
    fn negative_max_angle_is_rejected() {
        let err = CardConfig::default()
            .with_max_angle(-1.0)
            .validate()
            .expect_err("negative angle must be rejected");
        assert!(matches!(err, Error::InvalidCard(message) if message.contains("max_angle")));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(CardConfig::default()
            .with_max_angle(f32::NAN)
            .validate()
            .is_err());
        assert!(CardConfig::default()
            .with_perspective(f32::INFINITY)
            .validate()
            .is_err());
    }

    #[test]
    fn zero_mass_is_rejected() {
        let config = CardConfig::default().with_spring(SpringConfig::new(0.0, 120.0, 18.0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn undamped_spring_is_rejected() {
        let config = CardConfig::default().with_spring(SpringConfig::new(1.0, 120.0, 0.0));
        assert!(matches!(config.validate(), Err(Error::InvalidCard(_))));
    }

    #[test]
    fn inverted_opacity_range_is_rejected() {
        let config = CardConfig::default().with_sheen(SheenConfig {
            opacity_min: 0.6,
            opacity_max: 0.3,
            ..SheenConfig::default()
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn parallax_span_follows_direction() {
        let config = CardConfig::default().with_parallax_offset(5.0);
        assert_eq!(config.parallax_span(), Span::new(5.0, -5.0));
        let follow = config.with_parallax(ParallaxDirection::Follow);
        assert_eq!(follow.parallax_span(), Span::new(-5.0, 5.0));
    }

    #[test]
    fn counter_rotation_span_scales_with_max_angle() {
        let config = CardConfig::default().with_max_angle(10.0);
        let span = config.counter_rotation_span();
        assert!((span.from - 1.0).abs() < 1e-6);
        assert!((span.to + 1.0).abs() < 1e-6);
    }

    #[test]
    fn preset_parses_case_insensitively() {
        assert_eq!("Showcase".parse::<CardPreset>(), Ok(CardPreset::Showcase));
        assert_eq!(" component ".parse::<CardPreset>(), Ok(CardPreset::Component));
        assert!("holographic".parse::<CardPreset>().is_err());
    }
}
