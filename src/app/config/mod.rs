// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, loading and saving
//! card tunables to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - top-level `preset` - Base card preset (`component` or `showcase`)
//! - `[card]` - Size, tilt limit, parallax, counter-rotation, perspective
//! - `[gesture]` - Drag sensitivity per axis
//! - `[spring]` - Return-to-rest spring constants
//! - `[sheen]` - Light-reflection slide, opacity range and scale
//!
//! Every field is optional. The effective card is the preset's
//! configuration with each present field written over it.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `ICED_TILT_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_tilt::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.card.max_angle = Some(20.0);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::domain::card::{CardConfig, CardPreset, ParallaxDirection, Sensitivity};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Which way the content layer shifts, as written in `settings.toml`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Parallax {
    #[default]
    Inverted,
    Follow,
}

impl From<Parallax> for ParallaxDirection {
    fn from(parallax: Parallax) -> Self {
        match parallax {
            Parallax::Inverted => ParallaxDirection::Inverted,
            Parallax::Follow => ParallaxDirection::Follow,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Card geometry and tilt response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CardSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,

    /// Maximum tilt in degrees on each axis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_angle: Option<f32>,

    /// Content parallax travel in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallax_offset: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallax: Option<Parallax>,

    /// Share of the tilt the content rotates back against the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counter_rotation_ratio: Option<f32>,

    /// Viewer distance in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub perspective: Option<f32>,
}

/// Drag-to-tilt response.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GestureSettings {
    /// Degrees of yaw per horizontal pixel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity_x: Option<f32>,

    /// Degrees of pitch per vertical pixel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensitivity_y: Option<f32>,
}

/// Return-to-rest spring constants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SpringSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mass: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stiffness: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub damping: Option<f32>,
}

/// Light-reflection overlay.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SheenSettings {
    /// Horizontal travel in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slide: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity_min: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity_max: Option<f32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f32>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Base preset name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    #[serde(default)]
    pub card: CardSettings,

    #[serde(default)]
    pub gesture: GestureSettings,

    #[serde(default)]
    pub spring: SpringSettings,

    #[serde(default)]
    pub sheen: SheenSettings,
}

impl Config {
    /// Preset named in the file, or [`DEFAULT_PRESET`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the name is not a known preset.
    pub fn preset(&self) -> Result<CardPreset> {
        self.preset
            .as_deref()
            .map_or(Ok(DEFAULT_PRESET), str::parse)
    }

    /// Builds the card configuration: `preset` (or the file's preset) with
    /// every present field written over it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] for an unknown preset or an out-of-bounds
    /// `max_angle`, and [`Error::InvalidCard`] if the result fails
    /// [`CardConfig::validate`].
    pub fn card_config(&self, preset: Option<CardPreset>) -> Result<CardConfig> {
        let preset = match preset {
            Some(preset) => preset,
            None => self.preset()?,
        };
        let mut card = preset.config();

        let settings = &self.card;
        card = card.with_size(
            settings.width.unwrap_or(card.width),
            settings.height.unwrap_or(card.height),
        );
        if let Some(max_angle) = settings.max_angle {
            card = card.with_max_angle(checked_max_angle(max_angle)?);
        }
        if let Some(offset) = settings.parallax_offset {
            card = card.with_parallax_offset(offset);
        }
        if let Some(parallax) = settings.parallax {
            card = card.with_parallax(parallax.into());
        }
        if let Some(ratio) = settings.counter_rotation_ratio {
            card = card.with_counter_rotation_ratio(ratio);
        }
        if let Some(perspective) = settings.perspective {
            card = card.with_perspective(perspective);
        }

        card = card.with_sensitivity(Sensitivity {
            x: self.gesture.sensitivity_x.unwrap_or(card.sensitivity.x),
            y: self.gesture.sensitivity_y.unwrap_or(card.sensitivity.y),
        });

        let mut spring = card.spring;
        spring.mass = self.spring.mass.unwrap_or(spring.mass);
        spring.stiffness = self.spring.stiffness.unwrap_or(spring.stiffness);
        spring.damping = self.spring.damping.unwrap_or(spring.damping);
        card = card.with_spring(spring);

        let mut sheen = card.sheen;
        sheen.slide = self.sheen.slide.unwrap_or(sheen.slide);
        sheen.opacity_min = self.sheen.opacity_min.unwrap_or(sheen.opacity_min);
        sheen.opacity_max = self.sheen.opacity_max.unwrap_or(sheen.opacity_max);
        sheen.scale = self.sheen.scale.unwrap_or(sheen.scale);
        card = card.with_sheen(sheen);

        card.validate()?;
        Ok(card)
    }
}

/// Accepts a maximum tilt within [`MIN_MAX_ANGLE`]..=[`MAX_MAX_ANGLE`].
///
/// # Errors
///
/// Returns [`Error::Config`] for values outside the bounds or non-finite values.
pub fn checked_max_angle(degrees: f32) -> Result<f32> {
    if degrees.is_finite() && (MIN_MAX_ANGLE..=MAX_MAX_ANGLE).contains(&degrees) {
        Ok(degrees)
    } else {
        Err(Error::Config(format!(
            "max_angle must be between {MIN_MAX_ANGLE} and {MAX_MAX_ANGLE} degrees, got {degrees}"
        )))
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            log::info!("loading settings from {}", path.display());
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    return (
                        Config::default(),
                        Some(format!("ignoring {}: {err}", path.display())),
                    );
                }
            }
        }
        log::debug!("no settings file at {}", path.display());
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Config`]
/// if it is not valid TOML for [`Config`].
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_config_yields_default_preset() {
        let card = Config::default().card_config(None).unwrap();
        assert_eq!(card, DEFAULT_PRESET.config());
    }

    #[test]
    fn file_preset_is_used_when_no_override() {
        let config = Config {
            preset: Some("Showcase".to_string()),
            ..Config::default()
        };
        let card = config.card_config(None).unwrap();
        assert_eq!(card.max_angle, 30.0);
    }

    #[test]
    fn explicit_preset_beats_file_preset() {
        let config = Config {
            preset: Some("showcase".to_string()),
            ..Config::default()
        };
        let card = config.card_config(Some(CardPreset::Component)).unwrap();
        assert_eq!(card, CardPreset::Component.config());
    }

    #[test]
    fn unknown_preset_is_a_config_error() {
        let config = Config {
            preset: Some("holographic".to_string()),
            ..Config::default()
        };
        assert!(matches!(config.card_config(None), Err(Error::Config(_))));
    }

    #[test]
    fn present_fields_override_preset() {
        let config = Config {
            card: CardSettings {
                width: Some(200.0),
                parallax: Some(Parallax::Follow),
                ..CardSettings::default()
            },
            gesture: GestureSettings {
                sensitivity_y: Some(0.1),
                ..GestureSettings::default()
            },
            spring: SpringSettings {
                damping: Some(10.0),
                ..SpringSettings::default()
            },
            ..Config::default()
        };
        let card = config.card_config(Some(CardPreset::Component)).unwrap();
        let base = CardPreset::Component.config();

        assert_eq!(card.width, 200.0);
        assert_eq!(card.height, base.height);
        assert_eq!(card.parallax, ParallaxDirection::Follow);
        assert_eq!(card.sensitivity.x, base.sensitivity.x);
        assert_eq!(card.sensitivity.y, 0.1);
        assert_eq!(card.spring.damping, 10.0);
        assert_eq!(card.spring.stiffness, base.spring.stiffness);
    }

    #[test]
    fn invalid_override_fails_validation() {
        let config = Config {
            spring: SpringSettings {
                mass: Some(0.0),
                ..SpringSettings::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            config.card_config(None),
            Err(Error::InvalidCard(_))
        ));
    }

    #[test]
    fn max_angle_bounds_are_enforced() {
        assert_eq!(checked_max_angle(15.0), Ok(15.0));
        assert!(checked_max_angle(-1.0).is_err());
        assert!(checked_max_angle(90.0).is_err());
        assert!(checked_max_angle(f32::NAN).is_err());
    }

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            preset: Some("showcase".to_string()),
            card: CardSettings {
                max_angle: Some(20.0),
                parallax: Some(Parallax::Inverted),
                ..CardSettings::default()
            },
            sheen: SheenSettings {
                opacity_max: Some(0.4),
                ..SheenSettings::default()
            },
            ..Config::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn save_with_override_writes_settings_file_in_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let base = temp_dir.path().join("fresh");
        let config = Config {
            preset: Some("component".to_string()),
            ..Config::default()
        };

        save_with_override(&config, Some(base.clone())).expect("failed to save config");
        assert!(base.join(CONFIG_FILE).exists());

        let (loaded, warning) = load_with_override(Some(base));
        assert!(warning.is_none());
        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[card]\nmax_angle = \"steep\"")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn sections_parse_from_toml() {
        let toml = r#"
            preset = "component"

            [card]
            max_angle = 18.0
            parallax = "follow"

            [spring]
            stiffness = 200.0
        "#;
        let config: Config = toml::from_str(toml).expect("valid config");
        assert_eq!(config.card.max_angle, Some(18.0));
        assert_eq!(config.card.parallax, Some(Parallax::Follow));
        assert_eq!(config.spring.stiffness, Some(200.0));
        assert_eq!(config.sheen, SheenSettings::default());
    }
}
