// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[lightbox]` - Overlay close activation policy
//! - `[slideshow]` - Auto-advance interval and hover pause
//! - `[clock]` - Date/time display and where the year is shown
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. `ICED_STOREFRONT_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_storefront::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! config.general.language = Some("fr".to_string());
//! config::save_to_path(&config, std::path::Path::new("settings.toml"))
//!     .expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Which presses inside the lightbox overlay close it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CloseActivation {
    /// Only the overlay background and the close control close the lightbox.
    #[default]
    BackgroundOnly,
    /// Any press inside the overlay closes it, except the navigation controls.
    AnyClick,
}

/// Where the current year is written.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum YearTargets {
    /// Footer only.
    First,
    /// Footer and header.
    #[default]
    All,
}

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Lightbox overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LightboxConfig {
    #[serde(default)]
    pub close_activation: CloseActivation,
}

/// Hero slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SlideshowConfig {
    /// Seconds between automatic advances.
    #[serde(
        default = "default_slideshow_interval",
        skip_serializing_if = "Option::is_none"
    )]
    pub interval_secs: Option<u32>,

    /// Pause auto-advance while the pointer is over the slideshow.
    #[serde(
        default = "default_pause_on_hover",
        skip_serializing_if = "Option::is_none"
    )]
    pub pause_on_hover: Option<bool>,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_slideshow_interval(),
            pause_on_hover: default_pause_on_hover(),
        }
    }
}

impl SlideshowConfig {
    /// Interval clamped to the supported range.
    #[must_use]
    pub fn interval_secs(&self) -> u32 {
        self.interval_secs
            .unwrap_or(DEFAULT_SLIDESHOW_INTERVAL_SECS)
            .clamp(MIN_SLIDESHOW_INTERVAL_SECS, MAX_SLIDESHOW_INTERVAL_SECS)
    }
}

/// Date/time display settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClockConfig {
    #[serde(default)]
    pub year_targets: YearTargets,

    #[serde(default = "default_show_date_time")]
    pub show_date_time: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            year_targets: YearTargets::default(),
            show_date_time: default_show_date_time(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub slideshow: SlideshowConfig,

    #[serde(default)]
    pub clock: ClockConfig,
}

fn default_slideshow_interval() -> Option<u32> {
    Some(DEFAULT_SLIDESHOW_INTERVAL_SECS)
}

fn default_pause_on_hover() -> Option<bool> {
    Some(true)
}

fn default_show_date_time() -> bool {
    true
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), %err, "falling back to default config");
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            lightbox: LightboxConfig {
                close_activation: CloseActivation::AnyClick,
            },
            slideshow: SlideshowConfig {
                interval_secs: Some(7),
                pause_on_hover: Some(false),
            },
            clock: ClockConfig {
                year_targets: YearTargets::First,
                show_date_time: false,
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[lightbox]\nclose_activation = 3")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_uses_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[lightbox]\nclose_activation = \"any-click\"\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.lightbox.close_activation, CloseActivation::AnyClick);
        assert_eq!(
            loaded.slideshow.interval_secs,
            Some(DEFAULT_SLIDESHOW_INTERVAL_SECS)
        );
        assert_eq!(loaded.slideshow.pause_on_hover, Some(true));
        assert!(loaded.clock.show_date_time);
        assert_eq!(loaded.clock.year_targets, YearTargets::All);
    }

    #[test]
    fn slideshow_interval_is_clamped() {
        let slideshow = SlideshowConfig {
            interval_secs: Some(0),
            pause_on_hover: None,
        };
        assert_eq!(slideshow.interval_secs(), MIN_SLIDESHOW_INTERVAL_SECS);

        let slideshow = SlideshowConfig {
            interval_secs: Some(10_000),
            pause_on_hover: None,
        };
        assert_eq!(slideshow.interval_secs(), MAX_SLIDESHOW_INTERVAL_SECS);
    }

    #[test]
    fn default_close_activation_is_background_only() {
        assert_eq!(
            Config::default().lightbox.close_activation,
            CloseActivation::BackgroundOnly
        );
    }
}
