// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[overlay]` - Backdrop colour, horizontal padding and placeholder toggle
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument
//! 3. Set `ICED_LIGHTBOX_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_lightbox::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Lightbox overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Backdrop colour as `#RGB`, `#RRGGBB` or `#RRGGBBAA`.
    #[serde(default = "default_background", skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    /// Horizontal padding around the slide, in pixels.
    #[serde(default = "default_padding", skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,

    /// Draw the checkerboard placeholder beneath images.
    #[serde(default = "default_placeholder", skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<bool>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            background: default_background(),
            padding: default_padding(),
            placeholder: default_placeholder(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,
}

fn default_background() -> Option<String> {
    Some(DEFAULT_BACKGROUND_HEX.to_string())
}

fn default_padding() -> Option<f32> {
    Some(DEFAULT_OVERLAY_PADDING)
}

fn default_placeholder() -> Option<bool> {
    Some(DEFAULT_PLACEHOLDER_ENABLED)
}

/// Keeps persisted padding inside the supported range.
#[must_use]
pub fn clamp_padding(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(MIN_OVERLAY_PADDING, MAX_OVERLAY_PADDING)
    } else {
        DEFAULT_OVERLAY_PADDING
    }
}

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "failed to load config");
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
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Writes a default `settings.toml` unless one already exists.
///
/// Returns the path of the config file, or `None` if no config directory
/// could be determined.
pub fn init_default(base_dir: Option<PathBuf>) -> Result<Option<PathBuf>> {
    let Some(path) = get_config_path_with_override(base_dir) else {
        return Ok(None);
    };
    if !path.exists() {
        save_to_path(&Config::default(), &path)?;
        tracing::info!(path = %path.display(), "wrote default config");
    }
    Ok(Some(path))
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
