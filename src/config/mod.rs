// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language
//! - `[uploader]` - Accepted formats and error display duration
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `ICED_DROPZONE_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_dropzone::config;
//!
//! let (mut config, _warning) = config::load();
//! config.uploader.error_display_ms = Some(2_000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Uploader widget settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct UploaderConfig {
    /// Accepted file extensions, lowercase and without a leading dot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accepted_formats: Option<Vec<String>>,

    /// How long the invalid-file panel stays visible, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_display_ms: Option<u64>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub uploader: UploaderConfig,
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with the i18n key of a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
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
    if let Some(path) = config_path_with_override(base_dir) {
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
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
            },
            uploader: UploaderConfig {
                accepted_formats: Some(vec!["png".to_string(), "webp".to_string()]),
                error_display_ms: Some(1_500),
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

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[uploader]\nerror_display_ms = 900\n")
            .expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.general, GeneralConfig::default());
        assert_eq!(loaded.uploader.accepted_formats, None);
        assert_eq!(loaded.uploader.error_display_ms, Some(900));
    }

    #[test]
    fn load_with_override_reports_warning_for_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[uploader\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_without_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn default_config_leaves_uploader_unset() {
        let config = Config::default();
        assert!(config.uploader.accepted_formats.is_none());
        assert!(config.uploader.error_display_ms.is_none());
    }
}
