// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! toast preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let (mut config, warning) = config::load().unwrap_or_default();
//! if let Some(warning) = warning {
//!     eprintln!("{warning}");
//! }
//!
//! // Keep toasts on screen a little longer
//! config.default_duration_ms = Some(6000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_file = PathBuf::from("./temp_config_dir/test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let (loaded_config, _) = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.default_duration_ms, Some(6000));
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedToast";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub default_duration_ms: Option<u64>,
    #[serde(default)]
    pub log_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_duration_ms: Some(DEFAULT_DURATION_MS),
            log_level: None,
        }
    }
}

impl Config {
    /// Returns the configured display duration, clamped to the allowed range.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        let ms = self
            .default_duration_ms
            .unwrap_or(DEFAULT_DURATION_MS)
            .clamp(MIN_DURATION_MS, MAX_DURATION_MS);
        Duration::from_millis(ms)
    }

    /// Returns the configured log level, falling back to `info` when the
    /// value is missing or not a recognized level name.
    #[must_use]
    pub fn log_level(&self) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.trim().parse().ok())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.parse().unwrap_or(log::LevelFilter::Info))
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the platform config directory.
///
/// The second value carries a warning when the file existed but could not be
/// parsed and the defaults were used instead. Callers log it once a logger is
/// installed.
pub fn load() -> Result<(Config, Option<String>)> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok((Config::default(), None))
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Loads a configuration file. Unparsable content yields the defaults and a warning.
pub fn load_from_path(path: &Path) -> Result<(Config, Option<String>)> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok((config, None)),
        Err(err) => {
            let warning = format!(
                "Ignoring invalid config at {}: {}",
                path.display(),
                err.message()
            );
            Ok((Config::default(), Some(warning)))
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
