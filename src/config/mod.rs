//! Configuration file support for wallscriber.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/wallscriber/config.toml`. Settings cover snapping and
//! intersection splitting.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{SnapConfig, SplitConfig};

use crate::util::MAX_KEY_PRECISION;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [snap]
/// enabled = true
/// radius = 30.0
/// project_onto_walls = true
///
/// [split]
/// key_precision = 6
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Snapping settings
    #[serde(default)]
    pub snap: SnapConfig,

    /// Intersection splitting settings
    #[serde(default)]
    pub split: SplitConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `snap.radius`: 1.0 - 500.0
    /// - `split.key_precision`: 0 - 12
    fn validate_and_clamp(&mut self) {
        // Snap radius: 1.0 - 500.0 (NaN falls back to the default)
        if self.snap.radius.is_nan() {
            log::warn!("Invalid snap radius NaN, using default");
            self.snap.radius = SnapConfig::default().radius;
        } else if !(1.0..=500.0).contains(&self.snap.radius) {
            log::warn!(
                "Invalid snap radius {:.1}, clamping to 1.0-500.0 range",
                self.snap.radius
            );
            self.snap.radius = self.snap.radius.clamp(1.0, 500.0);
        }

        // Key precision: 0 - 12 decimal places
        if self.split.key_precision > MAX_KEY_PRECISION {
            log::warn!(
                "Invalid key_precision {}, clamping to 0-{} range",
                self.split.key_precision,
                MAX_KEY_PRECISION
            );
            self.split.key_precision = MAX_KEY_PRECISION;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/wallscriber/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("wallscriber");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. The file must exist.
    ///
    /// All loaded values are validated and clamped to acceptable ranges.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the configuration to `path` as TOML, creating parent directories.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
