//! Configuration file support for crossinput.
//!
//! This module handles loading and validating settings from the configuration
//! file located at `~/.config/crossinput/config.toml`. Settings cover event
//! delivery (dispatch policy, queue capacity), the synthetic source's
//! capability flags, and replay output preferences.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::DispatchPolicy;
pub use types::{DispatchConfig, SourceConfig, TraceConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [dispatch]
/// policy = "queued"
/// queue_capacity = 512
///
/// [source]
/// pointer_lock = true
/// fullscreen = false
///
/// [trace]
/// show_state = true
/// ```
#[derive(Debug, Serialize, Deserialize, Default, schemars::JsonSchema)]
pub struct Config {
    /// Event delivery settings
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Synthetic source capability flags (replay tool)
    #[serde(default)]
    pub source: SourceConfig,

    /// Replay output preferences
    #[serde(default)]
    pub trace: TraceConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged.
    ///
    /// Validated ranges:
    /// - `dispatch.queue_capacity`: 1 - 65536
    fn validate_and_clamp(&mut self) {
        if !(1..=65536).contains(&self.dispatch.queue_capacity) {
            log::warn!(
                "Invalid queue_capacity {}, clamping to 1-65536 range",
                self.dispatch.queue_capacity
            );
            self.dispatch.queue_capacity = self.dispatch.queue_capacity.clamp(1, 65536);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/crossinput/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("crossinput");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/crossinput/config.toml`. If the file doesn't exist,
    /// returns a Config with default values. All loaded values are
    /// validated and clamped to acceptable ranges.
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

    /// Loads configuration from an explicit path.
    ///
    /// Used by the `--config` flag. Unlike [`Config::load`], a missing file
    /// is an error here, since the caller asked for that file specifically.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/crossinput/config.toml`. Creates the parent directory if
    /// it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// JSON schema for the configuration file, for editor integration and
    /// the `dump_config_schema` utility.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
