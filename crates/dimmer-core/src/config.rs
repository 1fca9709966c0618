//! Configuration types.
//!
//! Dimming behaviour can be adjusted through an optional `dimmer.toml` in
//! the platform config directory. A missing file falls back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Opacity applied to inactive items when no override is configured.
pub const DEFAULT_INACTIVE_OPACITY: f32 = 0.2;

/// Runtime configuration for dimming behaviour.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimmerConfig {
    /// Opacity applied to non-active items while dimming is enabled.
    #[serde(default = "default_inactive_opacity")]
    pub inactive_opacity: f32,
}

impl Default for DimmerConfig {
    fn default() -> Self {
        Self {
            inactive_opacity: DEFAULT_INACTIVE_OPACITY,
        }
    }
}

fn default_inactive_opacity() -> f32 {
    DEFAULT_INACTIVE_OPACITY
}

impl DimmerConfig {
    /// Check that configured values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.inactive_opacity) {
            return Err(ConfigError::InvalidOpacity(self.inactive_opacity));
        }
        Ok(())
    }

    /// Load configuration from `dimmer.toml`, falling back to defaults when
    /// the file does not exist.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            Some(_) => Ok(Self::default()),
            None => Err(ConfigError::NoConfigDir),
        }
    }

    /// Load configuration from a specific TOML file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        let config: Self = toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("dimmer"))
}

/// Get the path to `dimmer.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("dimmer.toml"))
}
