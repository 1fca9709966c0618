//! Error types for the dimmer crates.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Opacity outside the `0.0..=1.0` range.
    #[error("Invalid inactive opacity: {0}")]
    InvalidOpacity(f32),
}
