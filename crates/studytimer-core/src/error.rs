//! Core error types for studytimer-core.
//!
//! Errors are split by concern with thiserror. Validation messages are
//! user-facing and are shown verbatim by the front end.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studytimer-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Schedule input rejected
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// Boundary cue backend errors
    #[error("Cue error: {0}")]
    Cue(#[from] CueError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("TOML write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Home/config directory could not be prepared
    #[error("Config directory unavailable: {0}")]
    DirUnavailable(String),
}

/// Validation errors raised while building a schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// One of the form inputs is out of range or does not parse.
    #[error("{0}")]
    InvalidInput(String),
}

impl ValidationError {
    pub(crate) fn invalid(message: &str) -> Self {
        ValidationError::InvalidInput(message.to_string())
    }

    /// The user-facing message.
    pub fn message(&self) -> &str {
        match self {
            ValidationError::InvalidInput(m) => m,
        }
    }
}

/// Boundary cue errors. Never fatal to the countdown.
#[derive(Error, Debug)]
pub enum CueError {
    /// No audio output could be opened (or it failed earlier).
    #[error("audio output unavailable: {0}")]
    Unavailable(String),

    /// The output exists but playing the cue failed.
    #[error("failed to play cue: {0}")]
    Playback(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
