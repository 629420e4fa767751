//! Error types for the settings crate.
//!
//! This module provides structured error types for plan file loading,
//! saving, and validation.

use std::io;
use thiserror::Error;

/// Errors that can occur while reading or writing plan files.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The plan directory could not be resolved or created.
    #[error("Config directory error: {0}")]
    ConfigDirectory(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// TOML deserialization error.
    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSerError(#[from] toml::ser::Error),

    /// The plan file content is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to plan file validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// The plan file format is not supported.
    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    /// A corrugation table height can never match a rounded panel height.
    #[error("Corrugation table height {height} mm is not a multiple of {step} mm")]
    InvalidCorrugationHeight { height: u32, step: u32 },

    /// A value is out of its valid range.
    #[error("Value out of range for '{key}': {value}")]
    ValueOutOfRange { key: String, value: String },
}

/// Result type alias for settings operations.
pub type SettingsResult<T> = Result<T, SettingsError>;
