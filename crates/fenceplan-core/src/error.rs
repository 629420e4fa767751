//! Error handling for Fenceplan core types
//!
//! The calculations themselves never fail. Errors only arise when text is
//! parsed into one of the closed vocabularies (units, sides, plinth systems,
//! panel types).

use thiserror::Error;

/// Main error type for Fenceplan core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Length unit is not mm, cm or m
    #[error("Unknown length unit: {0}")]
    InvalidUnit(String),

    /// Side name is not one of front, right, back, left
    #[error("Unknown side: {0}")]
    InvalidSide(String),

    /// Plinth system name is not recognized
    #[error("Unknown plinth system: {0}")]
    InvalidSystem(String),

    /// Panel type is not 2D or 3D
    #[error("Unknown panel type: {0}")]
    InvalidPanelType(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
