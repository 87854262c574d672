//! Unified error types for silo-filter.
//!
//! Compiling a filter never fails. Errors only come from the edges: reading
//! configuration, decoding schemas and strict parsing of user tokens.

use silo_filter_core::FilterError;
use silo_filter_wire::DecodeError;
use thiserror::Error;

/// All silo-filter errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid operator, combinator or schema entry
    #[error("invalid input: {0}")]
    InvalidInput(#[from] FilterError),

    /// Collection schema could not be decoded
    #[error("schema error: {0}")]
    Schema(#[from] DecodeError),

    /// Configuration file could not be parsed
    #[error("config error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result type for silo-filter operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error came from user-supplied tokens or schema entries.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_) | Error::Schema(_))
    }

    /// Check if this is a configuration error.
    pub fn is_config(&self) -> bool {
        matches!(self, Error::Config(_))
    }
}

// Convert from TOML errors
impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config(e.to_string())
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
