//! Error types for the layers around the engine
//!
//! The engine itself never fails: divide-by-zero and friends surface as
//! `Infinity`/`NaN` on the display. These errors cover turning outside input
//! (key tokens, config files) into engine calls.

use thiserror::Error;

/// Result type for keycalc operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur outside the engine
#[derive(Debug, Error)]
pub enum CalcError {
    /// A key token that maps to no command
    #[error("Unknown key: '{token}'")]
    UnknownToken {
        /// The offending token
        token: String,
    },

    /// A digit outside 0-9
    #[error("Invalid digit: {0} (expected 0-9)")]
    InvalidDigit(u8),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// IO error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML config could not be parsed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CalcError {
    /// Create an unknown-token error
    #[must_use]
    pub fn unknown_token(token: impl Into<String>) -> Self {
        Self::UnknownToken {
            token: token.into(),
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
