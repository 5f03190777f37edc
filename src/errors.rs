//! Error types for rotmin
//!
//! Library operations return [`Result`]; the binary wraps these in `anyhow`.

use thiserror::Error;

/// Main error type for the rotmin library
#[derive(Error, Debug)]
pub enum FinderError {
    /// Searching an empty sequence has no defined answer
    #[error("Cannot search an empty sequence")]
    EmptySequence,

    /// Input token that is not an integer
    #[error("Invalid number '{token}' at position {position}")]
    InvalidNumber { token: String, position: usize },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type alias for rotmin operations
pub type Result<T> = std::result::Result<T, FinderError>;
