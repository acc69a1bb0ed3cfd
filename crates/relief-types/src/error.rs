//! Error types for the relief crates.
//!
//! All crates return `ReliefResult<T>` from fallible operations.

use thiserror::Error;

/// Unified error type for the relief crates.
#[derive(Debug, Error)]
pub enum ReliefError {
    /// Construction parameter is out of its valid range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Mesh data is malformed or inconsistent.
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),

    /// A mesh file could not be parsed.
    #[error("Parse error on line {line}: {message}")]
    Parse {
        line: usize,
        message: String,
    },

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ReliefError {
    /// Shorthand for building an [`ReliefError::InvalidConfig`].
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

/// Convenience alias for `Result<T, ReliefError>`.
pub type ReliefResult<T> = Result<T, ReliefError>;
