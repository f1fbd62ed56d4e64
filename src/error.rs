//! Error types for anonboard.

use thiserror::Error;

/// Common error type for anonboard.
///
/// Deterministic control outcomes (`ThreadNotFound`, `ReplyNotFound`,
/// `IncorrectPassword`) are modeled as variants so the web layer can map
/// them to the literal response tokens the API contract requires.
#[derive(Error, Debug)]
pub enum AnonboardError {
    /// Database error.
    ///
    /// Generic wrapper for storage backend failures. Errors from sqlx are
    /// automatically converted.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// The requested thread does not exist.
    #[error("thread not found")]
    ThreadNotFound,

    /// The requested reply does not exist within its thread.
    #[error("reply not found")]
    ReplyNotFound,

    /// The supplied delete password did not match the stored one.
    #[error("incorrect password")]
    IncorrectPassword,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for AnonboardError {
    fn from(e: sqlx::Error) -> Self {
        AnonboardError::Database(e.to_string())
    }
}

/// Result type alias for anonboard operations.
pub type Result<T> = std::result::Result<T, AnonboardError>;
