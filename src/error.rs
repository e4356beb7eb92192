//! Error types and handling.

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Host print command failed
    #[error("Print error: {0}")]
    Print(String),

    /// Logging setup failed
    #[error("Logging error: {0}")]
    Logging(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a print error with message
    pub fn print(msg: impl Into<String>) -> Self {
        Self::Print(msg.into())
    }

    /// Create a logging error with message
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
