//! Error types for greenforest.

use thiserror::Error;

/// Errors that can occur in greenforest operations.
#[derive(Error, Debug)]
pub enum StudioError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Unsupported image type: {0}")]
    UnsupportedImage(String),

    #[error("Description service error: {0}")]
    Suggestion(String),
}

/// Result type alias for greenforest operations.
pub type StudioResult<T> = Result<T, StudioError>;
