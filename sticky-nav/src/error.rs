//! Error types for Sticky Nav

use thiserror::Error;

/// Main error type for navigation setup.
///
/// The widget itself never surfaces errors to the page: a failed activation
/// is logged and leaves the page untouched.
#[derive(Error, Debug)]
pub enum NavError {
    #[error("Required element '{0}' is missing")]
    MissingElement(&'static str),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("Invalid scenario: {0}")]
    Scenario(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result type for navigation setup
pub type NavResult<T> = Result<T, NavError>;
