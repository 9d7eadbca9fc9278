//! Error types and handling.

use std::path::PathBuf;

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Header image file could not be read
    #[error("Failed to read image {path:?}: {source}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Header image file could not be decoded
    #[error("Failed to decode image {path:?}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Screen name registered twice
    #[error("Screen already registered: {0}")]
    DuplicateScreen(String),

    /// Screen name not registered
    #[error("Unknown screen: {0}")]
    UnknownScreen(String),
}

/// Result type alias for AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Create a duplicate screen error
    pub fn duplicate_screen(name: impl Into<String>) -> Self {
        Self::DuplicateScreen(name.into())
    }

    /// Create an unknown screen error
    pub fn unknown_screen(name: impl Into<String>) -> Self {
        Self::UnknownScreen(name.into())
    }
}
