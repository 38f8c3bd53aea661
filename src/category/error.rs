//! Category-specific error types
//!
//! # Error Types
//!
//! - **`EmptyName`**: A category was constructed with an empty display name
//! - **`NotFound`**: A category file does not exist
//! - **`Io`**: A category file could not be read
//! - **`Parse`**: A category file is not valid TOML or has the wrong shape

use super::CategoryId;
use thiserror::Error;

/// Errors raised while constructing or loading categories
#[derive(Debug, Error)]
pub enum CategoryError {
    /// Category display name is empty
    #[error("Category {0} has an empty name")]
    EmptyName(CategoryId),

    /// Category file does not exist
    #[error("Category file not found: {0}")]
    NotFound(String),

    /// I/O error while reading a category file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Category file could not be parsed
    #[error("Failed to parse category file: {0}")]
    Parse(String),
}

impl From<toml::de::Error> for CategoryError {
    fn from(err: toml::de::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
