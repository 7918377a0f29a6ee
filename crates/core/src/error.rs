//! Error types shared by the realty crates

use thiserror::Error;

use crate::property::PropertyId;

/// Result alias used across the workspace
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input '{field}': {message}")]
    InvalidInput { field: String, message: String },

    #[error("Property not found: {0}")]
    PropertyNotFound(PropertyId),

    #[error("Listing source '{source_name}' unavailable: {message}")]
    SourceUnavailable { source_name: String, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for an [`Error::InvalidInput`]
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }
}
