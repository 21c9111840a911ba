//! Error types for the mindhelper library.
//!
//! This module provides custom error types using `thiserror` for better error handling
//! and more specific error messages throughout the application.

use thiserror::Error;

use crate::models::Category;

/// Errors that can occur in the mindhelper application.
#[derive(Error, Debug)]
pub enum MindHelperError {
    /// A category with no configured reply pool.
    ///
    /// This is a programming defect, not a runtime condition; the responder
    /// checks for it at construction time.
    #[error("no reply templates configured for category: {0}")]
    MissingTemplates(Category),

    /// Journal storage errors
    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    /// Binary record encoding/decoding errors
    #[error("record encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    /// Serialization/deserialization errors
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// File I/O errors
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rejected user input (e.g. an incomplete thought record)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Invalid configuration
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// General error with context
    #[error("{0}")]
    Other(String),
}

/// Convenience type alias for Result with `MindHelperError`
pub type Result<T> = std::result::Result<T, MindHelperError>;

impl From<anyhow::Error> for MindHelperError {
    fn from(err: anyhow::Error) -> Self {
        MindHelperError::Other(err.to_string())
    }
}
