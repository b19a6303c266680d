//! Error types for design operations
//!
//! Provides unified error handling for loading, saving, and mutating designs.

use thiserror::Error;

/// Errors that can occur while working with a design
#[derive(Error, Debug)]
pub enum DesignError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image decoding error
    #[error("Image decode error: {0}")]
    Image(#[from] image::ImageError),

    /// A design file contained the same element id twice
    #[error("Duplicate element id {id} in design file")]
    DuplicateElementId { id: u64 },

    /// An operation referenced an element that is not in the document
    #[error("No element with id {id}")]
    MissingElement { id: u64 },

    /// The design has no file path to save to
    #[error("Design has no file path")]
    NoPath,

    /// Generic error message
    #[error("{0}")]
    Other(String),
}

/// Result type alias for design operations
pub type DesignResult<T> = Result<T, DesignError>;

impl From<String> for DesignError {
    fn from(s: String) -> Self {
        DesignError::Other(s)
    }
}

impl From<&str> for DesignError {
    fn from(s: &str) -> Self {
        DesignError::Other(s.to_string())
    }
}
