//! Error types for the delegated extraction layer.

use thiserror::Error;

/// Errors that can occur while delegating extraction to a hosted model.
#[derive(Error, Debug)]
pub enum GenAiError {
    /// The HTTP request itself failed.
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The model's reply did not match the expected response shape.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// I/O error while reading the document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
