//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to the analysis backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error, including timeouts.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the backend.
        status: u16,
        /// `detail` from the error body, or a per-endpoint default.
        message: String,
    },

    /// Failed to parse a backend response.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ClientError {
    /// Whether the request exceeded its time bound.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
