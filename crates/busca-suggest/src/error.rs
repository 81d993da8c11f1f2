//! Error types for busca-suggest

use thiserror::Error;

/// Result type alias for busca-suggest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading domain values
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from busca-core
    #[error(transparent)]
    Core(#[from] busca_core::Error),

    /// HTTP request failed or returned a non-success status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not valid JSON
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response JSON did not have the expected shape
    #[error("Unexpected terms response: {message}")]
    UnexpectedResponse {
        /// What was wrong with the response
        message: String,
    },

    /// Base URL could not be turned into a request URL
    #[error("Invalid terms URL: {message}")]
    InvalidUrl {
        /// Why the URL was rejected
        message: String,
    },
}

impl Error {
    /// Creates a new unexpected-response error.
    pub fn unexpected<S: Into<String>>(message: S) -> Self {
        Error::UnexpectedResponse {
            message: message.into(),
        }
    }

    /// Creates a new invalid-URL error.
    pub fn invalid_url<S: Into<String>>(message: S) -> Self {
        Error::InvalidUrl {
            message: message.into(),
        }
    }
}
