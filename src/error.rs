//! Error types for the transfer-status tool.
//!
//! A single `AppError` enum covers the fetch layer (invalid URL, timeout,
//! HTTP status, transport failure) and the extraction layer (heading or
//! table missing from the page), plus a `Result<T>` alias.

use thiserror::Error;

/// Domain-specific errors for one fetch-extract-render cycle.
#[derive(Debug, Error)]
pub enum AppError {
    /// Empty or malformed URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Request exceeded its timeout
    #[error("Timeout fetching {0}")]
    Timeout(String),

    /// Server answered with a non-success status
    #[error("HTTP error fetching {url}: status {status}")]
    HttpStatus { url: String, status: u16 },

    /// DNS/TLS/connection-level failure
    #[error("Network error fetching {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Heading or table absent from the parsed document
    #[error("{0}")]
    NotFound(String),

    /// Generic error with context
    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid-URL error
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }
}

/// Result type alias using AppError.
pub type Result<T> = std::result::Result<T, AppError>;
