//! Error types for the catalog client.

use thiserror::Error;

/// Errors that can occur while fetching the catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Catalog returned a non-success status
    #[error("Failed to fetch songs: {status}")]
    ServerError { status: u16, message: String },

    /// Response body was not JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Configured endpoint is not a usable URL
    #[error("Invalid catalog URL: {0}")]
    InvalidUrl(String),
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
