/// Core error types for the site
use thiserror::Error;

/// Result type alias using `SiteError`
pub type Result<T> = std::result::Result<T, SiteError>;

/// Core error type shared across the site crates
#[derive(Error, Debug)]
pub enum SiteError {
    /// Durable storage errors (preferences, database)
    #[error("Storage error: {0}")]
    Storage(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

impl SiteError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}
