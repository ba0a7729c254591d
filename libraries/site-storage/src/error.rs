/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// A stored value could not be decoded
    #[error("Invalid stored value: {0}")]
    InvalidData(String),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl From<StorageError> for site_core::SiteError {
    fn from(err: StorageError) -> Self {
        site_core::SiteError::storage(err.to_string())
    }
}
