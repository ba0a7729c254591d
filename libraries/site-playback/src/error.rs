//! Error types for playback

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The sound primitive reported a failure
    #[error("{0}")]
    Sound(String),

    /// Invalid seek position
    #[error("Invalid seek position: {0}")]
    InvalidSeekPosition(f64),
}

impl PlaybackError {
    /// Create a sound error
    pub fn sound(msg: impl Into<String>) -> Self {
        Self::Sound(msg.into())
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
