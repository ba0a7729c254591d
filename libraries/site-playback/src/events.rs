//! Playback Events
//!
//! Event-based communication for UI synchronization. Events queue up inside
//! the session and are collected with `drain_events`:
//! - State changes (load, play, pause, stop, failure)
//! - Track changes
//! - Position updates (one per polled frame)
//! - Volume and mute changes
//! - Playlist replacement

use crate::types::PlaybackStatus;
use serde::{Deserialize, Serialize};

/// Events emitted by the playback system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Lifecycle status changed
    StateChanged {
        /// The new status
        status: PlaybackStatus,
    },

    /// A different track was selected
    TrackChanged {
        /// Catalog id of the new track
        track_id: String,
        /// Media locator of the new track
        src: String,
    },

    /// Elapsed time sampled from the playing sound
    PositionUpdate {
        /// Elapsed seconds
        elapsed: f64,
        /// Duration in seconds
        duration: f64,
    },

    /// Volume or mute changed
    VolumeChanged {
        /// New volume (0.0 - 1.0)
        volume: f32,
        /// Whether audio is muted
        muted: bool,
    },

    /// The active playlist was replaced
    PlaylistChanged {
        /// New playlist length
        length: usize,
    },

    /// Load or play failure
    Error {
        /// Error message
        message: String,
    },
}
