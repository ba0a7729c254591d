//! Core types for playback

use serde::{Deserialize, Serialize};
use site_core::Track;

/// Lifecycle of the loaded track
///
/// `Idle → Loading → Ready → Playing ⇄ Paused`. `stop` and track
/// replacement return to `Idle` (or `Loading` for the replacement).
/// `Error` is left only by loading a track again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// No primitive, or stopped
    #[default]
    Idle,

    /// Primitive created, media loading
    Loading,

    /// Media loaded, not started (or finished)
    Ready,

    /// Audio playing
    Playing,

    /// Paused mid-track
    Paused,

    /// Load or play failed
    Error,
}

/// Everything the presentation layer renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaybackSnapshot {
    /// Selected track
    pub current_track: Option<Track>,

    /// Selected track's title (empty when none)
    pub track_title: String,

    /// Lifecycle status
    pub status: PlaybackStatus,

    /// Whether audio is playing
    pub playing: bool,

    /// Playlist fetch or media load in progress
    pub loading: bool,

    /// Human-readable failure
    pub error: Option<String>,

    /// Elapsed seconds
    pub elapsed: f64,

    /// Duration in seconds
    pub duration: f64,

    /// Elapsed as a percentage of duration
    pub progress_percent: f64,

    /// Elapsed as `m:ss`
    pub elapsed_label: String,

    /// Duration as `m:ss`
    pub duration_label: String,

    /// Volume (0.0 - 1.0)
    pub volume: f32,

    /// Mute state
    pub muted: bool,

    /// Tracks in the active playlist
    pub playlist_len: usize,

    /// Playlist panel visibility
    pub show_playlist: bool,

    /// Player panel visibility
    pub show_player: bool,
}
