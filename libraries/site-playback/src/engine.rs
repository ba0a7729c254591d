//! Sound-playback primitive abstraction
//!
//! A [`Sound`] is one loaded track on some audio backend (an HTML audio
//! element, a native decoder, a test fake). Backends report asynchronous
//! lifecycle changes by sending [`SoundEvent`]s on the channel handed to
//! [`SoundEngine::create`]; the session drains that channel on its own
//! schedule.

use crate::error::Result;
use crossbeam_channel::Sender;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one primitive for its whole lifetime
///
/// Ids are never reused within a session, so an event carrying the id of a
/// released primitive can be recognised and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SoundId(pub u64);

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sound-{}", self.0)
    }
}

/// Settings a primitive is created with
#[derive(Debug, Clone, PartialEq)]
pub struct SoundOptions {
    /// Media locator to stream from
    pub src: String,

    /// Initial volume (0.0 - 1.0)
    pub volume: f32,

    /// Initial mute state
    pub muted: bool,
}

/// Lifecycle notification from a primitive
#[derive(Debug, Clone, PartialEq)]
pub struct SoundEvent {
    /// Primitive that raised the event
    pub sound: SoundId,

    /// What happened
    pub kind: SoundEventKind,
}

impl SoundEvent {
    /// Create an event
    pub fn new(sound: SoundId, kind: SoundEventKind) -> Self {
        Self { sound, kind }
    }
}

/// Kinds of lifecycle notification
#[derive(Debug, Clone, PartialEq)]
pub enum SoundEventKind {
    /// Media metadata is available and playback can start
    Loaded,

    /// Playback started
    Played,

    /// Playback paused
    Paused,

    /// Playback reached the end of the media
    Ended,

    /// Media failed to load
    LoadError(String),

    /// Playback failed to start (autoplay policy, decode failure)
    PlayError(String),
}

/// Sending half of the notification channel
pub type EventSender = Sender<SoundEvent>;

/// One loaded track on an audio backend
///
/// Positions and durations are in seconds.
pub trait Sound: Send {
    /// Start or resume playback
    fn play(&mut self) -> Result<()>;

    /// Pause playback
    fn pause(&mut self);

    /// Stop playback and rewind
    fn stop(&mut self) -> Result<()>;

    /// Release backend resources; the primitive is unusable afterwards
    fn unload(&mut self) -> Result<()>;

    /// Jump to `position`
    fn seek(&mut self, position: f64) -> Result<()>;

    /// Current playback position
    fn position(&self) -> f64;

    /// Total media duration (0 until known)
    fn duration(&self) -> f64;

    /// Whether audio is currently playing
    fn is_playing(&self) -> bool;

    /// Apply a volume (0.0 - 1.0)
    fn set_volume(&mut self, volume: f32);

    /// Apply a mute state
    fn set_muted(&mut self, muted: bool);
}

/// Factory for sound primitives
pub trait SoundEngine: Send {
    /// Create a primitive bound to `options.src`
    ///
    /// Creation starts loading; completion or failure arrives later as a
    /// [`SoundEventKind::Loaded`] or [`SoundEventKind::LoadError`] event
    /// tagged with `id`.
    fn create(&mut self, id: SoundId, options: SoundOptions, events: EventSender) -> Box<dyn Sound>;
}
