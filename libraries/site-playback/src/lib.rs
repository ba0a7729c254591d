//! Site - Playback Coordination
//!
//! Platform-agnostic playback state for the site's audio player.
//!
//! This crate provides:
//! - A sound-primitive abstraction ([`Sound`], [`SoundEngine`]) with
//!   lifecycle notifications over a channel
//! - [`PlaybackSession`]: one live primitive at a time, transport controls,
//!   volume with auto-mute, frame-driven elapsed-time polling
//! - [`PlaybackCoordinator`]: playlist, current track, wraparound
//!   navigation, persisted volume and track index, UI snapshot
//! - Display helpers ([`format_time`], [`progress_percent`])
//!
//! # Architecture
//!
//! Nothing here performs audio output. The host supplies a [`SoundEngine`]
//! (an HTML audio element bridge, a native player, a test fake) and drives
//! the coordinator: UI actions call its methods, backend callbacks and
//! display frames call [`PlaybackCoordinator::tick`].
//!
//! # Example
//!
//! ```rust
//! use site_core::{MemoryPreferences, Playlist, Track};
//! use site_playback::{
//!     EventSender, PlaybackCoordinator, Sound, SoundEngine, SoundId, SoundOptions,
//! };
//!
//! struct Silent;
//!
//! impl Sound for Silent {
//!     fn play(&mut self) -> site_playback::Result<()> { Ok(()) }
//!     fn pause(&mut self) {}
//!     fn stop(&mut self) -> site_playback::Result<()> { Ok(()) }
//!     fn unload(&mut self) -> site_playback::Result<()> { Ok(()) }
//!     fn seek(&mut self, _position: f64) -> site_playback::Result<()> { Ok(()) }
//!     fn position(&self) -> f64 { 0.0 }
//!     fn duration(&self) -> f64 { 0.0 }
//!     fn is_playing(&self) -> bool { false }
//!     fn set_volume(&mut self, _volume: f32) {}
//!     fn set_muted(&mut self, _muted: bool) {}
//! }
//!
//! struct SilentEngine;
//!
//! impl SoundEngine for SilentEngine {
//!     fn create(&mut self, _id: SoundId, _options: SoundOptions, _events: EventSender) -> Box<dyn Sound> {
//!         Box::new(Silent)
//!     }
//! }
//!
//! let mut player = PlaybackCoordinator::new(SilentEngine, MemoryPreferences::new());
//! player.receive_playlist(Playlist::from(vec![
//!     Track::new("1", "Intro", "https://cdn.example.com/intro.mp3"),
//!     Track::new("2", "Outro", "https://cdn.example.com/outro.mp3"),
//! ]));
//!
//! assert_eq!(player.track_title(), "Intro");
//!
//! player.next_song();
//! assert_eq!(player.track_title(), "Outro");
//!
//! player.next_song();
//! assert_eq!(player.track_title(), "Intro");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod coordinator;
pub mod display;
pub mod engine;
mod error;
pub mod events;
pub mod frames;
mod session;
pub mod types;

pub use coordinator::PlaybackCoordinator;
pub use display::{format_time, progress_percent};
pub use engine::{EventSender, Sound, SoundEngine, SoundEvent, SoundEventKind, SoundId, SoundOptions};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use frames::{FrameLoop, FRAME_INTERVAL};
pub use session::PlaybackSession;
pub use types::{PlaybackSnapshot, PlaybackStatus};
