//! Site Core
//!
//! Shared domain types, traits, and error handling for the personal site.
//!
//! This crate provides the building blocks used by the playlist loader, the
//! playback coordinator, the posts store and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Playlist`, `Post`, `Theme`
//! - **Core Traits**: `PlaylistSource`, `PreferenceStore`
//! - **Error Handling**: Unified `SiteError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use site_core::preferences::{MemoryPreferences, PreferenceStore};
//! use site_core::types::{Playlist, Track};
//!
//! let playlist: Playlist = vec![
//!     Track::new("1", "Intro", "https://cdn.example.com/intro.mp3"),
//!     Track::new("2", "Outro", "https://cdn.example.com/outro.mp3"),
//! ]
//! .into();
//!
//! let mut prefs = MemoryPreferences::new();
//! prefs.set_volume(0.4).unwrap();
//!
//! assert_eq!(playlist.len(), 2);
//! assert_eq!(prefs.volume(), 0.4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod preferences;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{Result, SiteError};
pub use preferences::{FilePreferences, MemoryPreferences, PreferenceStore};
pub use traits::PlaylistSource;
pub use types::{CreatePost, Playlist, Post, PostId, Theme, Track};
