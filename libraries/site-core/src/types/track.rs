/// Track domain type
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One playable audio item
///
/// Tracks come from the remote catalog and are never mutated after loading.
/// Navigation identity is the media locator (`src`), not the `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Catalog identifier
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Playable media locator (URI)
    pub src: String,

    /// Duration in seconds (0 if unknown)
    pub duration: f64,

    /// Cover-art locator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
}

impl Track {
    /// Create a track with minimal metadata
    pub fn new(id: impl Into<String>, title: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: String::new(),
            album: String::new(),
            src: src.into(),
            duration: 0.0,
            cover: None,
        }
    }

    /// Set the artist
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = artist.into();
        self
    }

    /// Set the album
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = album.into();
        self
    }

    /// Set the duration in seconds
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration = seconds;
        self
    }

    /// Set the cover-art locator
    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }

    /// Duration as a `Duration`, `None` when unknown
    pub fn duration(&self) -> Option<Duration> {
        (self.duration.is_finite() && self.duration > 0.0)
            .then(|| Duration::from_secs_f64(self.duration))
    }

    /// Whether two tracks point at the same media
    pub fn same_media(&self, other: &Track) -> bool {
        self.src == other.src
    }
}
