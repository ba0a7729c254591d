/// Playlist domain type
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// Ordered sequence of tracks
///
/// Insertion order is navigation order. Lookups match tracks by their media
/// locator, so two entries with different ids but the same `src` are the same
/// position for navigation purposes (the first one wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Playlist {
    tracks: Vec<Track>,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tracks
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Track at `index`
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// All tracks in order
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Iterate over the tracks in order
    pub fn iter(&self) -> std::slice::Iter<'_, Track> {
        self.tracks.iter()
    }

    /// Index of the first track sharing `track`'s media locator
    pub fn position_of(&self, track: &Track) -> Option<usize> {
        self.tracks.iter().position(|t| t.same_media(track))
    }

    /// Tracks whose album matches exactly
    pub fn by_album(&self, album: &str) -> Playlist {
        self.tracks
            .iter()
            .filter(|t| t.album == album)
            .cloned()
            .collect()
    }

    /// Tracks whose artist matches exactly
    pub fn by_artist(&self, artist: &str) -> Playlist {
        self.tracks
            .iter()
            .filter(|t| t.artist == artist)
            .cloned()
            .collect()
    }

    /// First track with the given catalog id
    pub fn find_by_id(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Consume into the underlying vector
    pub fn into_inner(self) -> Vec<Track> {
        self.tracks
    }
}

impl From<Vec<Track>> for Playlist {
    fn from(tracks: Vec<Track>) -> Self {
        Self { tracks }
    }
}

impl FromIterator<Track> for Playlist {
    fn from_iter<I: IntoIterator<Item = Track>>(iter: I) -> Self {
        Self {
            tracks: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Playlist {
    type Item = Track;
    type IntoIter = std::vec::IntoIter<Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.into_iter()
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a Track;
    type IntoIter = std::slice::Iter<'a, Track>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
