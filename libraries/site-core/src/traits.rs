/// Core traits for the site
use crate::types::Playlist;
use async_trait::async_trait;

/// Source of the playable track list
///
/// Implementers fetch the catalog from wherever it lives (a remote HTTP
/// endpoint in production, a fixed list in tests). `load` never fails:
/// implementations degrade to an empty playlist and log the cause.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Load the current playlist
    async fn load(&self) -> Playlist;
}
