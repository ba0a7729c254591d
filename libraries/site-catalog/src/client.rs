//! Audio catalog client.

use crate::config::CatalogConfig;
use crate::error::{CatalogError, Result};
use crate::normalize::normalize_response;
use async_trait::async_trait;
use reqwest::Client;
use site_core::{Playlist, PlaylistSource, Track};
use std::time::Duration;
use tracing::{debug, error};
use url::Url;

/// Client for the audio catalog endpoint.
///
/// Every call issues exactly one request. Nothing is cached between calls
/// and failed requests are not retried.
///
/// # Example
///
/// ```ignore
/// use site_catalog::{CatalogClient, CatalogConfig};
///
/// let client = CatalogClient::new(CatalogConfig::new("https://api.example.com"))?;
///
/// // Strict: surfaces the failure
/// let playlist = client.fetch_playlist().await?;
///
/// // Lenient: logs and returns an empty playlist on failure
/// let playlist = client.load().await;
/// ```
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: Client,
    endpoint: Url,
}

impl CatalogClient {
    /// Create a new client for the configured endpoint.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;

        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("SitePlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, endpoint })
    }

    /// Resolved catalog URL.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Fetch and normalize the catalog, surfacing any failure.
    pub async fn fetch_playlist(&self) -> Result<Playlist> {
        debug!(url = %self.endpoint, "Fetching playlist");

        let response = self.http.get(self.endpoint.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(CatalogError::ServerError {
                status: status.as_u16(),
                message,
            });
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            CatalogError::ParseError(format!("Failed to parse catalog response: {}", e))
        })?;

        let playlist = normalize_response(&body);
        debug!(tracks = playlist.len(), "Fetched playlist");

        Ok(playlist)
    }

    /// Fetch the catalog, degrading to an empty playlist on failure.
    pub async fn load(&self) -> Playlist {
        match self.fetch_playlist().await {
            Ok(playlist) => playlist,
            Err(e) => {
                error!(url = %self.endpoint, error = %e, "Failed to fetch playlist from API");
                Playlist::new()
            }
        }
    }

    /// Tracks from one album.
    pub async fn songs_by_album(&self, album: &str) -> Playlist {
        self.load().await.by_album(album)
    }

    /// Tracks by one artist.
    pub async fn songs_by_artist(&self, artist: &str) -> Playlist {
        self.load().await.by_artist(artist)
    }

    /// Look a track up by catalog id.
    pub async fn find_song_by_id(&self, id: &str) -> Option<Track> {
        self.load().await.find_by_id(id).cloned()
    }
}

#[async_trait]
impl PlaylistSource for CatalogClient {
    async fn load(&self) -> Playlist {
        CatalogClient::load(self).await
    }
}
