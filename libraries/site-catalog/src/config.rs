//! Catalog endpoint configuration.

use crate::error::{CatalogError, Result};
use url::Url;

/// Path of the audio catalog on either host
pub const AUDIO_ENDPOINT: &str = "/api/audio";

/// Catalog host used outside development
pub const DEFAULT_API_URI: &str = "https://thethe.fly.dev";

/// Site origin whose dev proxy forwards catalog requests
pub const DEFAULT_ORIGIN: &str = "http://localhost:3000";

/// Deployment mode deciding which host serves the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeployMode {
    /// Requests go to the site origin and are proxied to the backend
    Development,

    /// Requests go straight to the configured API host
    #[default]
    Production,
}

impl DeployMode {
    /// Parse a `SITE_ENV`-style value; anything but `development` is production
    pub fn from_env_value(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("development") {
            DeployMode::Development
        } else {
            DeployMode::Production
        }
    }
}

/// Where the catalog lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Deployment mode
    pub mode: DeployMode,

    /// Site origin (used in development)
    pub origin: String,

    /// API host (used in production)
    pub api_uri: String,
}

impl CatalogConfig {
    /// Production config pointing at `api_uri`
    pub fn new(api_uri: impl Into<String>) -> Self {
        Self {
            mode: DeployMode::Production,
            origin: DEFAULT_ORIGIN.to_string(),
            api_uri: api_uri.into(),
        }
    }

    /// Development config proxied through `origin`
    pub fn development(origin: impl Into<String>) -> Self {
        Self {
            mode: DeployMode::Development,
            origin: origin.into(),
            api_uri: DEFAULT_API_URI.to_string(),
        }
    }

    /// Read `SITE_ENV`, `SITE_ORIGIN` and `SITE_API_URI`
    pub fn from_env() -> Self {
        let mode = std::env::var("SITE_ENV")
            .map(|v| DeployMode::from_env_value(&v))
            .unwrap_or_default();

        Self {
            mode,
            origin: std::env::var("SITE_ORIGIN").unwrap_or_else(|_| DEFAULT_ORIGIN.to_string()),
            api_uri: std::env::var("SITE_API_URI")
                .unwrap_or_else(|_| DEFAULT_API_URI.to_string()),
        }
    }

    /// Base URL selected by the deployment mode
    pub fn base_url(&self) -> &str {
        match self.mode {
            DeployMode::Development => &self.origin,
            DeployMode::Production => &self.api_uri,
        }
    }

    /// Absolute URL of the audio catalog
    ///
    /// # Errors
    /// Returns `InvalidUrl` if the base is empty or not http(s)
    pub fn endpoint(&self) -> Result<Url> {
        let base = self.base_url().trim_end_matches('/');
        if base.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }
        if !base.starts_with("http://") && !base.starts_with("https://") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        Url::parse(&format!("{base}{AUDIO_ENDPOINT}"))
            .map_err(|e| CatalogError::InvalidUrl(e.to_string()))
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URI)
    }
}
