//! Site Catalog Client
//!
//! Loads the playable track list from the audio catalog endpoint.
//!
//! # Features
//!
//! - **Endpoint selection**: development proxy or absolute production URI
//! - **Normalization**: accepts `[...]`, `{songs: [...]}` and `{data: [...]}`
//!   bodies and coerces every entry into a [`Track`](site_core::Track)
//! - **Graceful degradation**: [`CatalogClient::load`] never fails, it logs
//!   and returns an empty playlist
//!
//! # Example
//!
//! ```ignore
//! use site_catalog::{CatalogClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::from_env())?;
//!
//!     let playlist = client.load().await;
//!     println!("Found {} tracks", playlist.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
pub mod normalize;

pub use client::CatalogClient;
pub use config::{CatalogConfig, DeployMode, AUDIO_ENDPOINT, DEFAULT_API_URI, DEFAULT_ORIGIN};
pub use error::{CatalogError, Result};
