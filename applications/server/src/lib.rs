//! Site Server Library
//!
//! HTTP server for the personal site: the blog posts API, a health check and
//! optional static serving of the built front end.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod router;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use router::create_router;
pub use state::AppState;
