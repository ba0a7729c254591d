/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix (`SITE__SERVER__PORT`, ...)
pub const ENV_PREFIX: &str = "SITE";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default)]
    pub web: WebSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct WebSettings {
    /// Built front end to serve for non-API paths
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist; otherwise `config.toml` in the working
    /// directory is used when present. `SITE__*` environment variables
    /// override file values.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables (SITE__SECTION__KEY)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.storage.database_url.trim().is_empty() {
            return Err(ServerError::Config(
                "Database URL is required (set SITE__STORAGE__DATABASE_URL)".to_string(),
            ));
        }

        if let Some(dir) = &self.web.dir {
            if !dir.is_dir() {
                return Err(ServerError::Config(format!(
                    "Web directory not found at {:?}",
                    dir
                )));
            }
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/site.db".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            web: WebSettings::default(),
        }
    }
}
