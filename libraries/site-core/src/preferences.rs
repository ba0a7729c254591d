//! Durable visitor preferences
//!
//! Preferences are stored as string key-value pairs, the same shape a
//! browser's local storage offers. Typed accessors parse on read and fall
//! back to defaults when a stored value is missing or unreadable.
//!
//! # Example
//!
//! ```rust
//! use site_core::preferences::{MemoryPreferences, PreferenceStore, KEY_VOLUME};
//!
//! let mut prefs = MemoryPreferences::new();
//! assert_eq!(prefs.volume(), 1.0);
//!
//! prefs.set_volume(0.25).unwrap();
//! assert_eq!(prefs.get(KEY_VOLUME).as_deref(), Some("0.25"));
//! ```

use crate::error::{Result, SiteError};
use crate::types::Theme;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

/// Last-used volume (stringified float)
pub const KEY_VOLUME: &str = "volume";

/// Index of the last-played track (stringified integer)
pub const KEY_TRACK_INDEX: &str = "trackIndex";

/// Theme choice (`light`, `dark` or `system`)
pub const KEY_THEME: &str = "theme";

/// Volume used when nothing usable is stored
pub const DEFAULT_VOLUME: f32 = 1.0;

/// Durable string key-value storage
///
/// Writes are synchronous: once `set` returns `Ok`, the value survives a
/// restart.
pub trait PreferenceStore: Send {
    /// Read a raw value
    fn get(&self, key: &str) -> Option<String>;

    /// Write a raw value
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Stored volume in `[0, 1]`, `1.0` if missing or unreadable
    fn volume(&self) -> f32 {
        self.get(KEY_VOLUME)
            .and_then(|v| v.trim().parse::<f32>().ok())
            .filter(|v| v.is_finite())
            .map_or(DEFAULT_VOLUME, |v| v.clamp(0.0, 1.0))
    }

    /// Persist the volume
    fn set_volume(&mut self, volume: f32) -> Result<()> {
        self.set(KEY_VOLUME, &volume.to_string())
    }

    /// Stored track index, `0` if missing or unreadable
    fn track_index(&self) -> usize {
        self.get(KEY_TRACK_INDEX)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0)
    }

    /// Persist the track index
    fn set_track_index(&mut self, index: usize) -> Result<()> {
        self.set(KEY_TRACK_INDEX, &index.to_string())
    }

    /// Stored theme, if any
    fn theme(&self) -> Option<Theme> {
        self.get(KEY_THEME).and_then(|v| v.parse().ok())
    }

    /// Persist the theme
    fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.set(KEY_THEME, theme.as_str())
    }
}

/// In-memory store, lost on drop
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// JSON-file backed store
///
/// The whole map is rewritten on every `set`, so the file on disk always
/// reflects the latest write.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferences {
    /// Open (or lazily create) the store at `path`
    ///
    /// A missing file is an empty store. A corrupt file is logged and
    /// treated as empty; it is overwritten on the next write.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(values) => values,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "Discarding unreadable preferences file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(SiteError::Io(e)),
        };

        Ok(Self { path, values })
    }

    /// Location of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let contents = serde_json::to_string_pretty(&self.values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.flush()
            .map_err(|e| SiteError::storage(format!("Failed to write {}: {e}", self.path.display())))
    }
}
