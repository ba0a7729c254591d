/// Theme preference
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Colour theme chosen by the visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light palette
    Light,

    /// Dark palette
    Dark,

    /// Follow the operating system
    System,
}

impl Theme {
    /// Stored value as written to durable storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    /// Theme to apply at startup
    ///
    /// A stored choice wins; otherwise the system preference decides.
    pub fn initial(stored: Option<Theme>, system_prefers_dark: bool) -> Theme {
        stored.unwrap_or(if system_prefers_dark {
            Theme::Dark
        } else {
            Theme::Light
        })
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}
