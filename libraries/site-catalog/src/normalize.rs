//! Catalog response normalization.
//!
//! The catalog has served several body shapes over time. Entries are
//! coerced field by field so one sloppy record never sinks the whole list.

use serde_json::{Map, Value};
use site_core::{Playlist, Track};
use tracing::warn;

/// Extract and normalize the track list from a catalog body
///
/// Shapes are checked in order: `{songs: [...]}`, `{data: [...]}`, then a
/// bare array. Anything else yields an empty playlist.
pub fn normalize_response(body: &Value) -> Playlist {
    let Some(entries) = raw_entries(body) else {
        warn!("Catalog response has no track array");
        return Playlist::new();
    };

    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry.as_object() {
            Some(object) => Some(normalize_track(object)),
            None => {
                warn!(index, "Skipping non-object catalog entry");
                None
            }
        })
        .collect()
}

fn raw_entries(body: &Value) -> Option<&Vec<Value>> {
    if let Some(object) = body.as_object() {
        if let Some(songs) = object.get("songs").and_then(Value::as_array) {
            return Some(songs);
        }
        if let Some(data) = object.get("data").and_then(Value::as_array) {
            return Some(data);
        }
        return None;
    }
    body.as_array()
}

/// Coerce one catalog object into a track
pub fn normalize_track(entry: &Map<String, Value>) -> Track {
    Track {
        id: text(entry.get("id")),
        title: text(entry.get("title")),
        artist: text(entry.get("artist")),
        album: text(entry.get("album")),
        src: text(entry.get("fileUrl")),
        duration: seconds(entry.get("duration")),
        cover: Some(text(entry.get("coverArtUrl"))).filter(|c| !c.is_empty()),
    }
}

/// String form of a scalar; missing and null become empty
fn text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_text(n),
        Some(other) => other.to_string(),
    }
}

/// Integral floats print without a fractional part (`1.0` → `"1"`)
fn number_text(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}

/// Duration in seconds; anything unusable is 0
fn seconds(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed.filter(|d| d.is_finite() && *d > 0.0).unwrap_or(0.0)
}
