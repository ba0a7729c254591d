//! Shared test helpers: a scriptable in-memory sound engine
//!
//! `FakeEngine` records every primitive it creates. Tests keep a clone of
//! the engine to inspect those records and to raise backend notifications
//! the way a real audio element would.

#![allow(dead_code)]

use site_core::{Playlist, Track};
use site_playback::{
    EventSender, PlaybackError, Sound, SoundEngine, SoundEvent, SoundEventKind, SoundId,
    SoundOptions,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// What the fake knows about one primitive
#[derive(Debug, Clone, Default)]
pub struct SoundRecord {
    pub id: Option<SoundId>,
    pub src: String,
    pub playing: bool,
    pub position: f64,
    pub duration: f64,
    pub volume: f32,
    pub muted: bool,
    pub play_calls: usize,
    pub stop_calls: usize,
    pub unload_calls: usize,
    pub unloaded: bool,
}

#[derive(Default)]
struct FakeState {
    records: Vec<SoundRecord>,
    senders: HashMap<SoundId, EventSender>,
    play_failure: Option<String>,
    release_fails: bool,
}

impl FakeState {
    fn record_mut(&mut self, id: SoundId) -> &mut SoundRecord {
        self.records
            .iter_mut()
            .find(|r| r.id == Some(id))
            .expect("unknown sound id")
    }

    fn send(&self, id: SoundId, kind: SoundEventKind) {
        if let Some(tx) = self.senders.get(&id) {
            let _ = tx.send(SoundEvent::new(id, kind));
        }
    }
}

/// Engine handing out [`FakeSound`]s backed by shared state
#[derive(Clone, Default)]
pub struct FakeEngine {
    state: Arc<Mutex<FakeState>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// All primitives created so far, oldest first
    pub fn sounds(&self) -> Vec<SoundRecord> {
        self.state.lock().unwrap().records.clone()
    }

    pub fn sound(&self, id: SoundId) -> SoundRecord {
        self.state.lock().unwrap().record_mut(id).clone()
    }

    /// Primitives created and not yet unloaded
    pub fn live_count(&self) -> usize {
        self.state
            .lock()
            .unwrap()
            .records
            .iter()
            .filter(|r| !r.unloaded)
            .count()
    }

    /// Raise a notification as if the backend fired it
    pub fn emit(&self, id: SoundId, kind: SoundEventKind) {
        self.state.lock().unwrap().send(id, kind);
    }

    /// Make the media metadata available and raise `Loaded`
    pub fn finish_loading(&self, id: SoundId, duration: f64) {
        let mut state = self.state.lock().unwrap();
        state.record_mut(id).duration = duration;
        state.send(id, SoundEventKind::Loaded);
    }

    pub fn set_position(&self, id: SoundId, position: f64) {
        self.state.lock().unwrap().record_mut(id).position = position;
    }

    pub fn set_playing(&self, id: SoundId, playing: bool) {
        self.state.lock().unwrap().record_mut(id).playing = playing;
    }

    /// Play to the end of the media and raise `Ended`
    pub fn finish(&self, id: SoundId) {
        let mut state = self.state.lock().unwrap();
        let record = state.record_mut(id);
        record.playing = false;
        record.position = record.duration;
        state.send(id, SoundEventKind::Ended);
    }

    /// Make every subsequent `play()` fail synchronously
    pub fn fail_play_with(&self, message: &str) {
        self.state.lock().unwrap().play_failure = Some(message.to_string());
    }

    /// Make every subsequent `stop()` and `unload()` fail
    pub fn fail_release(&self) {
        self.state.lock().unwrap().release_fails = true;
    }
}

impl SoundEngine for FakeEngine {
    fn create(&mut self, id: SoundId, options: SoundOptions, events: EventSender) -> Box<dyn Sound> {
        let mut state = self.state.lock().unwrap();
        state.records.push(SoundRecord {
            id: Some(id),
            src: options.src,
            volume: options.volume,
            muted: options.muted,
            ..SoundRecord::default()
        });
        state.senders.insert(id, events);

        Box::new(FakeSound {
            id,
            state: Arc::clone(&self.state),
        })
    }
}

/// Primitive whose behaviour lives in the engine's shared state
pub struct FakeSound {
    id: SoundId,
    state: Arc<Mutex<FakeState>>,
}

impl FakeSound {
    fn with<T>(&self, f: impl FnOnce(&mut SoundRecord) -> T) -> T {
        let mut state = self.state.lock().unwrap();
        f(state.record_mut(self.id))
    }
}

impl Sound for FakeSound {
    fn play(&mut self) -> site_playback::Result<()> {
        let mut state = self.state.lock().unwrap();
        if let Some(message) = state.play_failure.clone() {
            return Err(PlaybackError::sound(message));
        }
        let record = state.record_mut(self.id);
        record.play_calls += 1;
        record.playing = true;
        state.send(self.id, SoundEventKind::Played);
        Ok(())
    }

    fn pause(&mut self) {
        let mut state = self.state.lock().unwrap();
        state.record_mut(self.id).playing = false;
        state.send(self.id, SoundEventKind::Paused);
    }

    fn stop(&mut self) -> site_playback::Result<()> {
        let mut state = self.state.lock().unwrap();
        let fails = state.release_fails;
        let record = state.record_mut(self.id);
        record.stop_calls += 1;
        record.playing = false;
        record.position = 0.0;
        if fails {
            return Err(PlaybackError::sound("stop failed"));
        }
        Ok(())
    }

    fn unload(&mut self) -> site_playback::Result<()> {
        let mut state = self.state.lock().unwrap();
        let fails = state.release_fails;
        let record = state.record_mut(self.id);
        record.unload_calls += 1;
        record.unloaded = true;
        if fails {
            return Err(PlaybackError::sound("unload failed"));
        }
        Ok(())
    }

    fn seek(&mut self, position: f64) -> site_playback::Result<()> {
        self.with(|r| r.position = position);
        Ok(())
    }

    fn position(&self) -> f64 {
        self.with(|r| r.position)
    }

    fn duration(&self) -> f64 {
        self.with(|r| r.duration)
    }

    fn is_playing(&self) -> bool {
        self.with(|r| r.playing)
    }

    fn set_volume(&mut self, volume: f32) {
        self.with(|r| r.volume = volume);
    }

    fn set_muted(&mut self, muted: bool) {
        self.with(|r| r.muted = muted);
    }
}

pub fn track(n: usize) -> Track {
    Track::new(
        n.to_string(),
        format!("Track {n}"),
        format!("https://cdn.example.com/audio/{n}.mp3"),
    )
    .with_artist("The Band")
    .with_album("First Album")
}

pub fn playlist(len: usize) -> Playlist {
    (0..len).map(track).collect()
}
