//! Playback session - owns the active sound primitive
//!
//! Wraps one [`Sound`] at a time: creation and release, transport controls,
//! volume and mute, lifecycle events from the backend and the frame loop
//! that samples elapsed time while audio plays.

use crate::{
    engine::{EventSender, Sound, SoundEngine, SoundEvent, SoundEventKind, SoundId, SoundOptions},
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    frames::FrameLoop,
    types::PlaybackStatus,
};
use crossbeam_channel::{unbounded, Receiver};
use site_core::{PreferenceStore, Track};
use tracing::{debug, warn};

/// The primitive currently owned by the session
struct ActiveSound {
    id: SoundId,
    track: Track,
    sound: Box<dyn Sound>,
}

/// Playback state around a single sound primitive
///
/// At most one primitive is alive at any time: [`load_track`](Self::load_track)
/// releases the previous one before asking the engine for the next.
pub struct PlaybackSession<E: SoundEngine> {
    engine: E,

    // Backend notifications
    events_tx: EventSender,
    events_rx: Receiver<SoundEvent>,

    active: Option<ActiveSound>,
    next_sound_id: u64,
    frames: FrameLoop,

    status: PlaybackStatus,
    playing: bool,
    loading: bool,
    elapsed: f64,
    duration: f64,
    error: Option<String>,

    volume: f32,
    muted: bool,
    // Mute was forced by dragging the volume to zero
    auto_muted: bool,

    pending_events: Vec<PlaybackEvent>,
}

impl<E: SoundEngine> PlaybackSession<E> {
    /// Create an idle session with an initial volume
    ///
    /// Non-finite volumes fall back to full volume.
    pub fn new(engine: E, volume: f32) -> Self {
        let (events_tx, events_rx) = unbounded();
        let volume = if volume.is_finite() {
            volume.clamp(0.0, 1.0)
        } else {
            1.0
        };

        Self {
            engine,
            events_tx,
            events_rx,
            active: None,
            next_sound_id: 0,
            frames: FrameLoop::new(),
            status: PlaybackStatus::Idle,
            playing: false,
            loading: false,
            elapsed: 0.0,
            duration: 0.0,
            error: None,
            volume,
            muted: false,
            auto_muted: false,
            pending_events: Vec::new(),
        }
    }

    /// Replace the active primitive with one for `track`
    ///
    /// Does not start playback; the new primitive begins loading and reports
    /// [`SoundEventKind::Loaded`] or [`SoundEventKind::LoadError`] later.
    pub fn load_track(&mut self, track: &Track) -> SoundId {
        self.release_active();

        self.elapsed = 0.0;
        self.duration = 0.0;
        self.loading = true;
        self.playing = false;
        self.error = None;

        self.next_sound_id += 1;
        let id = SoundId(self.next_sound_id);
        let options = SoundOptions {
            src: track.src.clone(),
            volume: self.volume,
            muted: self.muted,
        };

        debug!(%id, src = %track.src, "Creating sound");
        let sound = self.engine.create(id, options, self.events_tx.clone());
        self.active = Some(ActiveSound {
            id,
            track: track.clone(),
            sound,
        });

        self.set_status(PlaybackStatus::Loading);
        id
    }

    /// Start or resume playback
    ///
    /// No-op without a primitive. A synchronous failure is recorded as the
    /// session error rather than returned.
    pub fn play(&mut self) {
        let Some(active) = self.active.as_mut() else {
            debug!("play() without a loaded sound");
            return;
        };

        if let Err(e) = active.sound.play() {
            self.fail(format!("Play error: {e}"));
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.sound.pause();
        }
    }

    /// Stop playback and rewind; the primitive stays loaded
    ///
    /// A failed session keeps its `Error` status.
    pub fn stop(&mut self) {
        if let Some(active) = self.active.as_mut() {
            if let Err(e) = active.sound.stop() {
                warn!(id = %active.id, error = %e, "Failed to stop sound");
            }
        }

        self.frames.cancel();
        self.playing = false;
        self.elapsed = 0.0;

        // Error is left only by loading another track
        if matches!(
            self.status,
            PlaybackStatus::Playing | PlaybackStatus::Paused | PlaybackStatus::Ready
        ) {
            self.set_status(PlaybackStatus::Idle);
        }
    }

    /// Seek to `position` seconds
    ///
    /// # Errors
    /// Returns an error for negative or non-finite positions, or when the
    /// primitive rejects the seek
    pub fn seek(&mut self, position: f64) -> Result<()> {
        if !position.is_finite() || position < 0.0 {
            return Err(PlaybackError::InvalidSeekPosition(position));
        }

        if let Some(active) = self.active.as_mut() {
            active.sound.seek(position)?;
            self.elapsed = position;
            self.emit(PlaybackEvent::PositionUpdate {
                elapsed: self.elapsed,
                duration: self.duration,
            });
        }
        Ok(())
    }

    /// Set the volume and persist it
    ///
    /// NaN is ignored and other values are clamped to `[0, 1]`. Zero mutes;
    /// raising the volume again only unmutes if that mute came from zero.
    pub fn update_volume(&mut self, level: f32, prefs: &mut dyn PreferenceStore) {
        if level.is_nan() {
            debug!("Ignoring NaN volume");
            return;
        }

        let volume = level.clamp(0.0, 1.0);
        // Negative zero would persist as "-0"
        let volume = if volume == 0.0 { 0.0 } else { volume };
        self.volume = volume;
        if let Err(e) = prefs.set_volume(volume) {
            warn!(error = %e, "Failed to persist volume");
        }

        if volume == 0.0 {
            if !self.muted {
                self.auto_muted = true;
            }
            self.muted = true;
        } else if self.muted && self.auto_muted {
            self.muted = false;
            self.auto_muted = false;
        }

        if let Some(active) = self.active.as_mut() {
            active.sound.set_volume(volume);
            active.sound.set_muted(self.muted);
        }

        self.emit(PlaybackEvent::VolumeChanged {
            volume: self.volume,
            muted: self.muted,
        });
    }

    /// Flip the mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
        self.auto_muted = false;

        if let Some(active) = self.active.as_mut() {
            active.sound.set_muted(self.muted);
        }

        self.emit(PlaybackEvent::VolumeChanged {
            volume: self.volume,
            muted: self.muted,
        });
    }

    /// Apply every queued backend notification
    ///
    /// Returns how many events were received, stale ones included.
    pub fn process_events(&mut self) -> usize {
        let mut received = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            received += 1;
            self.handle_event(event);
        }
        received
    }

    fn handle_event(&mut self, event: SoundEvent) {
        let Some(active) = self.active.as_ref() else {
            debug!(sound = %event.sound, "Dropping event, no active sound");
            return;
        };
        if active.id != event.sound {
            debug!(sound = %event.sound, active = %active.id, "Dropping stale event");
            return;
        }
        let id = active.id;

        match event.kind {
            SoundEventKind::Loaded => {
                let duration = active.sound.duration();
                self.duration = if duration.is_finite() && duration > 0.0 {
                    duration
                } else {
                    0.0
                };
                self.loading = false;
                self.error = None;
                if self.status == PlaybackStatus::Loading {
                    self.set_status(PlaybackStatus::Ready);
                }
                self.emit(PlaybackEvent::PositionUpdate {
                    elapsed: self.elapsed,
                    duration: self.duration,
                });
            }
            SoundEventKind::Played => {
                self.playing = true;
                self.error = None;
                self.frames.schedule(id);
                self.set_status(PlaybackStatus::Playing);
            }
            SoundEventKind::Paused => {
                self.playing = false;
                self.frames.cancel();
                self.set_status(PlaybackStatus::Paused);
            }
            SoundEventKind::Ended => {
                self.playing = false;
                self.elapsed = 0.0;
                self.frames.cancel();
                self.set_status(PlaybackStatus::Ready);
            }
            SoundEventKind::LoadError(cause) => {
                self.loading = false;
                self.fail(format!("Load error: {cause}"));
            }
            SoundEventKind::PlayError(cause) => {
                self.fail(format!("Play blocked/failed: {cause}"));
            }
        }
    }

    /// Run one polling frame
    ///
    /// Consumes the pending frame request, samples the primitive's position
    /// and requests another frame if the primitive is still playing. Returns
    /// `true` when a position was sampled.
    pub fn on_frame(&mut self) -> bool {
        let Some(frame) = self.frames.take_due() else {
            return false;
        };
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        if frame.sound != active.id || !active.sound.is_playing() {
            return false;
        }

        let position = active.sound.position();
        self.elapsed = if position.is_finite() && position > 0.0 {
            position
        } else {
            0.0
        };
        let id = active.id;
        self.frames.schedule(id);

        self.emit(PlaybackEvent::PositionUpdate {
            elapsed: self.elapsed,
            duration: self.duration,
        });
        true
    }

    /// Release the primitive and return to idle
    pub fn release(&mut self) {
        self.release_active();
        self.loading = false;
        self.elapsed = 0.0;
        self.set_status(PlaybackStatus::Idle);
    }

    /// Stop and unload the active primitive, each step best-effort
    fn release_active(&mut self) {
        self.frames.cancel();
        self.playing = false;

        let Some(mut active) = self.active.take() else {
            return;
        };

        debug!(id = %active.id, "Releasing sound");
        if let Err(e) = active.sound.stop() {
            warn!(id = %active.id, error = %e, "Failed to stop sound during release");
        }
        if let Err(e) = active.sound.unload() {
            warn!(id = %active.id, error = %e, "Failed to unload sound during release");
        }
    }

    fn fail(&mut self, message: String) {
        warn!(error = %message, "Playback failed");
        self.playing = false;
        self.frames.cancel();
        self.error = Some(message.clone());
        self.set_status(PlaybackStatus::Error);
        self.emit(PlaybackEvent::Error { message });
    }

    fn set_status(&mut self, status: PlaybackStatus) {
        if self.status != status {
            debug!(from = ?self.status, to = ?status, "Playback status changed");
            self.status = status;
            self.emit(PlaybackEvent::StateChanged { status });
        }
    }

    pub(crate) fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    // ===== State =====

    /// Lifecycle status
    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    /// Whether audio is playing
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Whether media is loading
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Elapsed seconds
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Duration in seconds (0 until loaded)
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Last load or play failure
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Volume (0.0 - 1.0)
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Whether audio is muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Whether a primitive is loaded
    pub fn has_sound(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the loaded primitive
    pub fn sound_id(&self) -> Option<SoundId> {
        self.active.as_ref().map(|active| active.id)
    }

    /// Track the loaded primitive plays
    pub fn loaded_track(&self) -> Option<&Track> {
        self.active.as_ref().map(|active| &active.track)
    }

    /// Whether a polling frame is outstanding
    pub fn frame_pending(&self) -> bool {
        self.frames.is_pending()
    }

    /// The sound engine
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: SoundEngine> Drop for PlaybackSession<E> {
    fn drop(&mut self) {
        self.release_active();
    }
}
