//! Playback coordinator - playlist, current track and derived state
//!
//! Composes a [`PlaybackSession`] with the active playlist and the visitor's
//! persisted preferences. The host owns the coordinator, forwards UI actions
//! to it and calls [`tick`](PlaybackCoordinator::tick) when backend callbacks
//! or display frames arrive.

use crate::{
    display::{format_time, progress_percent},
    engine::SoundEngine,
    error::Result,
    events::PlaybackEvent,
    session::PlaybackSession,
    types::{PlaybackSnapshot, PlaybackStatus},
};
use site_core::{Playlist, PlaylistSource, PreferenceStore, Track};
use tracing::{debug, info, warn};

/// Unified playback state and controls
pub struct PlaybackCoordinator<E: SoundEngine, S: PreferenceStore> {
    session: PlaybackSession<E>,
    prefs: S,
    playlist: Playlist,
    current: Option<Track>,
    playlist_loading: bool,
    show_playlist: bool,
    show_player: bool,
    mounted: bool,
}

impl<E: SoundEngine, S: PreferenceStore> PlaybackCoordinator<E, S> {
    /// Create a coordinator, restoring the persisted volume
    pub fn new(engine: E, prefs: S) -> Self {
        let volume = prefs.volume();
        debug!(volume, "Restored volume");

        Self {
            session: PlaybackSession::new(engine, volume),
            prefs,
            playlist: Playlist::new(),
            current: None,
            playlist_loading: false,
            show_playlist: false,
            show_player: false,
            mounted: true,
        }
    }

    // ===== Playlist =====

    /// Mark a playlist fetch as in flight
    pub fn begin_playlist_load(&mut self) {
        if self.mounted {
            self.playlist_loading = true;
        }
    }

    /// Accept a fetched playlist
    ///
    /// When nothing is selected yet, selects the track at the persisted
    /// index (the first track if that index is out of range) without loading
    /// it. Ignored after [`unmount`](Self::unmount).
    pub fn receive_playlist(&mut self, playlist: Playlist) {
        if !self.mounted {
            debug!(len = playlist.len(), "Dropping playlist received after unmount");
            return;
        }

        self.playlist_loading = false;
        self.set_playlist(playlist);

        if self.current.is_none() && !self.playlist.is_empty() {
            let stored = self.prefs.track_index();
            let index = if stored < self.playlist.len() { stored } else { 0 };
            self.current = self.playlist.get(index).cloned();

            if let Some(track) = &self.current {
                debug!(index, id = %track.id, "Restored current track");
                self.session.emit(PlaybackEvent::TrackChanged {
                    track_id: track.id.clone(),
                    src: track.src.clone(),
                });
            }
        }
    }

    /// Fetch the playlist from `source` and accept it
    pub async fn load_playlist<P>(&mut self, source: &P)
    where
        P: PlaylistSource + ?Sized,
    {
        self.begin_playlist_load();
        let playlist = source.load().await;
        info!(tracks = playlist.len(), "Playlist loaded");
        self.receive_playlist(playlist);
    }

    /// Replace the active playlist
    pub fn set_playlist(&mut self, playlist: Playlist) {
        self.playlist = playlist;
        self.session.emit(PlaybackEvent::PlaylistChanged {
            length: self.playlist.len(),
        });
    }

    /// The active playlist
    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    // ===== Track selection =====

    /// Select `track` and load it
    ///
    /// Persists the track's index when it belongs to the active playlist.
    pub fn set_track(&mut self, track: Track) {
        if let Some(index) = self.playlist.position_of(&track) {
            if let Err(e) = self.prefs.set_track_index(index) {
                warn!(error = %e, "Failed to persist track index");
            }
        }

        self.session.load_track(&track);
        self.session.emit(PlaybackEvent::TrackChanged {
            track_id: track.id.clone(),
            src: track.src.clone(),
        });
        self.current = Some(track);
    }

    /// Select `track` and start playing it
    ///
    /// When `playlist` is given it replaces the active playlist first, so the
    /// persisted index refers to the new playlist.
    pub fn queue_and_play(&mut self, track: Track, playlist: Option<Playlist>) {
        if let Some(playlist) = playlist {
            self.set_playlist(playlist);
        }
        self.set_track(track);
        self.session.play();
    }

    /// Advance to the next track, wrapping to the first
    pub fn next_song(&mut self) {
        let Some(index) = self.current_index() else {
            return;
        };
        let next = (index + 1) % self.playlist.len();
        self.jump_to(next);
    }

    /// Go back to the previous track, wrapping to the last
    pub fn previous_song(&mut self) {
        let Some(index) = self.current_index() else {
            return;
        };
        let len = self.playlist.len();
        let previous = (index + len - 1) % len;
        self.jump_to(previous);
    }

    fn jump_to(&mut self, index: usize) {
        if let Some(track) = self.playlist.get(index).cloned() {
            self.set_track(track);
            self.session.play();
        }
    }

    /// Position of the current track in the playlist, matched by media locator
    pub fn current_index(&self) -> Option<usize> {
        self.current
            .as_ref()
            .and_then(|track| self.playlist.position_of(track))
    }

    /// The selected track
    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    /// Title of the selected track, empty when none
    pub fn track_title(&self) -> &str {
        self.current.as_ref().map_or("", |track| track.title.as_str())
    }

    // ===== Transport =====

    /// Play the current track, loading it first if needed
    pub fn play(&mut self) {
        let Some(track) = self.current.as_ref() else {
            debug!("play() without a current track");
            return;
        };

        if !self.session.has_sound() {
            let track = track.clone();
            self.session.load_track(&track);
        }
        self.session.play();
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.session.pause();
    }

    /// Stop playback
    pub fn stop(&mut self) {
        self.session.stop();
    }

    /// Seek to `position` seconds
    ///
    /// # Errors
    /// Returns an error for invalid positions or a rejected seek
    pub fn seek(&mut self, position: f64) -> Result<()> {
        self.session.seek(position)
    }

    /// Set and persist the volume
    pub fn update_volume(&mut self, level: f32) {
        self.session.update_volume(level, &mut self.prefs);
    }

    /// Flip the mute state
    pub fn toggle_mute(&mut self) {
        self.session.toggle_mute();
    }

    // ===== Host driving =====

    /// Apply queued backend notifications
    pub fn process_events(&mut self) -> usize {
        self.session.process_events()
    }

    /// Apply notifications, then run one polling frame
    ///
    /// Returns `true` when the frame sampled a new position.
    pub fn tick(&mut self) -> bool {
        self.session.process_events();
        self.session.on_frame()
    }

    /// Release the sound and stop accepting playlist results
    pub fn unmount(&mut self) {
        info!("Unmounting playback coordinator");
        self.mounted = false;
        self.playlist_loading = false;
        self.session.release();
    }

    /// Whether the coordinator is still mounted
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Take all events emitted since the last call
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        self.session.drain_events()
    }

    // ===== Derived state =====

    /// Lifecycle status
    pub fn status(&self) -> PlaybackStatus {
        self.session.status()
    }

    /// Whether audio is playing
    pub fn is_playing(&self) -> bool {
        self.session.is_playing()
    }

    /// Whether the playlist or media is loading
    pub fn is_loading(&self) -> bool {
        self.playlist_loading || self.session.is_loading()
    }

    /// Last load or play failure
    pub fn error(&self) -> Option<&str> {
        self.session.error()
    }

    /// Elapsed seconds
    pub fn elapsed(&self) -> f64 {
        self.session.elapsed()
    }

    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.session.duration()
    }

    /// Elapsed as a percentage of duration
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.session.elapsed(), self.session.duration())
    }

    /// Volume (0.0 - 1.0)
    pub fn volume(&self) -> f32 {
        self.session.volume()
    }

    /// Whether audio is muted
    pub fn is_muted(&self) -> bool {
        self.session.is_muted()
    }

    /// Playlist panel visibility
    pub fn show_playlist(&self) -> bool {
        self.show_playlist
    }

    /// Show or hide the playlist panel
    pub fn set_show_playlist(&mut self, show: bool) {
        self.show_playlist = show;
    }

    /// Player panel visibility
    pub fn show_player(&self) -> bool {
        self.show_player
    }

    /// Show or hide the player panel
    pub fn set_show_player(&mut self, show: bool) {
        self.show_player = show;
    }

    /// Everything the presentation layer renders
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            current_track: self.current.clone(),
            track_title: self.track_title().to_string(),
            status: self.status(),
            playing: self.is_playing(),
            loading: self.is_loading(),
            error: self.error().map(str::to_string),
            elapsed: self.elapsed(),
            duration: self.duration(),
            progress_percent: self.progress_percent(),
            elapsed_label: format_time(self.elapsed()),
            duration_label: format_time(self.duration()),
            volume: self.volume(),
            muted: self.is_muted(),
            playlist_len: self.playlist.len(),
            show_playlist: self.show_playlist,
            show_player: self.show_player,
        }
    }

    /// The underlying session
    pub fn session(&self) -> &PlaybackSession<E> {
        &self.session
    }

    /// The preference store
    pub fn preferences(&self) -> &S {
        &self.prefs
    }
}
