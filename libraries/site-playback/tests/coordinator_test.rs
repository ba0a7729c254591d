//! Integration tests for the playback coordinator
//!
//! Cover playlist arrival, track restoration, navigation with wraparound,
//! lazy loading on play, persistence and the UI snapshot.

mod common;

use async_trait::async_trait;
use common::{playlist, track, FakeEngine};
use mockall::mock;
use site_core::{MemoryPreferences, Playlist, PlaylistSource, PreferenceStore};
use site_playback::{PlaybackCoordinator, PlaybackEvent, PlaybackStatus};

mock! {
    pub Source {}

    #[async_trait]
    impl PlaylistSource for Source {
        async fn load(&self) -> Playlist;
    }
}

type Coordinator = PlaybackCoordinator<FakeEngine, MemoryPreferences>;

fn coordinator_with(prefs: MemoryPreferences) -> (Coordinator, FakeEngine) {
    let engine = FakeEngine::new();
    (PlaybackCoordinator::new(engine.clone(), prefs), engine)
}

fn coordinator() -> (Coordinator, FakeEngine) {
    coordinator_with(MemoryPreferences::new())
}

fn current_id(player: &Coordinator) -> Option<String> {
    player.current_track().map(|t| t.id.clone())
}

// ===== Playlist arrival =====

#[test]
fn receive_playlist_restores_stored_index_without_loading() {
    let mut prefs = MemoryPreferences::new();
    prefs.set_track_index(2).unwrap();
    let (mut player, engine) = coordinator_with(prefs);

    player.receive_playlist(playlist(3));

    assert_eq!(current_id(&player).as_deref(), Some("2"));
    assert_eq!(player.track_title(), "Track 2");
    assert!(engine.sounds().is_empty());
    assert!(!player.session().has_sound());
}

#[test]
fn out_of_range_index_selects_first_track() {
    let mut prefs = MemoryPreferences::new();
    prefs.set_track_index(9).unwrap();
    let (mut player, _engine) = coordinator_with(prefs);

    player.receive_playlist(playlist(3));

    assert_eq!(current_id(&player).as_deref(), Some("0"));
}

#[test]
fn empty_playlist_selects_nothing() {
    let (mut player, _engine) = coordinator();

    player.receive_playlist(Playlist::new());

    assert!(player.current_track().is_none());
    assert_eq!(player.track_title(), "");
}

#[test]
fn later_playlist_keeps_selection() {
    let (mut player, _engine) = coordinator();
    player.receive_playlist(playlist(3));
    player.set_track(track(1));

    player.receive_playlist(playlist(5));

    assert_eq!(current_id(&player).as_deref(), Some("1"));
    assert_eq!(player.playlist().len(), 5);
}

#[test]
fn playlist_after_unmount_is_ignored() {
    let (mut player, _engine) = coordinator();
    player.begin_playlist_load();

    player.unmount();
    player.receive_playlist(playlist(3));

    assert!(player.playlist().is_empty());
    assert!(player.current_track().is_none());
    assert!(!player.is_loading());
}

#[tokio::test]
async fn load_playlist_awaits_source() {
    let mut source = MockSource::new();
    source.expect_load().times(1).returning(|| playlist(2));
    let (mut player, _engine) = coordinator();

    player.load_playlist(&source).await;

    assert_eq!(player.playlist().len(), 2);
    assert_eq!(current_id(&player).as_deref(), Some("0"));
    assert!(!player.is_loading());
}

#[test]
fn loading_flag_covers_playlist_fetch() {
    let (mut player, _engine) = coordinator();

    player.begin_playlist_load();
    assert!(player.is_loading());
    assert!(player.snapshot().loading);

    player.receive_playlist(playlist(1));
    assert!(!player.is_loading());
}

// ===== Track selection =====

#[test]
fn set_track_persists_index_and_loads() {
    let (mut player, engine) = coordinator();
    player.receive_playlist(playlist(4));

    player.set_track(track(3));

    assert_eq!(player.preferences().track_index(), 3);
    assert_eq!(engine.sounds().len(), 1);
    assert_eq!(engine.sounds()[0].src, "https://cdn.example.com/audio/3.mp3");
    assert_eq!(player.status(), PlaybackStatus::Loading);
}

#[test]
fn set_track_outside_playlist_does_not_persist() {
    let (mut player, engine) = coordinator();
    player.receive_playlist(playlist(2));

    player.set_track(track(7));

    assert_eq!(player.preferences().get("trackIndex"), None);
    assert_eq!(current_id(&player).as_deref(), Some("7"));
    assert_eq!(engine.live_count(), 1);
}

#[test]
fn queue_and_play_indexes_the_new_playlist() {
    let (mut player, engine) = coordinator();
    player.receive_playlist(playlist(2));

    let album: Playlist = (10..13).map(track).collect();
    player.queue_and_play(track(12), Some(album));
    player.process_events();

    assert_eq!(player.playlist().len(), 3);
    assert_eq!(player.preferences().track_index(), 2);
    assert!(player.is_playing());
    assert_eq!(engine.live_count(), 1);
}

#[test]
fn queue_and_play_keeps_playlist_when_none_given() {
    let (mut player, _engine) = coordinator();
    player.receive_playlist(playlist(3));

    player.queue_and_play(track(1), None);

    assert_eq!(player.playlist().len(), 3);
    assert_eq!(player.preferences().track_index(), 1);
}

// ===== Navigation =====

#[test]
fn next_song_wraps_and_plays() {
    let (mut player, engine) = coordinator();
    player.receive_playlist(playlist(3));
    player.set_track(track(2));

    player.next_song();
    player.process_events();

    assert_eq!(current_id(&player).as_deref(), Some("0"));
    assert!(player.is_playing());
    assert_eq!(engine.live_count(), 1);
    assert_eq!(player.preferences().track_index(), 0);
}

#[test]
fn previous_song_wraps_to_last() {
    let (mut player, _engine) = coordinator();
    player.receive_playlist(playlist(4));

    player.previous_song();

    assert_eq!(current_id(&player).as_deref(), Some("3"));
    assert_eq!(player.current_index(), Some(3));
}

#[test]
fn navigation_without_current_is_noop() {
    let (mut player, engine) = coordinator();

    player.next_song();
    player.previous_song();

    assert!(player.current_track().is_none());
    assert!(engine.sounds().is_empty());
}

#[test]
fn navigation_from_unlisted_track_is_noop() {
    let (mut player, engine) = coordinator();
    player.receive_playlist(playlist(3));
    player.set_track(track(9));

    player.next_song();

    assert_eq!(current_id(&player).as_deref(), Some("9"));
    assert_eq!(engine.sounds().len(), 1);
}

#[test]
fn navigation_matches_by_media_locator() {
    let (mut player, _engine) = coordinator();
    player.receive_playlist(playlist(3));

    // Same media, different metadata
    let mut renamed = track(1);
    renamed.title = "Renamed".to_string();
    player.set_track(renamed);
    player.next_song();

    assert_eq!(current_id(&player).as_deref(), Some("2"));
}

// ===== Transport =====

#[test]
fn play_loads_current_track_lazily() {
    let (mut player, engine) = coordinator();
    player.receive_playlist(playlist(2));
    assert!(engine.sounds().is_empty());

    player.play();
    player.process_events();

    assert_eq!(engine.sounds().len(), 1);
    assert_eq!(player.status(), PlaybackStatus::Playing);

    // Resuming reuses the primitive
    player.pause();
    player.play();
    assert_eq!(engine.sounds().len(), 1);
}

#[test]
fn play_without_current_is_noop() {
    let (mut player, engine) = coordinator();

    player.play();

    assert!(engine.sounds().is_empty());
    assert_eq!(player.status(), PlaybackStatus::Idle);
}

#[test]
fn volume_is_restored_and_persisted() {
    let mut prefs = MemoryPreferences::new();
    prefs.set_volume(0.3).unwrap();
    let (mut player, _engine) = coordinator_with(prefs);
    assert_eq!(player.volume(), 0.3);

    player.update_volume(0.7);

    assert_eq!(player.preferences().volume(), 0.7);
}

#[test]
fn tick_drives_progress_and_snapshot() {
    let (mut player, engine) = coordinator();
    player.receive_playlist(playlist(1));
    player.play();
    let id = player.session().sound_id().unwrap();
    engine.finish_loading(id, 200.0);
    player.process_events();

    engine.set_position(id, 50.0);
    assert!(player.tick());

    let snapshot = player.snapshot();
    assert_eq!(snapshot.status, PlaybackStatus::Playing);
    assert_eq!(snapshot.elapsed, 50.0);
    assert_eq!(snapshot.progress_percent, 25.0);
    assert_eq!(snapshot.elapsed_label, "0:50");
    assert_eq!(snapshot.duration_label, "3:20");
    assert_eq!(snapshot.track_title, "Track 0");
    assert_eq!(snapshot.playlist_len, 1);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["status"], "playing");
}

#[test]
fn seek_delegates() {
    let (mut player, engine) = coordinator();
    player.receive_playlist(playlist(1));
    player.play();
    let id = player.session().sound_id().unwrap();

    player.seek(30.0).unwrap();

    assert_eq!(player.elapsed(), 30.0);
    assert_eq!(engine.sound(id).position, 30.0);
    assert!(player.seek(-2.0).is_err());
}

#[test]
fn unmount_releases_primitive() {
    let (mut player, engine) = coordinator();
    player.receive_playlist(playlist(2));
    player.play();
    player.process_events();

    player.unmount();

    assert_eq!(engine.live_count(), 0);
    assert_eq!(player.status(), PlaybackStatus::Idle);
    assert!(!player.is_mounted());
}

#[test]
fn unmount_cancels_pending_frame() {
    let (mut player, engine) = coordinator();
    player.receive_playlist(playlist(1));
    player.play();
    let id = player.session().sound_id().unwrap();
    player.process_events();
    assert!(player.session().frame_pending());

    player.unmount();

    assert!(!player.session().frame_pending());
    engine.set_position(id, 10.0);
    assert!(!player.tick());
    assert_eq!(player.elapsed(), 0.0);
}

#[test]
fn panels_toggle_independently() {
    let (mut player, _engine) = coordinator();

    player.set_show_playlist(true);
    assert!(player.show_playlist());
    assert!(!player.show_player());

    player.set_show_player(true);
    player.set_show_playlist(false);
    let snapshot = player.snapshot();
    assert!(snapshot.show_player);
    assert!(!snapshot.show_playlist);
}

#[test]
fn track_changes_are_emitted() {
    let (mut player, _engine) = coordinator();
    player.receive_playlist(playlist(2));
    player.drain_events();

    player.next_song();

    let events = player.drain_events();
    assert!(events.contains(&PlaybackEvent::TrackChanged {
        track_id: "1".to_string(),
        src: "https://cdn.example.com/audio/1.mp3".to_string(),
    }));
}
