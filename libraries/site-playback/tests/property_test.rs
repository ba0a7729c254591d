//! Property-based tests for navigation and volume rules

mod common;

use common::{playlist, FakeEngine};
use proptest::prelude::*;
use site_core::MemoryPreferences;
use site_playback::{format_time, progress_percent, PlaybackCoordinator};

type Coordinator = PlaybackCoordinator<FakeEngine, MemoryPreferences>;

fn player_at(len: usize, start: usize) -> Coordinator {
    let mut player = PlaybackCoordinator::new(FakeEngine::new(), MemoryPreferences::new());
    player.receive_playlist(playlist(len));
    if let Some(track) = player.playlist().get(start).cloned() {
        player.set_track(track);
    }
    player
}

proptest! {
    #[test]
    fn next_song_cycles_back(len in 1usize..20, start_seed in 0usize..100) {
        let start = start_seed % len;
        let mut player = player_at(len, start);

        for _ in 0..len {
            player.next_song();
        }

        prop_assert_eq!(player.current_index(), Some(start));
    }

    #[test]
    fn previous_from_first_selects_last(len in 1usize..20) {
        let mut player = player_at(len, 0);

        player.previous_song();

        prop_assert_eq!(player.current_index(), Some(len - 1));
    }

    #[test]
    fn previous_undoes_next(len in 1usize..20, start_seed in 0usize..100) {
        let start = start_seed % len;
        let mut player = player_at(len, start);

        player.next_song();
        player.previous_song();

        prop_assert_eq!(player.current_index(), Some(start));
    }

    #[test]
    fn navigation_keeps_one_live_primitive(len in 1usize..10, steps in prop::collection::vec(any::<bool>(), 1..30)) {
        let engine = FakeEngine::new();
        let mut player = PlaybackCoordinator::new(engine.clone(), MemoryPreferences::new());
        player.receive_playlist(playlist(len));
        player.play();

        for forward in steps {
            if forward {
                player.next_song();
            } else {
                player.previous_song();
            }
            player.tick();
        }

        prop_assert_eq!(engine.live_count(), 1);
    }

    #[test]
    fn volume_stays_in_range(level in -10.0f32..10.0) {
        let mut player = player_at(1, 0);

        player.update_volume(level);

        let volume = player.volume();
        prop_assert!((0.0..=1.0).contains(&volume));
        prop_assert_eq!(player.is_muted(), volume == 0.0);
    }

    #[test]
    fn progress_is_a_percentage(elapsed in -1e6f64..1e6, duration in -1e6f64..1e6) {
        let percent = progress_percent(elapsed, duration);
        prop_assert!((0.0..=100.0).contains(&percent));
    }

    #[test]
    fn formatted_seconds_are_two_digits(seconds in 0.0f64..1e6) {
        let label = format_time(seconds);
        let (_, secs) = label.split_once(':').unwrap();
        prop_assert_eq!(secs.len(), 2);
    }
}
