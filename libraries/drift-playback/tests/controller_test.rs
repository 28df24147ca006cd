//! Integration tests for the player controller
//!
//! Drives the controller through a recording renderer fake and asserts on
//! both the observable state and the commands that reached the renderer.

use drift_core::types::{RadioStation, Track};
use drift_playback::{
    AudioRenderer, PlaybackError, PlayerConfig, PlayerController, PlayerEvent, PlayerState,
    RendererEvent, RepeatMode,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Load(String),
    Play,
    Pause,
    Stop,
    Seek(Duration),
    SetVolume(f32),
}

#[derive(Clone, Default)]
struct RecordingRenderer {
    commands: Arc<Mutex<Vec<Command>>>,
}

impl RecordingRenderer {
    fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }

    fn clear(&self) {
        self.commands.lock().unwrap().clear();
    }
}

impl AudioRenderer for RecordingRenderer {
    fn load(&mut self, stream_url: &str) -> drift_playback::Result<()> {
        self.commands
            .lock()
            .unwrap()
            .push(Command::Load(stream_url.to_string()));
        Ok(())
    }

    fn play(&mut self) {
        self.commands.lock().unwrap().push(Command::Play);
    }

    fn pause(&mut self) {
        self.commands.lock().unwrap().push(Command::Pause);
    }

    fn stop(&mut self) {
        self.commands.lock().unwrap().push(Command::Stop);
    }

    fn seek(&mut self, position: Duration) -> drift_playback::Result<()> {
        self.commands.lock().unwrap().push(Command::Seek(position));
        Ok(())
    }

    fn set_volume(&mut self, gain: f32) {
        self.commands.lock().unwrap().push(Command::SetVolume(gain));
    }
}

fn make_track(title: &str, secs: u64) -> Track {
    Track::new(title, "Test Artist", format!("https://cdn.test/{title}.mp3"))
        .with_duration(Duration::from_secs(secs))
}

fn three_track_player() -> (PlayerController, RecordingRenderer, Vec<Track>) {
    let renderer = RecordingRenderer::default();
    let mut player =
        PlayerController::new(Box::new(renderer.clone()), PlayerConfig::default());
    let tracks = vec![
        make_track("alpha", 180),
        make_track("beta", 200),
        make_track("gamma", 160),
    ];
    player.set_playlist(tracks.clone());
    (player, renderer, tracks)
}

fn ready(player: &mut PlayerController, secs: u64) {
    player.handle_renderer_event(RendererEvent::Ready {
        duration: Duration::from_secs(secs),
    });
}

#[test]
fn load_goes_through_loading_to_playing() {
    let (mut player, renderer, tracks) = three_track_player();

    player.play_at(0).unwrap();
    assert_eq!(*player.state(), PlayerState::Loading);
    assert_eq!(player.current_track(), Some(&tracks[0]));

    ready(&mut player, 180);
    assert!(player.is_playing());
    assert_eq!(player.duration(), Duration::from_secs(180));

    let commands = renderer.commands();
    assert!(commands.contains(&Command::Load(tracks[0].stream_url.clone())));
    assert!(commands.contains(&Command::Play));
}

#[test]
fn play_at_out_of_range_is_rejected_cleanly() {
    let (mut player, renderer, _) = three_track_player();
    renderer.clear();

    let err = player.play_at(7).unwrap_err();
    assert!(matches!(err, PlaybackError::IndexOutOfBounds(7)));
    assert_eq!(*player.state(), PlayerState::Idle);
    assert_eq!(player.current_index(), 0);
    assert!(renderer.commands().is_empty());
}

#[test]
fn invalid_stream_url_moves_to_errored_but_keeps_track() {
    let renderer = RecordingRenderer::default();
    let mut player =
        PlayerController::new(Box::new(renderer.clone()), PlayerConfig::default());

    let bad = Track::new("broken", "Artist", "not a url");
    let err = player.load_and_play(bad.clone()).unwrap_err();
    assert!(matches!(err, PlaybackError::InvalidStreamUrl(_)));
    assert!(matches!(player.state(), PlayerState::Errored(_)));
    assert_eq!(player.current_track(), Some(&bad));
}

#[test]
fn errored_state_is_not_resumable_by_play() {
    let (mut player, renderer, _) = three_track_player();
    player.play_at(0).unwrap();
    player.handle_renderer_event(RendererEvent::Failed {
        reason: "stream unreachable".to_string(),
    });
    assert!(matches!(player.state(), PlayerState::Errored(_)));

    renderer.clear();
    player.play();
    assert!(matches!(player.state(), PlayerState::Errored(_)));
    assert!(renderer.commands().is_empty());

    // A fresh load recovers.
    player.play_at(1).unwrap();
    ready(&mut player, 200);
    assert!(player.is_playing());
}

#[test]
fn pause_and_toggle_roundtrip() {
    let (mut player, _, _) = three_track_player();
    player.play_at(0).unwrap();
    ready(&mut player, 180);

    player.pause();
    assert_eq!(*player.state(), PlayerState::Paused);

    player.toggle();
    assert!(player.is_playing());

    player.toggle();
    assert_eq!(*player.state(), PlayerState::Paused);
}

#[test]
fn transport_is_noop_without_a_session() {
    let renderer = RecordingRenderer::default();
    let mut player =
        PlayerController::new(Box::new(renderer.clone()), PlayerConfig::default());
    renderer.clear();

    player.play();
    player.pause();
    player.stop();
    assert_eq!(*player.state(), PlayerState::Idle);
    assert!(renderer.commands().is_empty());

    let err = player.seek(Duration::from_secs(10)).unwrap_err();
    assert!(matches!(err, PlaybackError::NoTrackLoaded));
}

#[test]
fn stop_resets_position_but_retains_track_and_index() {
    let (mut player, _, tracks) = three_track_player();
    player.play_at(1).unwrap();
    ready(&mut player, 200);
    player.handle_renderer_event(RendererEvent::TimeUpdate {
        position: Duration::from_secs(42),
    });

    player.stop();
    assert_eq!(*player.state(), PlayerState::Stopped);
    assert_eq!(player.position(), Duration::ZERO);
    assert_eq!(player.current_track(), Some(&tracks[1]));
    assert_eq!(player.current_index(), 1);
}

#[test]
fn seek_clamps_to_track_duration() {
    let (mut player, renderer, _) = three_track_player();
    player.play_at(0).unwrap();
    ready(&mut player, 180);
    renderer.clear();

    player.seek(Duration::from_secs(9999)).unwrap();
    assert_eq!(player.position(), Duration::from_secs(180));
    assert_eq!(
        renderer.commands(),
        vec![Command::Seek(Duration::from_secs(180))]
    );
}

#[test]
fn skip_forward_and_backward_use_configured_interval() {
    let (mut player, _, _) = three_track_player();
    player.play_at(0).unwrap();
    ready(&mut player, 180);
    player.handle_renderer_event(RendererEvent::TimeUpdate {
        position: Duration::from_secs(60),
    });

    player.skip_forward().unwrap();
    assert_eq!(player.position(), Duration::from_secs(75));

    player.skip_backward().unwrap();
    player.skip_backward().unwrap();
    assert_eq!(player.position(), Duration::from_secs(45));

    // Backward skips saturate at zero.
    player.seek(Duration::from_secs(5)).unwrap();
    player.skip_backward().unwrap();
    assert_eq!(player.position(), Duration::ZERO);
}

#[test]
fn next_with_repeat_off_advances_then_stops_at_end() {
    let (mut player, renderer, tracks) = three_track_player();
    player.play_at(2).unwrap();
    ready(&mut player, 160);
    renderer.clear();

    player.next().unwrap();
    assert_eq!(*player.state(), PlayerState::Stopped);
    assert_eq!(player.current_index(), 2);
    assert_eq!(player.current_track(), Some(&tracks[2]));
    assert_eq!(renderer.commands(), vec![Command::Stop]);
}

#[test]
fn walking_a_three_track_queue_with_repeat_off() {
    let (mut player, _, tracks) = three_track_player();
    player.play_at(0).unwrap();
    ready(&mut player, 180);

    player.next().unwrap();
    ready(&mut player, 200);
    player.next().unwrap();
    ready(&mut player, 160);
    assert_eq!(player.current_index(), 2);
    assert_eq!(player.current_track(), Some(&tracks[2]));
    assert!(player.is_playing());
    assert!(!player.has_next());

    player.next().unwrap();
    assert_eq!(*player.state(), PlayerState::Stopped);
    assert_eq!(player.current_index(), 2);
}

#[test]
fn next_with_repeat_all_wraps_to_first_track() {
    let (mut player, _, tracks) = three_track_player();
    player.set_repeat(RepeatMode::All);
    player.play_at(2).unwrap();
    ready(&mut player, 160);

    player.next().unwrap();
    ready(&mut player, 180);
    assert_eq!(player.current_index(), 0);
    assert_eq!(player.current_track(), Some(&tracks[0]));
    assert!(player.is_playing());
}

#[test]
fn repeat_one_replays_current_from_zero() {
    let (mut player, renderer, tracks) = three_track_player();
    player.set_repeat(RepeatMode::One);
    player.play_at(1).unwrap();
    ready(&mut player, 200);
    player.handle_renderer_event(RendererEvent::TimeUpdate {
        position: Duration::from_secs(199),
    });
    renderer.clear();

    player.handle_renderer_event(RendererEvent::Finished);
    assert_eq!(player.current_index(), 1);
    assert_eq!(player.current_track(), Some(&tracks[1]));
    assert!(player.is_playing());
    let commands = renderer.commands();
    assert!(commands.contains(&Command::Seek(Duration::ZERO)));
    assert!(commands.contains(&Command::Play));
}

#[test]
fn finished_auto_advances_like_manual_next() {
    let (mut player, _, tracks) = three_track_player();
    player.play_at(0).unwrap();
    ready(&mut player, 180);

    player.handle_renderer_event(RendererEvent::Finished);
    assert_eq!(*player.state(), PlayerState::Loading);
    assert_eq!(player.current_track(), Some(&tracks[1]));

    ready(&mut player, 200);
    assert!(player.is_playing());
}

#[test]
fn previous_restarts_when_past_threshold() {
    let (mut player, renderer, tracks) = three_track_player();
    player.play_at(1).unwrap();
    ready(&mut player, 200);
    player.handle_renderer_event(RendererEvent::TimeUpdate {
        position: Duration::from_secs(10),
    });
    renderer.clear();

    player.previous().unwrap();
    assert_eq!(player.current_index(), 1);
    assert_eq!(player.current_track(), Some(&tracks[1]));
    assert_eq!(player.position(), Duration::ZERO);
    assert_eq!(renderer.commands(), vec![Command::Seek(Duration::ZERO)]);
}

#[test]
fn previous_within_threshold_goes_to_prior_track() {
    let (mut player, _, tracks) = three_track_player();
    player.play_at(1).unwrap();
    ready(&mut player, 200);
    player.handle_renderer_event(RendererEvent::TimeUpdate {
        position: Duration::from_secs(2),
    });

    player.previous().unwrap();
    assert_eq!(player.current_index(), 0);
    assert_eq!(player.current_track(), Some(&tracks[0]));
}

#[test]
fn previous_at_queue_start_is_a_noop() {
    let (mut player, renderer, tracks) = three_track_player();
    player.play_at(0).unwrap();
    ready(&mut player, 180);
    renderer.clear();

    player.previous().unwrap();
    assert_eq!(player.current_index(), 0);
    assert_eq!(player.current_track(), Some(&tracks[0]));
    assert!(player.is_playing());
    assert!(renderer.commands().is_empty());
}

#[test]
fn shuffle_roundtrip_restores_order_and_pointer() {
    let (mut player, _, tracks) = three_track_player();
    player.play_at(1).unwrap();
    ready(&mut player, 200);

    player.toggle_shuffle();
    assert!(player.is_shuffled());
    assert_eq!(player.current_index(), 0);
    assert_eq!(player.playlist()[0], tracks[1]);

    player.toggle_shuffle();
    assert!(!player.is_shuffled());
    assert_eq!(player.playlist(), &tracks[..]);
    assert_eq!(player.current_index(), 1);
}

#[test]
fn stale_load_outcome_is_discarded() {
    let (mut player, _, tracks) = three_track_player();
    player.play_at(0).unwrap();
    // Second load before the first resolves supersedes it.
    player.play_at(1).unwrap();

    // Outcome of the superseded load must not surface.
    player.handle_renderer_event(RendererEvent::Failed {
        reason: "first stream broke".to_string(),
    });
    assert_eq!(*player.state(), PlayerState::Loading);
    assert_eq!(player.current_track(), Some(&tracks[1]));

    ready(&mut player, 200);
    assert!(player.is_playing());
    assert_eq!(player.current_track(), Some(&tracks[1]));
}

#[test]
fn interruption_pauses_and_resume_restores_playback() {
    let (mut player, _, _) = three_track_player();
    player.play_at(0).unwrap();
    ready(&mut player, 180);

    player.handle_renderer_event(RendererEvent::Interrupted);
    assert_eq!(*player.state(), PlayerState::Paused);

    player.handle_renderer_event(RendererEvent::Resumed);
    assert!(player.is_playing());
}

#[test]
fn live_station_plays_outside_the_queue() {
    let (mut player, _, _) = three_track_player();
    player.play_at(2).unwrap();
    ready(&mut player, 160);

    let station = &RadioStation::sample_stations()[0];
    player.play_station(station).unwrap();
    // Live streams report no duration.
    player.handle_renderer_event(RendererEvent::Ready {
        duration: Duration::ZERO,
    });
    assert!(player.is_playing());
    assert_eq!(player.duration(), Duration::ZERO);
    assert_eq!(player.progress(), 0.0);
    // Queue pointer is untouched by station playback.
    assert_eq!(player.current_index(), 2);
}

#[test]
fn volume_changes_reach_the_renderer_as_gain() {
    let (mut player, renderer, _) = three_track_player();
    renderer.clear();

    player.set_volume(0.5);
    assert_eq!(player.volume(), 0.5);
    assert_eq!(renderer.commands(), vec![Command::SetVolume(0.5)]);

    renderer.clear();
    player.toggle_mute();
    assert!(player.is_muted());
    assert_eq!(player.volume(), 0.5);
    assert_eq!(renderer.commands(), vec![Command::SetVolume(0.0)]);

    renderer.clear();
    player.toggle_mute();
    assert!(!player.is_muted());
    assert_eq!(renderer.commands(), vec![Command::SetVolume(0.5)]);
}

#[test]
fn set_volume_clamps_out_of_range_values() {
    let (mut player, _, _) = three_track_player();
    player.set_volume(3.0);
    assert_eq!(player.volume(), 1.0);
    player.set_volume(-1.0);
    assert_eq!(player.volume(), 0.0);
}

#[test]
fn events_are_drained_in_order() {
    let (mut player, _, tracks) = three_track_player();
    player.take_events();

    player.play_at(0).unwrap();
    ready(&mut player, 180);

    let events = player.take_events();
    let track_change = events
        .iter()
        .find(|e| matches!(e, PlayerEvent::TrackChanged { .. }))
        .expect("track change event");
    match track_change {
        PlayerEvent::TrackChanged {
            track_id,
            previous_track_id,
        } => {
            assert_eq!(track_id, &tracks[0].id);
            assert!(previous_track_id.is_none());
        }
        _ => unreachable!(),
    }
    assert!(events
        .iter()
        .any(|e| matches!(e, PlayerEvent::StateChanged { state: PlayerState::Playing })));

    // Drained means drained.
    assert!(player.take_events().is_empty());
}

#[test]
fn repeat_mode_cycles_off_all_one() {
    let (mut player, _, _) = three_track_player();
    assert_eq!(player.repeat(), RepeatMode::Off);
    player.toggle_repeat();
    assert_eq!(player.repeat(), RepeatMode::All);
    player.toggle_repeat();
    assert_eq!(player.repeat(), RepeatMode::One);
    player.toggle_repeat();
    assert_eq!(player.repeat(), RepeatMode::Off);
}

#[test]
fn time_updates_surface_as_position_events() {
    let (mut player, _, _) = three_track_player();
    player.play_at(0).unwrap();
    ready(&mut player, 180);
    player.take_events();

    player.handle_renderer_event(RendererEvent::TimeUpdate {
        position: Duration::from_secs(90),
    });
    assert_eq!(player.position(), Duration::from_secs(90));
    assert_eq!(player.progress(), 0.5);

    let events = player.take_events();
    assert!(events.iter().any(|e| matches!(
        e,
        PlayerEvent::PositionUpdate {
            position_ms: 90_000,
            duration_ms: 180_000,
        }
    )));
}
