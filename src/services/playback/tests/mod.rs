//! Unit tests for the playback service
//!
//! Controller transport, the event reducer, the element binding and the
//! mini-player. All in memory.

#![allow(clippy::panic, clippy::unwrap_used)]

use futures::StreamExt;

use crate::config::PlaybackConfig;
use crate::services::playback::{
    ElementBinding, EventOutcome, MediaElement, MediaEvent, MediaEventKind, MiniPlayer,
    PlaybackController, PlaybackError, PlaybackPhase, PlayerVisibility, format_time,
};

fn loaded_controller(duration: f64) -> PlaybackController {
    let controller = PlaybackController::default();
    controller.set_current_audio("a.mp3", "Lesson 1").unwrap();
    controller.apply_event(&MediaEvent::metadata_loaded("a.mp3", duration));
    controller
}

mod transport {
    use super::*;

    #[test]
    fn starts_empty() {
        let controller = PlaybackController::default();
        let state = controller.state();

        assert_eq!(controller.phase(), PlaybackPhase::Empty);
        assert!(state.current_source.is_none());
        assert!(!state.is_playing);
        assert_eq!(state.current_time, 0.0);
        assert_eq!(state.duration, 0.0);
        assert_eq!(*state.volume, 1.0);
    }

    #[test]
    fn configured_default_volume_is_used() {
        let config = PlaybackConfig {
            default_volume: 0.4,
            ..PlaybackConfig::default()
        };
        let controller = PlaybackController::new(&config);
        assert_eq!(*controller.state().volume, 0.4);
    }

    #[test]
    fn set_current_audio_resets_position_and_load() {
        let controller = loaded_controller(180.0);
        controller.seek(42.0);
        controller.play();

        controller.set_current_audio("b.mp3", "Lesson 2").unwrap();
        let state = controller.state();

        assert_eq!(state.current_source.as_deref(), Some("b.mp3"));
        assert_eq!(state.current_title.as_deref(), Some("Lesson 2"));
        assert!(!state.is_playing);
        assert_eq!(state.current_time, 0.0);
        assert!(!state.is_loaded);
        assert_eq!(controller.phase(), PlaybackPhase::Loading);
    }

    #[test]
    fn set_current_audio_same_source_is_noop() {
        let controller = loaded_controller(180.0);
        controller.seek(42.0);
        controller.play();

        controller.set_current_audio("a.mp3", "Lesson 1").unwrap();
        let state = controller.state();

        assert!(state.is_playing);
        assert_eq!(state.current_time, 42.0);
        assert!(state.is_loaded);
    }

    #[test]
    fn set_current_audio_rejects_empty_source() {
        let controller = PlaybackController::default();
        assert_eq!(
            controller.set_current_audio("  ", "x"),
            Err(PlaybackError::EmptySource)
        );
        assert_eq!(controller.phase(), PlaybackPhase::Empty);
    }

    #[test]
    fn play_without_source_stays_paused() {
        let controller = PlaybackController::default();
        controller.play();
        controller.toggle_play();
        assert!(!controller.state().is_playing);
    }

    #[test]
    fn toggle_play_flips_intent() {
        let controller = loaded_controller(60.0);
        controller.toggle_play();
        assert!(controller.state().is_playing);
        controller.toggle_play();
        assert!(!controller.state().is_playing);
    }

    #[test]
    fn seek_clamps_to_duration() {
        let controller = loaded_controller(180.0);
        controller.seek(9999.0);
        assert_eq!(controller.state().current_time, 180.0);

        controller.seek(-5.0);
        assert_eq!(controller.state().current_time, 0.0);
    }

    #[test]
    fn seek_before_metadata_is_clamped_when_duration_arrives() {
        let controller = PlaybackController::default();
        controller.set_current_audio("a.mp3", "Lesson 1").unwrap();
        controller.seek(500.0);
        assert_eq!(controller.state().current_time, 500.0);

        controller.apply_event(&MediaEvent::metadata_loaded("a.mp3", 120.0));
        assert_eq!(controller.state().current_time, 120.0);
    }

    #[test]
    fn skip_moves_relative_and_clamps() {
        let controller = loaded_controller(25.0);
        controller.skip_forward();
        assert_eq!(controller.state().current_time, 10.0);
        controller.skip(100.0);
        assert_eq!(controller.state().current_time, 25.0);
        controller.skip_back();
        assert_eq!(controller.state().current_time, 15.0);
        controller.skip(-100.0);
        assert_eq!(controller.state().current_time, 0.0);
    }

    #[test]
    fn set_volume_clamps_and_mutes_on_zero() {
        let controller = PlaybackController::default();
        for (input, stored, muted) in [
            (0.5, 0.5, false),
            (1.7, 1.0, false),
            (-0.3, 0.0, false),
            (0.0, 0.0, true),
            (1.0, 1.0, false),
        ] {
            controller.set_volume(input);
            let state = controller.state();
            assert_eq!(*state.volume, stored, "volume for input {input}");
            assert_eq!(state.is_muted, muted, "mute for input {input}");
        }
    }

    #[test]
    fn set_volume_nan_is_silent() {
        let controller = PlaybackController::default();
        controller.set_volume(f64::NAN);
        assert_eq!(*controller.state().volume, 0.0);
    }

    #[test]
    fn toggle_mute_twice_restores_volume() {
        let controller = PlaybackController::default();
        controller.set_volume(0.37);

        controller.toggle_mute();
        let muted = controller.state();
        assert!(muted.is_muted);
        assert_eq!(*muted.volume, 0.37);
        assert_eq!(muted.effective_volume(), 0.0);

        controller.toggle_mute();
        let unmuted = controller.state();
        assert!(!unmuted.is_muted);
        assert_eq!(*unmuted.volume, 0.37);
    }

    #[test]
    fn clear_audio_keeps_volume_and_mute() {
        let controller = loaded_controller(60.0);
        controller.set_volume(0.6);
        controller.toggle_mute();
        controller.play();

        controller.clear_audio();
        let state = controller.state();

        assert_eq!(controller.phase(), PlaybackPhase::Empty);
        assert!(state.current_title.is_none());
        assert!(!state.is_playing);
        assert_eq!(state.duration, 0.0);
        assert_eq!(*state.volume, 0.6);
        assert!(state.is_muted);
    }

    #[test]
    fn attach_lesson_uses_fallback_title_and_clears_without_audio() {
        let controller = PlaybackController::default();

        controller.attach_lesson(Some("intro.mp3"), None).unwrap();
        assert_eq!(controller.state().current_title.as_deref(), Some("Lekcia"));

        controller.attach_lesson(None, None).unwrap();
        assert_eq!(controller.phase(), PlaybackPhase::Empty);
    }

    #[test]
    fn binding_setters_clamp() {
        let controller = loaded_controller(100.0);
        controller.set_current_time(150.0);
        assert_eq!(controller.state().current_time, 100.0);

        controller.set_duration(50.0);
        let state = controller.state();
        assert_eq!(state.duration, 50.0);
        assert_eq!(state.current_time, 50.0);
    }

    #[test]
    fn clones_share_state() {
        let controller = PlaybackController::default();
        let other = controller.clone();

        controller.set_current_audio("a.mp3", "Lesson 1").unwrap();
        assert_eq!(other.state().current_source.as_deref(), Some("a.mp3"));
    }
}

mod reducer {
    use super::*;

    #[test]
    fn stale_metadata_from_superseded_source_is_discarded() {
        let controller = PlaybackController::default();
        controller.set_current_audio("a.mp3", "Lesson 1").unwrap();
        controller.set_current_audio("b.mp3", "Lesson 2").unwrap();

        let outcome = controller.apply_event(&MediaEvent::metadata_loaded("a.mp3", 120.0));
        let state = controller.state();

        assert_eq!(outcome, EventOutcome::Stale);
        assert_eq!(state.current_source.as_deref(), Some("b.mp3"));
        assert_eq!(state.duration, 0.0);
        assert!(!state.is_loaded);

        controller.apply_event(&MediaEvent::metadata_loaded("b.mp3", 95.0));
        assert_eq!(controller.state().duration, 95.0);
    }

    #[test]
    fn events_without_source_are_stale() {
        let controller = PlaybackController::default();
        let outcome = controller.apply_event(&MediaEvent::time_updated("a.mp3", 3.0));
        assert_eq!(outcome, EventOutcome::Stale);
    }

    #[test]
    fn lifecycle_walks_the_state_machine() {
        let controller = PlaybackController::default();
        controller.set_current_audio("a.mp3", "Lesson 1").unwrap();
        assert_eq!(controller.phase(), PlaybackPhase::Loading);

        controller.apply_event(&MediaEvent::metadata_loaded("a.mp3", 60.0));
        assert_eq!(controller.phase(), PlaybackPhase::Ready);

        controller.play();
        controller.apply_event(&MediaEvent::new("a.mp3", MediaEventKind::Playing));
        assert_eq!(controller.phase(), PlaybackPhase::Playing);

        controller.apply_event(&MediaEvent::time_updated("a.mp3", 30.0));
        controller.pause();
        assert_eq!(controller.phase(), PlaybackPhase::Paused);

        controller.play();
        controller.apply_event(&MediaEvent::ended("a.mp3"));
        let state = controller.state();
        assert_eq!(controller.phase(), PlaybackPhase::Paused);
        assert_eq!(state.current_time, 0.0);
        assert!(!state.is_playing);
    }

    #[test]
    fn time_update_is_clamped_to_duration() {
        let controller = loaded_controller(10.0);
        controller.apply_event(&MediaEvent::time_updated("a.mp3", 12.5));
        assert_eq!(controller.state().current_time, 10.0);
    }

    #[test]
    fn infinite_duration_is_treated_as_unknown() {
        let controller = PlaybackController::default();
        controller.set_current_audio("live.mp3", "Live").unwrap();
        controller.apply_event(&MediaEvent::metadata_loaded("live.mp3", f64::INFINITY));

        let state = controller.state();
        assert!(state.is_loaded);
        assert_eq!(state.duration, 0.0);
    }

    #[test]
    fn error_pauses_and_unloads() {
        let controller = loaded_controller(60.0);
        controller.play();

        controller.apply_event(&MediaEvent::errored("a.mp3", "decode failed"));
        let state = controller.state();

        assert!(!state.is_playing);
        assert!(!state.is_loaded);
        assert_eq!(controller.phase(), PlaybackPhase::Loading);
    }

    #[test]
    fn waiting_pauses() {
        let controller = loaded_controller(60.0);
        controller.play();
        controller.apply_event(&MediaEvent::new("a.mp3", MediaEventKind::Waiting));
        assert!(!controller.state().is_playing);
    }

    #[test]
    fn repeated_event_reports_unchanged() {
        let controller = loaded_controller(60.0);
        let outcome = controller.apply_event(&MediaEvent::metadata_loaded("a.mp3", 60.0));
        assert_eq!(outcome, EventOutcome::Unchanged);
    }
}

mod binding {
    use super::*;

    #[derive(Default)]
    struct FakeElement {
        calls: Vec<String>,
        refuse_play: bool,
    }

    impl MediaElement for FakeElement {
        fn load(&mut self, source: &str) {
            self.calls.push(format!("load {source}"));
        }

        fn unload(&mut self) {
            self.calls.push("unload".to_string());
        }

        fn play(&mut self) -> Result<(), String> {
            if self.refuse_play {
                self.calls.push("play refused".to_string());
                Err("user gesture required".to_string())
            } else {
                self.calls.push("play".to_string());
                Ok(())
            }
        }

        fn pause(&mut self) {
            self.calls.push("pause".to_string());
        }

        fn set_volume(&mut self, volume: f64) {
            self.calls.push(format!("volume {volume}"));
        }

        fn set_current_time(&mut self, time: f64) {
            self.calls.push(format!("seek {time}"));
        }
    }

    #[test]
    fn sync_pushes_only_changes() {
        let controller = PlaybackController::default();
        let mut binding = ElementBinding::new(controller.clone(), FakeElement::default());

        controller.set_current_audio("a.mp3", "Lesson 1").unwrap();
        binding.sync();
        binding.sync();

        assert_eq!(binding.element().calls, vec!["load a.mp3", "volume 1"]);
    }

    #[test]
    fn muting_sends_zero_and_unmuting_restores_level() {
        let controller = PlaybackController::default();
        let mut binding = ElementBinding::new(controller.clone(), FakeElement::default());
        controller.set_volume(0.5);
        binding.sync();

        controller.toggle_mute();
        binding.sync();
        controller.toggle_mute();
        binding.sync();

        assert_eq!(
            binding.element().calls,
            vec!["volume 0.5", "volume 0", "volume 0.5"]
        );
    }

    #[test]
    fn refused_play_leaves_controller_paused() {
        let controller = loaded_controller(60.0);
        let element = FakeElement {
            refuse_play: true,
            ..FakeElement::default()
        };
        let mut binding = ElementBinding::new(controller.clone(), element);
        binding.sync();

        controller.play();
        binding.sync();

        assert!(!controller.state().is_playing);
        assert!(binding.element().calls.contains(&"play refused".to_string()));
    }

    #[test]
    fn user_seek_reaches_element_but_time_updates_do_not_echo() {
        let controller = loaded_controller(60.0);
        let mut binding = ElementBinding::new(controller.clone(), FakeElement::default());
        binding.sync();

        binding.dispatch(&MediaEvent::time_updated("a.mp3", 5.0));
        binding.sync();
        assert!(!binding.element().calls.iter().any(|c| c.starts_with("seek")));

        controller.seek(30.0);
        binding.sync();
        assert!(binding.element().calls.contains(&"seek 30".to_string()));
    }

    #[test]
    fn clearing_unloads_element() {
        let controller = loaded_controller(60.0);
        let mut binding = ElementBinding::new(controller.clone(), FakeElement::default());
        binding.sync();

        controller.clear_audio();
        binding.sync();

        assert_eq!(binding.element().calls.last().map(String::as_str), Some("unload"));
    }

    #[test]
    fn dispatch_drops_stale_events() {
        let controller = PlaybackController::default();
        let mut binding = ElementBinding::new(controller.clone(), FakeElement::default());
        controller.set_current_audio("b.mp3", "Lesson 2").unwrap();
        binding.sync();

        let outcome = binding.dispatch(&MediaEvent::metadata_loaded("a.mp3", 120.0));

        assert_eq!(outcome, EventOutcome::Stale);
        assert_eq!(controller.state().duration, 0.0);
    }
}

mod mini_player {
    use super::*;

    #[test]
    fn hidden_while_main_player_visible() {
        let controller = loaded_controller(120.0);
        let visibility = PlayerVisibility::default();
        let mini = MiniPlayer::new(controller, visibility.clone());

        assert!(mini.view().is_none());

        visibility.set_visible(false);
        let view = mini.view().unwrap();
        assert_eq!(view.title, "Lesson 1");
        assert_eq!(view.total, "2:00");
    }

    #[test]
    fn hidden_without_audio() {
        let visibility = PlayerVisibility::default();
        visibility.set_visible(false);
        let mini = MiniPlayer::new(PlaybackController::default(), visibility);

        assert!(mini.view().is_none());
    }

    #[test]
    fn seek_to_fraction_maps_onto_duration() {
        let controller = loaded_controller(200.0);
        let mini = MiniPlayer::new(controller.clone(), PlayerVisibility::default());

        mini.seek_to_fraction(0.25);
        assert_eq!(controller.state().current_time, 50.0);

        mini.seek_to_fraction(3.0);
        assert_eq!(controller.state().current_time, 200.0);
    }

    #[test]
    fn seek_to_fraction_ignored_without_duration() {
        let controller = PlaybackController::default();
        controller.set_current_audio("a.mp3", "Lesson 1").unwrap();
        let mini = MiniPlayer::new(controller.clone(), PlayerVisibility::default());

        mini.seek_to_fraction(0.5);
        assert_eq!(controller.state().current_time, 0.0);
    }

    #[test]
    fn progress_percent_tracks_position() {
        let controller = loaded_controller(200.0);
        let visibility = PlayerVisibility::default();
        visibility.set_visible(false);
        let mini = MiniPlayer::new(controller.clone(), visibility);

        controller.seek(50.0);
        let view = mini.view().unwrap();

        assert_eq!(view.progress_percent, 25.0);
        assert_eq!(view.elapsed, "0:50");
    }

    #[test]
    fn format_time_renders_minutes_and_seconds() {
        assert_eq!(format_time(0.0), "0:00");
        assert_eq!(format_time(59.9), "0:59");
        assert_eq!(format_time(61.0), "1:01");
        assert_eq!(format_time(3725.0), "62:05");
        assert_eq!(format_time(f64::NAN), "0:00");
    }

    #[tokio::test]
    async fn watch_follows_the_shared_controller() {
        let controller = PlaybackController::default();
        let visibility = PlayerVisibility::default();
        visibility.set_visible(false);
        let mini = MiniPlayer::new(controller.clone(), visibility);

        let mut views = Box::pin(mini.watch());
        assert_eq!(views.next().await, Some(None));

        controller.set_current_audio("a.mp3", "Lesson 1").unwrap();
        let view = views.next().await.flatten().unwrap();
        assert_eq!(view.title, "Lesson 1");
    }
}
