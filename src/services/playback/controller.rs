use futures::Stream;
use tracing::{debug, info, instrument};

use crate::{config::PlaybackConfig, services::common::Property};

use super::{
    PlaybackError,
    events::{EventOutcome, MediaEvent},
    reducer::reduce,
    types::{PlaybackPhase, PlaybackState, Volume},
};

/// Single source of truth for the lesson audio that is playing right now.
///
/// The controller only records intents and facts; it never touches a media
/// element. An [`ElementBinding`](super::ElementBinding) turns the state into
/// element calls and feeds element events back through
/// [`apply_event`](Self::apply_event). Clones are handles to the same state,
/// so the full player and the mini-player can each hold one.
#[derive(Clone, Debug)]
pub struct PlaybackController {
    state: Property<PlaybackState>,
    fallback_title: String,
    skip_seconds: f64,
}

impl Default for PlaybackController {
    fn default() -> Self {
        Self::new(&PlaybackConfig::default())
    }
}

impl PlaybackController {
    /// Create an empty controller.
    pub fn new(config: &PlaybackConfig) -> Self {
        let initial = PlaybackState::with_volume(Volume::new(config.default_volume));
        Self::restore(initial, config)
    }

    /// Create a controller around a previously saved state.
    ///
    /// A sourceless state comes back empty, and the saved position is
    /// clamped to the saved duration.
    pub fn restore(state: PlaybackState, config: &PlaybackConfig) -> Self {
        Self {
            state: Property::new(state.normalized()),
            fallback_title: config.fallback_title.clone(),
            skip_seconds: config.skip_seconds,
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> PlaybackState {
        self.state.get()
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> PlaybackPhase {
        self.state.get().phase()
    }

    /// Stream of states, starting with the current one.
    pub fn watch(&self) -> impl Stream<Item = PlaybackState> + Send + 'static {
        self.state.watch()
    }

    /// Seconds moved by [`skip_forward`](Self::skip_forward) and
    /// [`skip_back`](Self::skip_back).
    pub fn skip_seconds(&self) -> f64 {
        self.skip_seconds
    }

    /// Load a new audio source.
    ///
    /// Resets position, duration and the loaded flag, and pauses. Loading
    /// the source that is already current does nothing, so repeated calls
    /// from a re-rendering view do not restart playback.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::EmptySource` if `source` is empty.
    #[instrument(skip(self))]
    pub fn set_current_audio(&self, source: &str, title: &str) -> Result<(), PlaybackError> {
        if source.trim().is_empty() {
            return Err(PlaybackError::EmptySource);
        }

        let replaced = self.state.update(|state| {
            if state.is_current(source) {
                return false;
            }
            state.unload();
            state.current_source = Some(source.to_string());
            state.current_title = Some(title.to_string());
            true
        });

        if replaced {
            info!("Loaded audio source");
        } else {
            debug!("Source already loaded");
        }
        Ok(())
    }

    /// What a lesson view does when it mounts.
    ///
    /// A lesson with audio loads it, using the configured fallback title
    /// when the lesson has none. A lesson without audio clears whatever was
    /// playing.
    ///
    /// # Errors
    ///
    /// Returns `PlaybackError::EmptySource` if `source` is an empty string.
    pub fn attach_lesson(
        &self,
        source: Option<&str>,
        title: Option<&str>,
    ) -> Result<(), PlaybackError> {
        match source {
            Some(source) => {
                let title = title.unwrap_or(&self.fallback_title);
                self.set_current_audio(source, title)
            }
            None => {
                self.clear_audio();
                Ok(())
            }
        }
    }

    /// Ask for playback to start. Ignored when nothing is loaded.
    pub fn play(&self) {
        self.state.update(|state| {
            if state.current_source.is_some() {
                state.is_playing = true;
            }
        });
    }

    /// Ask for playback to pause.
    pub fn pause(&self) {
        self.state.update(|state| state.is_playing = false);
    }

    /// Flip between play and pause.
    pub fn toggle_play(&self) {
        self.state.update(|state| {
            if state.current_source.is_some() {
                state.is_playing = !state.is_playing;
            }
        });
    }

    /// Move to `time` seconds, clamped into `[0, duration]`.
    pub fn seek(&self, time: f64) {
        self.state.update(|state| {
            if state.current_source.is_some() {
                state.current_time = state.clamp_position(time);
            }
        });
    }

    /// Move by `delta` seconds relative to the current position.
    pub fn skip(&self, delta: f64) {
        self.state.update(|state| {
            if state.current_source.is_some() {
                state.current_time = state.clamp_position(state.current_time + delta);
            }
        });
    }

    /// Skip forward by the configured amount.
    pub fn skip_forward(&self) {
        self.skip(self.skip_seconds);
    }

    /// Skip back by the configured amount.
    pub fn skip_back(&self) {
        self.skip(-self.skip_seconds);
    }

    /// Set the volume, clamped into `[0, 1]`. Exactly zero also mutes.
    pub fn set_volume(&self, volume: f64) {
        self.state.update(|state| {
            state.volume = Volume::new(volume);
            state.is_muted = volume == 0.0;
        });
    }

    /// Flip mute without touching the volume level.
    pub fn toggle_mute(&self) {
        self.state.update(|state| state.is_muted = !state.is_muted);
    }

    /// Record the duration reported by the media element.
    pub fn set_duration(&self, duration: f64) {
        self.state.update(|state| {
            state.duration = if duration.is_finite() {
                duration.max(0.0)
            } else {
                0.0
            };
            state.current_time = state.clamp_position(state.current_time);
        });
    }

    /// Record the position reported by the media element.
    pub fn set_current_time(&self, time: f64) {
        self.state.update(|state| {
            state.current_time = state.clamp_position(time);
        });
    }

    /// Drop the loaded audio. Volume and mute are kept.
    #[instrument(skip(self))]
    pub fn clear_audio(&self) {
        let cleared = self.state.update(|state| {
            let had_source = state.current_source.is_some();
            state.unload();
            had_source
        });

        if cleared {
            info!("Cleared audio");
        }
    }

    /// Feed a media element event through the reducer.
    pub fn apply_event(&self, event: &MediaEvent) -> EventOutcome {
        self.state.update(|state| reduce(state, event))
    }
}
