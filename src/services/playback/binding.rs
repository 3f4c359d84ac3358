use tracing::{debug, instrument, warn};

use super::{
    PlaybackController,
    events::{EventOutcome, MediaEvent, MediaEventKind},
};

const POSITION_TOLERANCE: f64 = 0.25;

/// A physical media element the binding can drive
///
/// Implemented by whatever actually decodes audio. Calls are fire and
/// forget except [`play`](Self::play), which may be refused.
pub trait MediaElement {
    /// Start fetching `source`, replacing whatever was loaded.
    fn load(&mut self, source: &str);

    /// Drop the loaded source.
    fn unload(&mut self);

    /// Start playback.
    ///
    /// # Errors
    ///
    /// Returns the refusal reason when the environment blocks playback.
    fn play(&mut self) -> Result<(), String>;

    /// Pause playback.
    fn pause(&mut self);

    /// Set the output level in `[0, 1]`.
    fn set_volume(&mut self, volume: f64);

    /// Jump to a position in seconds.
    fn set_current_time(&mut self, time: f64);
}

/// What the binding last pushed to the element
#[derive(Debug, Default)]
struct Applied {
    source: Option<String>,
    playing: bool,
    volume: Option<f64>,
    position: f64,
}

/// Keeps one media element in step with a [`PlaybackController`].
///
/// The only place that owns the physical element. State changes become
/// element calls in [`sync`](Self::sync); element signals become reducer
/// events in [`dispatch`](Self::dispatch).
pub struct ElementBinding<E: MediaElement> {
    controller: PlaybackController,
    element: E,
    applied: Applied,
}

impl<E: MediaElement> ElementBinding<E> {
    /// Bind `element` to `controller`.
    pub fn new(controller: PlaybackController, element: E) -> Self {
        Self {
            controller,
            element,
            applied: Applied::default(),
        }
    }

    /// The bound element.
    pub fn element(&self) -> &E {
        &self.element
    }

    /// Push any state the element has not seen yet.
    ///
    /// A refused play request is fed back as `PlayRejected`, leaving the
    /// controller paused; it is not an error for the caller.
    #[instrument(skip(self))]
    pub fn sync(&mut self) {
        let state = self.controller.state();

        if state.current_source != self.applied.source {
            match &state.current_source {
                Some(source) => self.element.load(source),
                None => self.element.unload(),
            }
            self.applied.source = state.current_source.clone();
            self.applied.playing = false;
            self.applied.position = 0.0;
        }

        let volume = state.effective_volume();
        if self.applied.volume != Some(volume) {
            self.element.set_volume(volume);
            self.applied.volume = Some(volume);
        }

        if state.is_loaded && (state.current_time - self.applied.position).abs() > POSITION_TOLERANCE
        {
            self.element.set_current_time(state.current_time);
            self.applied.position = state.current_time;
        }

        if state.is_playing != self.applied.playing {
            if state.is_playing {
                self.start_playback();
            } else {
                self.element.pause();
                self.applied.playing = false;
            }
        }
    }

    /// Forward a signal raised by the element.
    pub fn dispatch(&mut self, event: &MediaEvent) -> EventOutcome {
        let outcome = self.controller.apply_event(event);
        if outcome == EventOutcome::Stale {
            return outcome;
        }

        match event.kind {
            MediaEventKind::TimeUpdated { .. } | MediaEventKind::Ended => {
                self.applied.position = self.controller.state().current_time;
            }
            _ => {}
        }

        match event.kind {
            MediaEventKind::Playing => self.applied.playing = true,
            MediaEventKind::Paused
            | MediaEventKind::Waiting
            | MediaEventKind::Ended
            | MediaEventKind::Errored { .. }
            | MediaEventKind::PlayRejected { .. } => self.applied.playing = false,
            _ => {}
        }

        outcome
    }

    fn start_playback(&mut self) {
        let Some(source) = self.applied.source.clone() else {
            return;
        };

        match self.element.play() {
            Ok(()) => {
                debug!(%source, "Element playing");
                self.applied.playing = true;
            }
            Err(reason) => {
                warn!(%source, %reason, "Element refused to play");
                self.applied.playing = false;
                self.controller
                    .apply_event(&MediaEvent::new(source, MediaEventKind::PlayRejected { reason }));
            }
        }
    }
}
