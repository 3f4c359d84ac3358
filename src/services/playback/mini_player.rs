use futures::{Stream, StreamExt, stream};

use crate::services::common::Property;

use super::{PlaybackController, PlaybackState};

/// Whether the main player is on screen.
///
/// The lesson view updates this as the full player scrolls in and out;
/// the mini-player only shows while it is out of view.
#[derive(Clone, Debug)]
pub struct PlayerVisibility {
    visible: Property<bool>,
}

impl Default for PlayerVisibility {
    fn default() -> Self {
        Self {
            visible: Property::new(true),
        }
    }
}

impl PlayerVisibility {
    /// Record whether the main player intersects the viewport.
    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    /// Whether the main player is currently on screen.
    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }
}

/// What the mini-player draws
#[derive(Debug, Clone, PartialEq)]
pub struct MiniPlayerView {
    /// Lesson title.
    pub title: String,
    /// Whether to show the pause icon.
    pub is_playing: bool,
    /// Elapsed time as `m:ss`.
    pub elapsed: String,
    /// Total time as `m:ss`.
    pub total: String,
    /// Filled share of the progress bar, `0..=100`.
    pub progress_percent: f64,
}

/// Compact transport bar over the shared playback state
#[derive(Clone, Debug)]
pub struct MiniPlayer {
    controller: PlaybackController,
    visibility: PlayerVisibility,
}

impl MiniPlayer {
    /// Build a mini-player over `controller`.
    pub fn new(controller: PlaybackController, visibility: PlayerVisibility) -> Self {
        Self {
            controller,
            visibility,
        }
    }

    /// The current view, or `None` when the mini-player should be hidden.
    pub fn view(&self) -> Option<MiniPlayerView> {
        render(&self.controller.state(), self.visibility.is_visible())
    }

    /// Stream of views, re-rendered whenever playback or visibility changes.
    pub fn watch(&self) -> impl Stream<Item = Option<MiniPlayerView>> + Send + 'static {
        let controller = self.controller.clone();
        let visibility = self.visibility.clone();

        let changes = stream::select(
            self.controller.watch().map(|_| ()),
            self.visibility.visible.watch().map(|_| ()),
        );

        changes.map(move |_| render(&controller.state(), visibility.is_visible()))
    }

    /// Play/pause button.
    pub fn toggle_play(&self) {
        self.controller.toggle_play();
    }

    /// Click on the progress bar at `fraction` of its width.
    ///
    /// Does nothing until the duration is known.
    pub fn seek_to_fraction(&self, fraction: f64) {
        let duration = self.controller.state().duration;
        if duration <= 0.0 || !fraction.is_finite() {
            return;
        }
        self.controller.seek(fraction.clamp(0.0, 1.0) * duration);
    }
}

fn render(state: &PlaybackState, main_player_visible: bool) -> Option<MiniPlayerView> {
    if main_player_visible {
        return None;
    }
    state.current_source.as_ref()?;
    let title = state.current_title.clone()?;

    let progress_percent = if state.duration > 0.0 {
        (state.current_time / state.duration * 100.0).clamp(0.0, 100.0)
    } else {
        0.0
    };

    Some(MiniPlayerView {
        title,
        is_playing: state.is_playing,
        elapsed: format_time(state.current_time),
        total: format_time(state.duration),
        progress_percent,
    })
}

/// Render seconds as `m:ss`. Non-finite and negative input renders `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "0:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
