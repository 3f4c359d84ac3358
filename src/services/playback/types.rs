use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Playback volume, always within `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Volume(f64);

impl Volume {
    /// Full volume.
    pub const MAX: Volume = Volume(1.0);

    /// Create a volume, clamping into range. NaN becomes silence.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 1.0))
    }

    /// Get the volume as a percentage
    pub fn as_percentage(&self) -> f64 {
        self.0 * 100.0
    }

    /// Whether this volume is silent
    pub fn is_silent(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::MAX
    }
}

impl Deref for Volume {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<f64> for Volume {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Volume> for f64 {
    fn from(volume: Volume) -> Self {
        volume.0
    }
}

/// Where the controller is in its load/play lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    /// Nothing loaded.
    Empty,

    /// A source is set but its metadata has not arrived.
    Loading,

    /// Metadata is known and playback has not started yet.
    Ready,

    /// Loaded and playing, or asked to play.
    Playing,

    /// Playback started at some point and is now paused.
    Paused,
}

/// The "now playing" state shared by every player surface.
///
/// Times are in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    /// Audio resource currently loaded.
    pub current_source: Option<String>,

    /// Human-readable label for the loaded audio.
    pub current_title: Option<String>,

    /// Whether playback is intended to be running.
    pub is_playing: bool,

    /// Playback position.
    pub current_time: f64,

    /// Length of the loaded audio, `0` until metadata loads.
    pub duration: f64,

    /// Volume level, kept when muting.
    pub volume: Volume,

    /// Whether output is muted.
    pub is_muted: bool,

    /// Whether the source's metadata is known.
    pub is_loaded: bool,

    /// Whether playback has begun for the current source.
    #[serde(default)]
    pub started: bool,
}

impl Default for PlaybackState {
    fn default() -> Self {
        Self::with_volume(Volume::MAX)
    }
}

impl PlaybackState {
    /// An empty state starting at the given volume.
    pub fn with_volume(volume: Volume) -> Self {
        Self {
            current_source: None,
            current_title: None,
            is_playing: false,
            current_time: 0.0,
            duration: 0.0,
            volume,
            is_muted: false,
            is_loaded: false,
            started: false,
        }
    }

    /// Derive the lifecycle phase from the flags.
    pub fn phase(&self) -> PlaybackPhase {
        if self.current_source.is_none() {
            PlaybackPhase::Empty
        } else if !self.is_loaded {
            PlaybackPhase::Loading
        } else if self.is_playing {
            PlaybackPhase::Playing
        } else if self.started {
            PlaybackPhase::Paused
        } else {
            PlaybackPhase::Ready
        }
    }

    /// Volume the media element should actually output.
    pub fn effective_volume(&self) -> f64 {
        if self.is_muted { 0.0 } else { *self.volume }
    }

    /// Whether `source` is the currently loaded source.
    pub fn is_current(&self, source: &str) -> bool {
        self.current_source.as_deref() == Some(source)
    }

    /// Clamp a position into the playable range.
    ///
    /// Before metadata is known only the lower bound applies; the position
    /// is clamped again when the duration arrives.
    pub(crate) fn clamp_position(&self, time: f64) -> f64 {
        let time = if time.is_finite() { time.max(0.0) } else { 0.0 };
        if self.is_loaded {
            time.min(self.duration)
        } else {
            time
        }
    }

    /// Repair a state that came from outside the controller.
    ///
    /// Without a source nothing can be loaded or playing; with one, the
    /// duration is non-negative and the position lies within it.
    pub(crate) fn normalized(mut self) -> Self {
        if self.current_source.is_none() {
            self.unload();
            return self;
        }

        self.duration = if self.duration.is_finite() {
            self.duration.max(0.0)
        } else {
            0.0
        };
        self.current_time = self.clamp_position(self.current_time);
        self
    }

    /// Reset everything tied to the loaded source, keeping volume and mute.
    pub(crate) fn unload(&mut self) {
        *self = Self {
            volume: self.volume,
            is_muted: self.is_muted,
            ..Self::with_volume(self.volume)
        };
    }
}
