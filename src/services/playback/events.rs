use std::fmt;

/// Native media signal, tagged with the source the element was playing
#[derive(Debug, Clone, PartialEq)]
pub struct MediaEvent {
    /// Source the element had loaded when it raised the event.
    pub source: String,

    /// What happened.
    pub kind: MediaEventKind,
}

/// The kinds of signals a media element reports
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEventKind {
    /// The element started fetching the source.
    LoadStarted,

    /// Duration and metadata are known.
    MetadataLoaded {
        /// Length in seconds.
        duration: f64,
    },

    /// Enough data is buffered to start.
    CanPlay,

    /// Position moved during playback.
    TimeUpdated {
        /// Position in seconds.
        time: f64,
    },

    /// Playback actually started.
    Playing,

    /// The element paused.
    Paused,

    /// Playback stalled waiting for data.
    Waiting,

    /// Playback reached the end.
    Ended,

    /// Loading or decoding failed.
    Errored {
        /// Description from the element.
        message: String,
    },

    /// A play request was refused, e.g. autoplay without a user gesture.
    PlayRejected {
        /// Description from the element.
        reason: String,
    },
}

impl MediaEvent {
    /// Build an event for `source`.
    pub fn new(source: impl Into<String>, kind: MediaEventKind) -> Self {
        Self {
            source: source.into(),
            kind,
        }
    }

    /// `MetadataLoaded` shorthand.
    pub fn metadata_loaded(source: impl Into<String>, duration: f64) -> Self {
        Self::new(source, MediaEventKind::MetadataLoaded { duration })
    }

    /// `TimeUpdated` shorthand.
    pub fn time_updated(source: impl Into<String>, time: f64) -> Self {
        Self::new(source, MediaEventKind::TimeUpdated { time })
    }

    /// `Ended` shorthand.
    pub fn ended(source: impl Into<String>) -> Self {
        Self::new(source, MediaEventKind::Ended)
    }

    /// `Errored` shorthand.
    pub fn errored(source: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(
            source,
            MediaEventKind::Errored {
                message: message.into(),
            },
        )
    }
}

impl fmt::Display for MediaEventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadStarted => write!(f, "load-started"),
            Self::MetadataLoaded { duration } => write!(f, "metadata-loaded({duration}s)"),
            Self::CanPlay => write!(f, "can-play"),
            Self::TimeUpdated { time } => write!(f, "time-updated({time}s)"),
            Self::Playing => write!(f, "playing"),
            Self::Paused => write!(f, "paused"),
            Self::Waiting => write!(f, "waiting"),
            Self::Ended => write!(f, "ended"),
            Self::Errored { message } => write!(f, "errored({message})"),
            Self::PlayRejected { reason } => write!(f, "play-rejected({reason})"),
        }
    }
}

/// Result of feeding an event to the reducer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The event changed the state.
    Applied,

    /// The event was for the current source but changed nothing.
    Unchanged,

    /// The event came from a source that is no longer current and was dropped.
    Stale,
}
