/// Errors that can occur during playback operations
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum PlaybackError {
    /// A source URL is required to load audio
    #[error("cannot load audio from an empty source")]
    EmptySource,

    /// The media element refused to start playback
    #[error("playback of '{source_url}' was refused: {reason}")]
    PlayRefused {
        /// Source that failed to start
        source_url: String,
        /// Reason reported by the element
        reason: String,
    },
}
