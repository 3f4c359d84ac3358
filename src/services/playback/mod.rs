//! Lesson audio playback: the shared "now playing" state and its surfaces.
//!
//! [`PlaybackController`] owns the state, [`ElementBinding`] connects it to a
//! physical media element, and [`MiniPlayer`] renders a compact view of the
//! same state.

mod binding;
mod controller;
mod error;
mod events;
mod mini_player;
mod reducer;
mod types;

#[cfg(test)]
mod tests;

pub use binding::{ElementBinding, MediaElement};
pub use controller::PlaybackController;
pub use error::PlaybackError;
pub use events::{EventOutcome, MediaEvent, MediaEventKind};
pub use mini_player::{MiniPlayer, MiniPlayerView, PlayerVisibility, format_time};
pub use types::{PlaybackPhase, PlaybackState, Volume};
