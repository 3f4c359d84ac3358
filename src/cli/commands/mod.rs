/// Course catalog commands
pub mod catalog;
/// Configuration inspection commands
pub mod config;
/// Playback transport commands
pub mod player;
/// Completion and navigation commands
pub mod progress;
