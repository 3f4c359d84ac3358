/// Course catalog and navigation outlines
pub mod catalog;
/// Shared building blocks for services
pub mod common;
/// Lesson audio playback
pub mod playback;
/// Lesson completion tracking
pub mod progress;
