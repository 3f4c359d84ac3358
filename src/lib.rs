//! coursekit - lesson audio playback and course progress tracking.
//!
//! The crate has two cores:
//!
//! - [`services::playback`]: a shared "now playing" state with transport
//!   controls, a reducer for media element events that discards events from
//!   superseded sources, and a mini-player view.
//! - [`services::progress`]: per-lesson completion records behind a
//!   repository trait, with course/module percentages and next/previous
//!   lesson navigation over the [`services::catalog`] outline.
//!
//! # Quick Start
//!
//! ```rust
//! use coursekit::config::PlaybackConfig;
//! use coursekit::services::playback::{MediaEvent, PlaybackController};
//!
//! let player = PlaybackController::new(&PlaybackConfig::default());
//! player.set_current_audio("/audio/l1.mp3", "Lesson 1").unwrap();
//! player.apply_event(&MediaEvent::metadata_loaded("/audio/l1.mp3", 180.0));
//! player.seek(9999.0);
//!
//! assert_eq!(player.state().current_time, 180.0);
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Configuration store with dotted-path access.
pub mod config_store;

/// Command-line interface.
pub mod cli;

/// Playback, progress, and catalog services.
pub mod services;

/// Service container built from configuration.
pub mod service_manager;

/// Runtime state shared between CLI invocations.
pub mod runtime_state;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{CoursekitError, Result};
