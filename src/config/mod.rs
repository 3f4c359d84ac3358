//! Configuration schema definitions and loading.
//!
//! Defines the configuration structure for coursekit. Every section is
//! serializable to/from TOML and has defaults, so an empty file is a
//! valid configuration.

mod catalog;
mod general;
mod loading;
mod paths;
mod playback;
mod progress;


pub use catalog::CatalogConfig;
pub use general::{DEFAULT_USER_ID, GeneralConfig, LogLevel};
pub use paths::ConfigPaths;
pub use playback::PlaybackConfig;
pub use progress::ProgressConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Main configuration structure for coursekit.
///
/// Represents the complete configuration schema that can be loaded
/// from TOML files. All fields have sensible defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Audio playback settings.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Lesson completion storage settings.
    #[serde(default)]
    pub progress: ProgressConfig,

    /// Course catalog source settings.
    #[serde(default)]
    pub catalog: CatalogConfig,
}
