use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Audio playback configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Volume a fresh controller starts at, between 0.0 and 1.0.
    pub default_volume: f64,

    /// Seconds moved by the skip back / skip forward controls.
    pub skip_seconds: f64,

    /// Title shown for lesson audio that has no title of its own.
    pub fallback_title: String,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_volume: 1.0,
            skip_seconds: 10.0,
            fallback_title: "Lekcia".to_string(),
        }
    }
}
