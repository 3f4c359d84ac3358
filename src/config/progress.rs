use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::services::progress::DEFAULT_KEY_PREFIX;

/// Lesson completion storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ProgressConfig {
    /// Directory completion entries are written to.
    ///
    /// Defaults to `progress/` inside the application data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,

    /// Prefix of the per-lesson storage key.
    pub key_prefix: String,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}
