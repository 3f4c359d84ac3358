mod log_level;

pub use log_level::LogLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Identity used when no user has been selected.
pub const DEFAULT_USER_ID: &str = "user-1";

/// General configuration settings for coursekit.
///
/// Contains global settings such as logging and the learner identity
/// completion records are scoped to.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Logging level for the application.
    pub log_level: LogLevel,

    /// Also write logs to a daily rotating file in the data directory.
    pub log_to_file: bool,

    /// Learner identity that completion records are stored under.
    pub user_id: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            log_to_file: false,
            user_id: DEFAULT_USER_ID.to_string(),
        }
    }
}
