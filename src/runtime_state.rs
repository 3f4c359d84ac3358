use std::{
    io::Error,
    path::{Path, PathBuf},
    time::SystemTime,
};

use serde::{Deserialize, Serialize};
use tokio::fs;
use tracing::{debug, instrument, warn};

use crate::{config::ConfigPaths, services::playback::PlaybackState};

/// Runtime state that persists between CLI calls
///
/// Each CLI invocation restores the playback controller from
/// `now_playing`, applies one command, and writes the result back.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeState {
    /// Last known playback snapshot
    #[serde(default)]
    pub now_playing: PlaybackState,

    /// Learner selected for this session, overriding `general.user_id`
    #[serde(default)]
    pub current_user: Option<String>,

    /// Last time this state was updated
    pub last_updated: SystemTime,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            now_playing: PlaybackState::default(),
            current_user: None,
            last_updated: SystemTime::now(),
        }
    }
}

impl RuntimeState {
    fn state_file_path() -> Result<PathBuf, Error> {
        ConfigPaths::runtime_state()
    }

    /// Load runtime state from the default location
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read, or the config
    /// directory is inaccessible
    pub async fn load() -> Result<Self, Error> {
        Self::load_from(&Self::state_file_path()?).await
    }

    /// Load runtime state from `path`, or defaults if it does not exist
    ///
    /// An unparseable file is replaced by defaults rather than failing the
    /// command.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read
    #[instrument]
    pub async fn load_from(path: &Path) -> Result<Self, Error> {
        if !fs::try_exists(path).await? {
            debug!("No runtime state file found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).await?;
        let state = serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!(error = %e, "Invalid runtime state file, using defaults");
            Self::default()
        });

        Ok(state)
    }

    /// Save runtime state to the default location
    ///
    /// # Errors
    /// Returns error if file cannot be written or directory cannot be created
    pub async fn save(&mut self) -> Result<(), Error> {
        self.save_to(&Self::state_file_path()?).await
    }

    /// Stamp and save runtime state to `path`
    ///
    /// # Errors
    /// Returns error if file cannot be written or directory cannot be created
    #[instrument(skip(self))]
    pub async fn save_to(&mut self, path: &Path) -> Result<(), Error> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        self.last_updated = SystemTime::now();
        let content = serde_json::to_string_pretty(self).map_err(Error::other)?;
        fs::write(path, content).await?;

        Ok(())
    }
}
