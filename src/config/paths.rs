use std::{
    env,
    io::{Error, ErrorKind},
    path::PathBuf,
};

const APP_DIR_NAME: &str = "coursekit";

/// Locates coursekit's configuration and data directories
///
/// Configuration follows the XDG Base Directory specification; data
/// (logs, completion entries) lives under `$HOME/.coursekit`.
pub struct ConfigPaths;

impl ConfigPaths {
    /// Returns the configuration directory path for the application
    ///
    /// Checks `XDG_CONFIG_HOME` first and falls back to `$HOME/.config`.
    ///
    /// # Errors
    /// Returns an error if neither `XDG_CONFIG_HOME` nor `HOME` is set
    pub fn config_dir() -> Result<PathBuf, Error> {
        let config_home = env::var("XDG_CONFIG_HOME")
            .or_else(|_| env::var("HOME").map(|home| format!("{home}/.config")))
            .map_err(|_| {
                Error::new(
                    ErrorKind::NotFound,
                    "Neither XDG_CONFIG_HOME nor HOME environment variable found",
                )
            })?;

        Ok(PathBuf::from(config_home).join(APP_DIR_NAME))
    }

    /// Returns the application data directory, creating it if missing
    ///
    /// # Errors
    /// Returns an error if HOME is not set or the directory cannot be created
    pub fn app_data_dir() -> Result<PathBuf, Error> {
        let home = env::var("HOME")
            .map_err(|_| Error::new(ErrorKind::NotFound, "HOME environment variable not found"))?;

        let app_dir = PathBuf::from(home).join(format!(".{APP_DIR_NAME}"));
        if !app_dir.exists() {
            std::fs::create_dir_all(&app_dir)?;
        }

        Ok(app_dir)
    }

    /// Get the application log directory, creating it if missing
    ///
    /// # Errors
    /// Returns error if directory cannot be created
    pub fn log_dir() -> Result<PathBuf, Error> {
        let log_dir = Self::app_data_dir()?.join("logs");
        if !log_dir.exists() {
            std::fs::create_dir_all(&log_dir)?;
        }
        Ok(log_dir)
    }

    /// Default directory for per-lesson completion entries
    ///
    /// # Errors
    /// Returns error if the data directory cannot be resolved
    pub fn progress_dir() -> Result<PathBuf, Error> {
        Ok(Self::app_data_dir()?.join("progress"))
    }

    /// Returns the path to the main configuration file
    ///
    /// # Errors
    /// Returns error if the configuration directory cannot be resolved
    pub fn main_config() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path of the runtime state file shared between CLI calls
    ///
    /// # Errors
    /// Returns error if the configuration directory cannot be resolved
    pub fn runtime_state() -> Result<PathBuf, Error> {
        Ok(Self::config_dir()?.join("runtime-state.json"))
    }
}
