use std::{
    path::Path,
    sync::{Arc, RwLock},
};

use toml::Value;
use tracing::{debug, instrument};

use crate::config::{Config, ConfigPaths};

use super::ConfigError;

/// A thread-safe holder of the application configuration
///
/// Cloning is cheap; every clone reads the same configuration.
#[derive(Clone, Debug)]
pub struct ConfigStore {
    config: Arc<RwLock<Config>>,
}

impl ConfigStore {
    /// Creates a store holding the default configuration
    pub fn with_defaults() -> Self {
        Self::from_config(Config::default())
    }

    /// Creates a store holding the given configuration
    pub fn from_config(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
        }
    }

    /// Loads the store from the main configuration file
    ///
    /// # Errors
    /// * `ConfigError::LoadError` - If the configuration file cannot be located or loaded
    pub fn load() -> Result<Self, ConfigError> {
        let main_config = ConfigPaths::main_config().map_err(|e| ConfigError::LoadError {
            path: "config.toml".into(),
            details: e.to_string(),
        })?;

        Self::load_from(&main_config)
    }

    /// Loads the store from a specific configuration file, following imports
    ///
    /// # Errors
    /// * `ConfigError::LoadError` - If the file or any of its imports cannot be loaded
    #[instrument]
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Config::load_with_imports(path).map_err(|e| ConfigError::LoadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        debug!("Configuration loaded");

        Ok(Self::from_config(config))
    }

    /// Returns a clone of the current configuration, handling poisoned locks gracefully
    pub fn get_current(&self) -> Config {
        match self.config.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Retrieves a configuration value at a dot-separated path
    ///
    /// # Arguments
    /// * `path` - Dot-separated path to the configuration field (e.g., "playback.skip_seconds")
    ///
    /// # Errors
    /// * `ConfigError::InvalidPath` - If the path doesn't exist
    /// * `ConfigError::LockError` - If the read lock is poisoned
    pub fn get_by_path(&self, path: &str) -> Result<Value, ConfigError> {
        let config = self.config.read().map_err(|e| ConfigError::LockError {
            lock_type: "read".to_string(),
            details: e.to_string(),
        })?;

        let root = Value::try_from(&*config).map_err(|e| ConfigError::SerializationError {
            content_type: "config".to_string(),
            details: e.to_string(),
        })?;

        navigate_path(&root, path)
    }
}

/// Walks a TOML value along a dot-separated path
///
/// Table keys and array indices are both accepted as path segments.
fn navigate_path(value: &Value, path: &str) -> Result<Value, ConfigError> {
    let parts: Vec<&str> = path.split('.').collect();
    let mut current = value;

    for (i, part) in parts.iter().enumerate() {
        let walked = parts[..i].join(".");
        current = match current {
            Value::Table(table) => table.get(*part).ok_or_else(|| {
                ConfigError::InvalidPath(format!("Key '{part}' not found at path '{walked}'"))
            })?,
            Value::Array(array) => part
                .parse::<usize>()
                .ok()
                .and_then(|index| array.get(index))
                .ok_or_else(|| {
                    ConfigError::InvalidPath(format!(
                        "Invalid array index '{part}' at path '{walked}'"
                    ))
                })?,
            other => {
                return Err(ConfigError::InvalidPath(format!(
                    "Cannot navigate into {} at path '{walked}'",
                    other.type_str()
                )));
            }
        };
    }

    Ok(current.clone())
}
