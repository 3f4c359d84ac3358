use std::path::PathBuf;

/// Errors that can occur during configuration store operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The specified configuration path does not exist.
    #[error("Invalid config path: {0}")]
    InvalidPath(String),

    /// Loading the configuration file failed
    #[error("failed to load config from '{path}': {details}")]
    LoadError {
        /// File that was being loaded
        path: PathBuf,
        /// Underlying error details
        details: String,
    },

    /// The configuration could not be converted to a TOML value
    #[error("failed to serialize {content_type}: {details}")]
    SerializationError {
        /// Type of content being serialized
        content_type: String,
        /// Serialization error details
        details: String,
    },

    /// A lock guarding the configuration was poisoned
    #[error("failed to acquire {lock_type} lock: {details}")]
    LockError {
        /// Kind of lock (read or write)
        lock_type: String,
        /// Error details
        details: String,
    },
}
