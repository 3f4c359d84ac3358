use std::path::PathBuf;

/// Errors that can occur while reading or writing completion records
#[derive(thiserror::Error, Debug)]
pub enum ProgressError {
    /// Backing store could not be read or written
    #[error("Storage error at '{path}': {details}")]
    Storage {
        /// Entry location
        path: PathBuf,
        /// Underlying error
        details: String,
    },

    /// Stored entry is not a valid completion record
    #[error("Corrupt completion entry at '{path}': {details}")]
    Corrupt {
        /// Entry location
        path: PathBuf,
        /// Deserialization error
        details: String,
    },
}
