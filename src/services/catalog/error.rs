use std::path::PathBuf;

use super::OutlineError;

/// Errors that can occur while loading a catalog
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    /// Fixture file could not be read
    #[error("Failed to read catalog fixture '{path}': {details}")]
    Read {
        /// Fixture path
        path: PathBuf,
        /// Underlying I/O error
        details: String,
    },

    /// Fixture content is not a valid catalog
    #[error("Invalid catalog fixture '{path}': {details}")]
    Parse {
        /// Fixture path
        path: PathBuf,
        /// Deserialization error
        details: String,
    },

    /// A course's ordering is ambiguous
    #[error("Invalid course outline: {0}")]
    Outline(#[from] OutlineError),

    /// Two courses share an id
    #[error("Course id '{0}' appears more than once")]
    DuplicateCourse(String),
}
