use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::RwLock,
};

use tracing::{debug, instrument};

use super::{
    ProgressError,
    types::{CompletionRecord, StoredCompletion},
};

/// Default file-name prefix for completion entries
pub const DEFAULT_KEY_PREFIX: &str = "progress_mock_";

/// Durable storage for completion records
///
/// Records are keyed by `(user_id, lesson_id)`; a later `set` for the same
/// key overwrites the earlier record. The course is not part of the key: a
/// lesson id shared by two courses holds one record, carrying the course of
/// the most recent `set`.
pub trait CompletionRepository: Send + Sync {
    /// Stored record for a user's lesson, if any.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the entry cannot be read or decoded.
    fn get(&self, user_id: &str, lesson_id: &str)
    -> Result<Option<CompletionRecord>, ProgressError>;

    /// Store or overwrite a record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the entry cannot be written.
    fn set(&self, record: &CompletionRecord) -> Result<(), ProgressError>;
}

/// In-process repository, lost on exit
#[derive(Debug, Default)]
pub struct MemoryRepository {
    records: RwLock<HashMap<(String, String), CompletionRecord>>,
}

impl MemoryRepository {
    /// Empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

impl CompletionRepository for MemoryRepository {
    fn get(
        &self,
        user_id: &str,
        lesson_id: &str,
    ) -> Result<Option<CompletionRecord>, ProgressError> {
        let records = match self.records.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        Ok(records
            .get(&(user_id.to_string(), lesson_id.to_string()))
            .cloned())
    }

    fn set(&self, record: &CompletionRecord) -> Result<(), ProgressError> {
        let mut records = match self.records.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };

        records.insert(
            (record.user_id.clone(), record.lesson_id.clone()),
            record.clone(),
        );
        Ok(())
    }
}

/// One JSON file per lesson under a per-user directory
///
/// Layout: `<root>/<user_id>/<key_prefix><lesson_id>.json`, with both ids
/// percent-encoded. Every id maps to a distinct name inside the root.
#[derive(Debug, Clone)]
pub struct FileRepository {
    root: PathBuf,
    key_prefix: String,
}

impl FileRepository {
    /// Repository rooted at `root` with the default key prefix.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_prefix(root, DEFAULT_KEY_PREFIX)
    }

    /// Repository rooted at `root` with a custom key prefix.
    pub fn with_prefix(root: impl Into<PathBuf>, key_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            key_prefix: key_prefix.into(),
        }
    }

    /// Storage root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Location of the entry for a user's lesson.
    pub fn entry_path(&self, user_id: &str, lesson_id: &str) -> PathBuf {
        self.root.join(encode_id(user_id)).join(format!(
            "{}{}.json",
            self.key_prefix,
            encode_id(lesson_id)
        ))
    }
}

impl CompletionRepository for FileRepository {
    #[instrument(skip(self))]
    fn get(
        &self,
        user_id: &str,
        lesson_id: &str,
    ) -> Result<Option<CompletionRecord>, ProgressError> {
        let path = self.entry_path(user_id, lesson_id);

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(storage_error(&path, &e)),
        };

        let stored: StoredCompletion =
            serde_json::from_str(&content).map_err(|e| ProgressError::Corrupt {
                path: path.clone(),
                details: e.to_string(),
            })?;

        Ok(Some(stored.into_record(user_id, lesson_id)))
    }

    #[instrument(skip(self, record), fields(user = %record.user_id, lesson = %record.lesson_id))]
    fn set(&self, record: &CompletionRecord) -> Result<(), ProgressError> {
        let path = self.entry_path(&record.user_id, &record.lesson_id);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| storage_error(parent, &e))?;
        }

        let content = serde_json::to_string_pretty(&StoredCompletion::from(record)).map_err(
            |e| ProgressError::Storage {
                path: path.clone(),
                details: e.to_string(),
            },
        )?;

        fs::write(&path, content).map_err(|e| storage_error(&path, &e))?;
        debug!(path = %path.display(), "Wrote completion entry");

        Ok(())
    }
}

/// File-name form of an id. Dots are escaped too, so `..` stays a plain name.
fn encode_id(id: &str) -> String {
    urlencoding::encode(id).replace('.', "%2E")
}

fn storage_error(path: &Path, error: &io::Error) -> ProgressError {
    ProgressError::Storage {
        path: path.to_path_buf(),
        details: error.to_string(),
    }
}
