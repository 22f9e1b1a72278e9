//! File-based `Store` implementation.

use std::fs;
use std::path::{Path, PathBuf};

use super::{PersistenceError, RecordKey, Store};

/// File-based implementation of `Store`.
///
/// Each record is one JSON file in `base_dir`. Writes go to a temporary file
/// that is then renamed over the old one, so a crash mid-write leaves the
/// previous record intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `base_dir`, creating the directory if needed.
    ///
    /// # Errors
    /// Returns `Unavailable` if the directory cannot be created.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self, PersistenceError> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir)?;
        Ok(Self { base_dir })
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn record_path(&self, key: RecordKey) -> PathBuf {
        self.base_dir.join(key.file_name())
    }
}

impl Store for FileStore {
    fn read(&self, key: RecordKey) -> Result<Option<String>, PersistenceError> {
        let path = self.record_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let payload = fs::read_to_string(&path)?;
        tracing::debug!("Loaded {} from {}", key, path.display());
        Ok(Some(payload))
    }

    fn write(&self, key: RecordKey, payload: &str) -> Result<(), PersistenceError> {
        let path = self.record_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, payload)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("Saved {} to {}", key, path.display());
        Ok(())
    }
}
