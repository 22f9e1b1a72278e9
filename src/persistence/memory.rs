use std::io;
use std::sync::RwLock;

use rustc_hash::FxHashMap;

use super::{PersistenceError, RecordKey, Store};

/// In-memory implementation of `Store`
///
/// Used by tests, and as the fallback when no data directory is usable.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<FxHashMap<RecordKey, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> PersistenceError {
    PersistenceError::Unavailable(io::Error::other("memory store lock poisoned"))
}

impl Store for MemoryStore {
    fn read(&self, key: RecordKey) -> Result<Option<String>, PersistenceError> {
        let records = self.records.read().map_err(|_| poisoned())?;
        Ok(records.get(&key).cloned())
    }

    fn write(&self, key: RecordKey, payload: &str) -> Result<(), PersistenceError> {
        let mut records = self.records.write().map_err(|_| poisoned())?;
        records.insert(key, payload.to_string());
        Ok(())
    }
}
