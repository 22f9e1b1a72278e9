//! Storage contract for persisted records

use super::PersistenceError;
use std::fmt;

/// The two independent records the game keeps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKey {
    /// Snapshot of the day's session
    Session,
    /// Statistics across all days
    Statistics,
}

impl RecordKey {
    /// File name used by file-backed stores
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Session => "session.json",
            Self::Statistics => "statistics.json",
        }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Session => f.write_str("session"),
            Self::Statistics => f.write_str("statistics"),
        }
    }
}

/// Raw keyed record storage
///
/// Stores move opaque text; encoding and validation live in `Persistence`.
pub trait Store {
    /// Read a record, `None` if it was never written
    fn read(&self, key: RecordKey) -> Result<Option<String>, PersistenceError>;

    /// Replace a record
    fn write(&self, key: RecordKey, payload: &str) -> Result<(), PersistenceError>;
}

impl<S: Store + ?Sized> Store for Box<S> {
    fn read(&self, key: RecordKey) -> Result<Option<String>, PersistenceError> {
        (**self).read(key)
    }

    fn write(&self, key: RecordKey, payload: &str) -> Result<(), PersistenceError> {
        (**self).write(key, payload)
    }
}
