//! Persistence boundary for [`AppState`].
//!
//! A [`Store`] keeps one encoded state blob under a fixed key. Loading never
//! fails: a missing, unreadable or malformed blob is repaired field by field
//! (see [`codec::decode`]) or replaced with the empty default.

pub mod codec;
mod sqlite;

use std::sync::Mutex;

use thiserror::Error;

use crate::models::AppState;

pub use sqlite::SqliteStore;

/// Key the state blob is stored under.
pub const STORAGE_KEY: &str = "todoXpData";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("failed to encode state: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Durable key-value persistence of one [`AppState`].
///
/// Implementors provide raw blob access; `load` and `save` layer the codec on
/// top. A write either fully replaces the previous blob or leaves it intact.
pub trait Store: Send + Sync {
    /// The stored blob, or `None` if nothing has been saved yet.
    fn raw_value(&self) -> Result<Option<String>, StoreError>;

    /// Replace the stored blob.
    fn write_raw(&self, raw: &str) -> Result<(), StoreError>;

    /// Read the persisted state, repairing or defaulting as needed.
    fn load(&self) -> AppState {
        match self.raw_value() {
            Ok(Some(raw)) => codec::decode(&raw),
            Ok(None) => {
                tracing::debug!("No saved state under '{}', starting fresh", STORAGE_KEY);
                AppState::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read saved state, starting fresh: {}", e);
                AppState::default()
            }
        }
    }

    fn save(&self, state: &AppState) -> Result<(), StoreError> {
        let raw = codec::encode(state)?;
        self.write_raw(&raw)
    }
}

/// In-memory store. Holds the encoded blob, so loads go through the same
/// repair path as real storage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with an arbitrary blob.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            value: Mutex::new(Some(raw.into())),
        }
    }
}

impl Store for MemoryStore {
    fn raw_value(&self) -> Result<Option<String>, StoreError> {
        let value = self.value.lock().expect("store lock poisoned");
        Ok(value.clone())
    }

    fn write_raw(&self, raw: &str) -> Result<(), StoreError> {
        let mut value = self.value.lock().expect("store lock poisoned");
        *value = Some(raw.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Task;

    #[test]
    fn empty_memory_store_loads_default() {
        assert_eq!(MemoryStore::new().load(), AppState::default());
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryStore::new();
        let mut state = AppState {
            experience: 42,
            ..Default::default()
        };
        state.tasks.legendary.push(Task::new("Dragon", 5000));

        store.save(&state).unwrap();
        assert_eq!(store.load(), state);
    }

    #[test]
    fn seeded_garbage_loads_default() {
        let store = MemoryStore::with_raw("{not json");
        assert_eq!(store.load(), AppState::default());
    }
}
