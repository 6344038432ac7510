//! The mutate-then-persist pipeline.
//!
//! [`Tracker`] holds the live [`AppState`] and the [`Store`] it came from.
//! Each mutation runs the matching [`engine`] transition, saves the result,
//! and only then makes it the live state. If the save fails, neither the
//! live state nor the stored blob changes.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::engine::{self, EngineError};
use crate::models::{AppState, Category, Standing};
use crate::store::{codec, Store, StoreError};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Shared handle to the live state. Clones refer to the same state.
#[derive(Clone)]
pub struct Tracker {
    store: Arc<dyn Store>,
    state: Arc<Mutex<AppState>>,
}

impl Tracker {
    /// Start a session from whatever the store holds.
    pub fn load(store: Arc<dyn Store>) -> Self {
        let state = store.load();
        tracing::debug!(
            "Loaded state: {} XP, {} quests",
            state.experience,
            state.tasks.total()
        );
        Self {
            store,
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn state(&self) -> AppState {
        self.state.lock().expect("tracker lock poisoned").clone()
    }

    pub fn standing(&self) -> Standing {
        engine::standing(&self.state.lock().expect("tracker lock poisoned"))
    }

    pub fn add_task(&self, category: Category, name: &str, xp: u64) -> Result<AppState, TrackerError> {
        self.apply(|state| Ok(engine::add_task(state, category, name, xp)))
    }

    pub fn complete_task(&self, category: Category, index: usize) -> Result<AppState, TrackerError> {
        let next = self.apply(|state| engine::complete_task(state, category, index))?;
        tracing::info!(
            "Completed {} quest #{}, experience now {}",
            category,
            index,
            next.experience
        );
        Ok(next)
    }

    pub fn delete_task(&self, category: Category, index: usize) -> Result<AppState, TrackerError> {
        self.apply(|state| engine::delete_task(state, category, index))
    }

    pub fn adjust_xp(&self, delta: i64) -> Result<AppState, TrackerError> {
        self.apply(|state| Ok(engine::adjust_xp(state, delta)))
    }

    /// Replace the live state with an external blob, repaired the same way
    /// as a load.
    pub fn import_raw(&self, raw: &str) -> Result<AppState, TrackerError> {
        let imported = codec::decode(raw);
        self.apply(|_| Ok(imported))
    }

    pub fn export_raw(&self) -> Result<String, TrackerError> {
        Ok(codec::encode(&self.state())?)
    }

    fn apply(
        &self,
        transition: impl FnOnce(&AppState) -> Result<AppState, EngineError>,
    ) -> Result<AppState, TrackerError> {
        let mut current = self.state.lock().expect("tracker lock poisoned");
        let next = transition(&*current)?;
        if next == *current {
            return Ok(next);
        }
        self.store.save(&next)?;
        *current = next.clone();
        Ok(next)
    }
}
