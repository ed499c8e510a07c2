//! Shared session registry
//!
//! The map lock is held only long enough to insert a session or clone its
//! handle; each session carries its own mutex, so guesses against different
//! IDs never wait on each other.

use super::state::GameState;
use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use uuid::Uuid;

/// Handle to one registered session
pub type SessionHandle = Arc<Mutex<GameState>>;

/// ID -> session map; sessions are never evicted
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<FxHashMap<Uuid, SessionHandle>>,
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a session under its own ID
    pub fn insert(&self, state: GameState) -> SessionHandle {
        let id = state.id();
        let handle = Arc::new(Mutex::new(state));
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, Arc::clone(&handle));
        handle
    }

    /// Look up a session handle
    #[must_use]
    pub fn get(&self, id: &Uuid) -> Option<SessionHandle> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Lock one session
///
/// A poisoned session is still consistent: every mutation is a single flag
/// flip paired with its counter update, completed before anything can panic.
pub fn lock(handle: &SessionHandle) -> MutexGuard<'_, GameState> {
    handle.lock().unwrap_or_else(PoisonError::into_inner)
}
