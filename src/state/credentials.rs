//! Durable storage for the session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The store is the single source of truth for "is there a session": the
//! session layer derives authorization from `read()` on every check instead
//! of caching its own flag.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::util::storage;

const TOKEN_STORAGE_KEY: &str = "classhub_session_token";

/// Process-wide store holding at most one opaque session token.
///
/// The token is mirrored between an in-memory cell and `localStorage`, so a
/// page reload restores the previous session. Clones share the cell: the
/// application constructs one store at startup and hands clones to whatever
/// needs token access. Tests construct independent empty stores with
/// `CredentialStore::default()`.
#[derive(Clone, Default)]
pub struct CredentialStore {
    cell: Arc<Mutex<Option<String>>>,
}

impl CredentialStore {
    /// Create a store hydrated from durable storage.
    ///
    /// Must run before anything derives authorization from [`Self::read`],
    /// so the first render reflects a restored session instead of flashing
    /// through a logged-out redirect.
    #[must_use]
    pub fn load() -> Self {
        Self {
            cell: Arc::new(Mutex::new(storage::load_string(TOKEN_STORAGE_KEY))),
        }
    }

    /// The stored token, or `None` when no session credential is held.
    /// Absence is a normal outcome, not an error.
    #[must_use]
    pub fn read(&self) -> Option<String> {
        self.with_cell(|cell| cell.clone())
    }

    /// Persist `token`, fully replacing any previous value.
    pub fn write(&self, token: &str) {
        self.with_cell(|cell| *cell = Some(token.to_owned()));
        storage::save_string(TOKEN_STORAGE_KEY, token);
    }

    /// Remove any stored token.
    pub fn clear(&self) {
        self.with_cell(|cell| *cell = None);
        storage::remove(TOKEN_STORAGE_KEY);
    }

    // All token access goes through one lock, so each mutation is atomic at
    // token granularity and readers observe the most recent completed write.
    fn with_cell<R>(&self, f: impl FnOnce(&mut Option<String>) -> R) -> R {
        let mut cell = self.cell.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut cell)
    }
}
