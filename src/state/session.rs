//! Session lifecycle built on the credential store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages commit a token here after a successful login/registration exchange
//! and end the session on sign-out or when the server rejects a stored
//! credential. Authorization is recomputed from the credential store on
//! every check, and subscribers are notified after each transition so the
//! UI layer can mirror it reactively.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::net::http::RequestError;
use crate::net::types::UserSummary;
use crate::state::credentials::CredentialStore;

type Listener = Box<dyn Fn(bool) + Send + Sync>;

/// Owner of session transitions over a shared [`CredentialStore`].
///
/// Clones share both the store and the subscriber list.
#[derive(Clone, Default)]
pub struct Session {
    store: CredentialStore,
    listeners: Arc<Mutex<Vec<Listener>>>,
}

impl Session {
    #[must_use]
    pub fn new(store: CredentialStore) -> Self {
        Self {
            store,
            listeners: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// The credential store backing this session, for request dispatch.
    #[must_use]
    pub fn credentials(&self) -> CredentialStore {
        self.store.clone()
    }

    /// True iff the credential store currently holds a token.
    #[must_use]
    pub fn is_authorized(&self) -> bool {
        self.store.read().is_some()
    }

    /// Store `token` and notify subscribers that the session is authorized.
    pub fn commit(&self, token: &str) {
        self.store.write(token);
        self.notify();
    }

    /// Drop any stored token and notify subscribers. Idempotent.
    pub fn end(&self) {
        self.store.clear();
        self.notify();
    }

    /// End the session iff `err` reports the credential itself as invalid.
    ///
    /// Callers of session-assuming requests route failures through here so a
    /// stale token is discarded before the error is surfaced.
    pub fn note_rejection(&self, err: &RequestError) {
        if err.is_auth_rejected() {
            self.end();
        }
    }

    /// Register `listener`, invoked with the authorization value after every
    /// commit/end transition.
    pub fn subscribe(&self, listener: impl Fn(bool) + Send + Sync + 'static) {
        self.lock_listeners().push(Box::new(listener));
    }

    fn notify(&self) {
        let authorized = self.is_authorized();
        for listener in self.lock_listeners().iter() {
            listener(authorized);
        }
    }

    fn lock_listeners(&self) -> MutexGuard<'_, Vec<Listener>> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// UI-facing session snapshot provided as a reactive context.
///
/// `authorized` mirrors the credential store through the subscription
/// installed at startup; `user` is filled in from the login response or the
/// account fetch and cleared when the session ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionView {
    pub authorized: bool,
    pub user: Option<UserSummary>,
}

impl SessionView {
    /// Snapshot of `session` as of now, with no user summary loaded yet.
    #[must_use]
    pub fn of(session: &Session) -> Self {
        Self {
            authorized: session.is_authorized(),
            user: None,
        }
    }
}
