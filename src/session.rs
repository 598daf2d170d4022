//! Session gate
//!
//! A single bearer-token session. The token survives reloads through a
//! `TokenStore`; the username is kept in memory only.

use std::sync::{Arc, Mutex, MutexGuard};

/// Persistent storage for the bearer token.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Process-local token store, shared between clones.
#[derive(Clone, Default)]
pub struct MemoryTokenStore {
    token: Arc<Mutex<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        store.save(token);
        store
    }

    fn slot(&self) -> MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    fn save(&self, token: &str) {
        *self.slot() = Some(token.to_string());
    }

    fn clear(&self) {
        *self.slot() = None;
    }
}

#[derive(Debug, Clone, Default)]
struct SessionState {
    token: Option<String>,
    username: Option<String>,
}

/// The console's single global session.
///
/// Cheap to clone; clones observe the same state.
#[derive(Clone)]
pub struct Session<S: TokenStore> {
    store: S,
    state: Arc<Mutex<SessionState>>,
}

impl<S: TokenStore> Session<S> {
    /// Restores a session from the store, if a token was persisted.
    pub fn restore(store: S) -> Self {
        let token = store.load().filter(|t| !t.is_empty());
        Self {
            store,
            state: Arc::new(Mutex::new(SessionState {
                token,
                username: None,
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn token(&self) -> Option<String> {
        self.lock().token.clone()
    }

    pub fn is_active(&self) -> bool {
        self.lock().token.is_some()
    }

    pub fn username(&self) -> Option<String> {
        self.lock().username.clone()
    }

    /// Name shown in the header; restored sessions do not know it.
    pub fn display_name(&self) -> String {
        self.username().unwrap_or_else(|| "Admin".to_string())
    }

    pub fn begin(&self, username: &str, token: &str) {
        self.store.save(token);
        let mut state = self.lock();
        state.token = Some(token.to_string());
        state.username = Some(username.to_string()).filter(|u| !u.is_empty());
    }

    pub fn end(&self) {
        self.store.clear();
        *self.lock() = SessionState::default();
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_picks_up_persisted_token() {
        let session = Session::restore(MemoryTokenStore::with_token("t1"));
        assert!(session.is_active());
        assert_eq!(session.token().as_deref(), Some("t1"));
        assert_eq!(session.display_name(), "Admin");
    }

    #[test]
    fn empty_store_starts_locked() {
        let session = Session::restore(MemoryTokenStore::new());
        assert!(!session.is_active());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn begin_and_end_write_through_to_store() {
        let store = MemoryTokenStore::new();
        let session = Session::restore(store.clone());

        session.begin("ana", "tok");
        assert_eq!(store.load().as_deref(), Some("tok"));
        assert_eq!(session.display_name(), "ana");

        session.end();
        assert_eq!(store.load(), None);
        assert!(!session.is_active());
        assert_eq!(session.username(), None);
    }

    #[test]
    fn clones_share_state() {
        let session = Session::restore(MemoryTokenStore::new());
        let other = session.clone();
        session.begin("admin", "x");
        assert!(other.is_active());
    }
}
