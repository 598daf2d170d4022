//! LocalStorage token persistence

use gloo_storage::{LocalStorage, Storage};
use pedidos::TokenStore;
use pedidos_shared::TOKEN_STORAGE_KEY;

/// Keeps the bearer token under `TOKEN_STORAGE_KEY` as a raw string, so the
/// value stays readable by anything else that inspects `localStorage.token`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTokenStore;

impl TokenStore for BrowserTokenStore {
    fn load(&self) -> Option<String> {
        LocalStorage::raw()
            .get_item(TOKEN_STORAGE_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn save(&self, token: &str) {
        if LocalStorage::raw().set_item(TOKEN_STORAGE_KEY, token).is_err() {
            log::warn!("could not persist the session token");
        }
    }

    fn clear(&self) {
        LocalStorage::delete(TOKEN_STORAGE_KEY);
    }
}
