//! Session store: the persisted bearer token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token lives in one key-value slot that survives page reloads. Instead
//! of reading `localStorage` ambiently, components receive a `Session` value
//! wrapping an injected `TokenStorage` capability.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Arc, Mutex};

use crate::config::TOKEN_STORAGE_KEY;

/// Read/write access to a persistent string slot keyed by name.
pub trait TokenStorage {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Inert outside the browser.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl TokenStorage for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn write(&self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
        }
    }
}

/// In-process storage shared between clones.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub(crate) struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

#[cfg(test)]
impl TokenStorage for MemoryStorage {
    fn read(&self, key: &str) -> Option<String> {
        self.slots.lock().ok()?.get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut slots) = self.slots.lock() {
            slots.remove(key);
        }
    }
}

/// The process-wide auth session: one optional opaque token.
#[derive(Clone, Debug, Default)]
pub struct Session<S> {
    storage: S,
}

impl<S: TokenStorage> Session<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// True only when a non-empty token is stored.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// The stored token; empty strings read as absent.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.storage
            .read(TOKEN_STORAGE_KEY)
            .filter(|token| !token.is_empty())
    }

    pub fn set_token(&self, token: &str) {
        self.storage.write(TOKEN_STORAGE_KEY, token);
    }

    pub fn clear_token(&self) {
        self.storage.remove(TOKEN_STORAGE_KEY);
    }
}
