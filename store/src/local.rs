//! # Browser storage backend — web platform persistence
//!
//! [`LocalBackend`] is the [`SessionBackend`] implementation used on the
//! **web platform**. It persists the session entries into the browser's
//! `localStorage` via [`web_sys`], so a login survives page reloads.
//!
//! Storage errors (private-browsing restrictions, an unavailable window)
//! degrade silently to "no data": reads return `None` and writes do nothing.
//! A broken storage means the user is simply not remembered; it never
//! crashes the UI.

use crate::session::SessionBackend;

/// `localStorage`-backed session storage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalBackend;

impl LocalBackend {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl SessionBackend for LocalBackend {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn delete(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
