//! Browser-backed implementations of the controller's storage and timer seams.

use std::time::Duration;

use gloo_storage::{LocalStorage, Storage};
use gloo_timers::callback::Timeout;

use flashdeck::errors::StoreError;
use flashdeck::session::{KeyValueBackend, MemoryBackend};
use flashdeck::status::Timer;

/// `localStorage` when the browser grants it, otherwise a page-lifetime map
/// (private browsing, disabled storage).
///
/// Values are plain strings, the same ones `localStorage.getItem` returns,
/// so other pages on the origin can share the session.
#[derive(Clone)]
pub enum BrowserStorage {
    Local(web_sys::Storage),
    Memory(MemoryBackend),
}

impl BrowserStorage {
    pub fn detect() -> Self {
        let available = web_sys::window()
            .and_then(|window| window.local_storage().ok().flatten())
            .is_some();

        if available {
            BrowserStorage::Local(LocalStorage::raw())
        } else {
            flashdeck::warn!("localStorage unavailable, sessions will not survive a reload");
            BrowserStorage::Memory(MemoryBackend::new())
        }
    }
}

impl KeyValueBackend for BrowserStorage {
    fn get(&self, key: &'static str) -> Option<String> {
        match self {
            BrowserStorage::Local(storage) => storage.get_item(key).ok().flatten(),
            BrowserStorage::Memory(memory) => memory.get(key),
        }
    }

    fn set(&self, key: &'static str, value: &str) -> Result<(), StoreError> {
        match self {
            BrowserStorage::Local(storage) => {
                storage
                    .set_item(key, value)
                    .map_err(|e| StoreError::Write {
                        key,
                        reason: format!("{e:?}"),
                    })
            }
            BrowserStorage::Memory(memory) => memory.set(key, value),
        }
    }

    fn remove(&self, key: &'static str) {
        match self {
            BrowserStorage::Local(storage) => {
                if storage.remove_item(key).is_err() {
                    flashdeck::warn!(key, "Failed to remove stored value");
                }
            }
            BrowserStorage::Memory(memory) => memory.remove(key),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct GlooTimer;

impl Timer for GlooTimer {
    fn schedule(&self, delay: Duration, callback: Box<dyn FnOnce()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        // Stale clears are ignored by the controller, so the handle is not kept.
        Timeout::new(millis, callback).forget();
    }
}
