//! Browser adapters for the trail store.
//!
//! `LocalStorage` keeps the record under a single key in `window.localStorage`.
//! `BrowserNotifier` fans changes out two ways: a same-tab custom event, and
//! the `storage` event the browser raises in every other tab after a write.

use trailhead_core::{ChangeCallback, ChangeNotifier, ProgressStorage, StorageError, Subscription};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{CustomEvent, StorageEvent};

/// Dispatched on `window` after this tab writes progress
pub const PROGRESS_UPDATE_EVENT: &str = "trailProgressUpdate";

fn js_reason(value: &JsValue) -> String {
    value
        .as_string()
        .unwrap_or_else(|| format!("{value:?}"))
}

// ─────────────────────────────────────────────────────────────────────────────
// Storage
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct LocalStorage {
    key: String,
}

impl LocalStorage {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or_else(|| StorageError::Unavailable {
            reason: "no window".to_string(),
        })?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable {
                reason: js_reason(&e),
            })?
            .ok_or_else(|| StorageError::Unavailable {
                reason: "localStorage is disabled".to_string(),
            })
    }
}

impl ProgressStorage for LocalStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(&self.key)
            .map_err(|e| StorageError::Unavailable {
                reason: js_reason(&e),
            })
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        // Quota exhaustion and private-mode restrictions surface here
        Self::storage()?
            .set_item(&self.key, raw)
            .map_err(|e| StorageError::Rejected {
                reason: js_reason(&e),
            })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Notifier
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct BrowserNotifier {
    key: String,
}

impl BrowserNotifier {
    /// `key` filters `storage` events down to writes of the progress record.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl ChangeNotifier for BrowserNotifier {
    fn subscribe(&self, callback: ChangeCallback) -> Subscription {
        let Some(window) = web_sys::window() else {
            tracing::warn!("No window, trail progress will not follow other tabs");
            return Subscription::detached();
        };

        let same_tab_callback = callback.clone();
        let same_tab = Closure::<dyn Fn()>::new(move || same_tab_callback());

        let key = self.key.clone();
        let other_tab = Closure::<dyn Fn(StorageEvent)>::new(move |event: StorageEvent| {
            // A missing key means the other tab cleared storage entirely
            if event.key().is_none_or(|changed| changed == key) {
                callback();
            }
        });

        if let Err(e) = window
            .add_event_listener_with_callback(PROGRESS_UPDATE_EVENT, same_tab.as_ref().unchecked_ref())
        {
            tracing::warn!(error = %js_reason(&e), "Failed to listen for trail updates");
        }
        if let Err(e) =
            window.add_event_listener_with_callback("storage", other_tab.as_ref().unchecked_ref())
        {
            tracing::warn!(error = %js_reason(&e), "Failed to listen for storage events");
        }

        Subscription::new(move || {
            let _ = window.remove_event_listener_with_callback(
                PROGRESS_UPDATE_EVENT,
                same_tab.as_ref().unchecked_ref(),
            );
            let _ = window
                .remove_event_listener_with_callback("storage", other_tab.as_ref().unchecked_ref());
        })
    }

    fn publish(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        match CustomEvent::new(PROGRESS_UPDATE_EVENT) {
            Ok(event) => {
                if let Err(e) = window.dispatch_event(&event) {
                    tracing::warn!(error = %js_reason(&e), "Failed to announce trail update");
                }
            }
            Err(e) => tracing::warn!(error = %js_reason(&e), "Failed to create trail update event"),
        }
    }
}
