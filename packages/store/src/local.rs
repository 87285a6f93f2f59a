//! # localStorage preference store — browser-side persistence
//!
//! [`LocalStore`] is the [`PrefStore`] implementation used on the **web
//! platform**. It maps the trait directly onto `window.localStorage`, which is
//! where the theme flag lives between sessions.
//!
//! ## Error handling
//!
//! All trait methods silently swallow errors (returning `None` for reads,
//! doing nothing for writes). A browser with storage disabled degrades to
//! "defaults every visit" rather than crashing the app.

use crate::settings::PrefStore;

/// localStorage-backed PrefStore for the web platform.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl PrefStore for LocalStore {
    async fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    async fn set(&self, key: &str, value: String) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, &value);
        }
    }

    async fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
