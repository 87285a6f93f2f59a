//! # Settings — typed preference access over an abstract key-value store
//!
//! [`Settings`] is the high-level entry point of the storage layer. All reads
//! and writes go through the [`PrefStore`] trait, so the same logic works
//! against browser `localStorage` on the web ([`crate::LocalStore`]) and an
//! in-memory map in tests and native builds ([`crate::MemoryStore`]).
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`load`](Settings::load) | Reads [`Preferences`], falling back to defaults for missing or unparseable values. |
//! | [`save`](Settings::save) | Persists the full preference record. |
//! | [`toggle_dark_mode`](Settings::toggle_dark_mode) | Read-modify-write flip of the theme flag; returns the new value. |

use crate::prefs::{Preferences, DARK_MODE_KEY};

/// Async trait for storing and retrieving preference values.
pub trait PrefStore {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Option<String>>;
    fn set(&self, key: &str, value: String) -> impl std::future::Future<Output = ()>;
    fn remove(&self, key: &str) -> impl std::future::Future<Output = ()>;
}

/// Typed preference access over any [`PrefStore`].
#[derive(Clone, Debug)]
pub struct Settings<S: PrefStore> {
    store: S,
}

impl<S: PrefStore> Settings<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load preferences. Missing or corrupt stored values fall back to
    /// [`Preferences::default`] rather than erroring.
    pub async fn load(&self) -> Preferences {
        let dark_mode = match self.store.get(DARK_MODE_KEY).await {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|_| Preferences::default().dark_mode),
            None => Preferences::default().dark_mode,
        };
        Preferences { dark_mode }
    }

    /// Persist the full preference record.
    pub async fn save(&self, prefs: &Preferences) {
        // Stored as a bare JSON boolean, same shape the original app wrote.
        if let Ok(raw) = serde_json::to_string(&prefs.dark_mode) {
            self.store.set(DARK_MODE_KEY, raw).await;
        }
    }

    /// Flip the dark-mode flag and persist it. Returns the new value.
    pub async fn toggle_dark_mode(&self) -> bool {
        let mut prefs = self.load().await;
        prefs.dark_mode = !prefs.dark_mode;
        self.save(&prefs).await;
        prefs.dark_mode
    }
}
