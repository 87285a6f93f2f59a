use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::settings::PrefStore;

/// In-memory PrefStore for testing and non-web builds.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryStore {
    async fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    async fn set(&self, key: &str, value: String) {
        self.values.lock().unwrap().insert(key.to_string(), value);
    }

    async fn remove(&self, key: &str) {
        self.values.lock().unwrap().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefs::{Preferences, DARK_MODE_KEY};
    use crate::settings::Settings;

    #[tokio::test]
    async fn test_load_defaults_when_empty() {
        let settings = Settings::new(MemoryStore::new());
        let prefs = settings.load().await;
        assert_eq!(prefs, Preferences::default());
        assert!(prefs.dark_mode);
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let settings = Settings::new(MemoryStore::new());
        settings
            .save(&Preferences { dark_mode: false })
            .await;
        assert!(!settings.load().await.dark_mode);
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_persisted_value() {
        let settings = Settings::new(MemoryStore::new());
        let original = settings.load().await.dark_mode;

        let flipped = settings.toggle_dark_mode().await;
        assert_eq!(flipped, !original);
        assert_eq!(settings.load().await.dark_mode, !original);

        settings.toggle_dark_mode().await;
        assert_eq!(settings.load().await.dark_mode, original);
    }

    #[tokio::test]
    async fn test_corrupt_value_falls_back_to_default() {
        let store = MemoryStore::new();
        store.set(DARK_MODE_KEY, "not-json".to_string()).await;

        let settings = Settings::new(store);
        assert_eq!(settings.load().await, Preferences::default());
    }

    #[tokio::test]
    async fn test_remove_clears_value() {
        let store = MemoryStore::new();
        store.set(DARK_MODE_KEY, "false".to_string()).await;
        store.remove(DARK_MODE_KEY).await;
        assert!(store.get(DARK_MODE_KEY).await.is_none());
    }
}
