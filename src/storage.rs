//! Persistent Store
//!
//! Generic load/save of named collections to durable key-value slots.
//! Backed by browser localStorage in the app; tests run against an
//! in-memory backend.

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Slot for the finalized tier-list collection
pub const TIER_LISTS_KEY: &str = "tierlistify-tier-lists";
/// Slot for the in-progress draft
pub const CURRENT_TIER_LIST_KEY: &str = "tierlistify-current-tier-list";
/// Slot for the seeded template catalog
pub const TEMPLATES_KEY: &str = "tierlistify-tier-list-templates";

/// Raw string slot access; the seam between `Store` and the browser
pub trait StorageBackend {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), String>;
    fn remove(&self, key: &str);
}

/// Backend over `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct LocalStorageBackend;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        let storage = local_storage().ok_or_else(|| "localStorage unavailable".to_string())?;
        storage
            .set_item(key, value)
            .map_err(|e| format!("failed to write {key}: {e:?}"))
    }

    fn remove(&self, key: &str) {
        if let Some(s) = local_storage() {
            let _ = s.remove_item(key);
        }
    }
}

/// JSON store over a backend.
///
/// `load` treats absent or malformed data as "no data yet". `save`
/// with a value that serializes to the empty object removes the slot
/// instead, so abandoned state never lingers.
#[derive(Clone, Copy, Default)]
pub struct Store<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Store<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.backend.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                crate::logging::error(&format!("[STORE] malformed blob at {key}: {e}"));
                None
            }
        }
    }

    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), String> {
        let json =
            serde_json::to_string(value).map_err(|e| format!("failed to serialize {key}: {e}"))?;
        if json == "{}" {
            self.backend.remove(key);
            return Ok(());
        }
        self.backend.set(key, &json)
    }

    pub fn clear(&self, key: &str) {
        self.backend.remove(key);
    }

    /// Whether the slot currently holds anything at all
    pub fn has(&self, key: &str) -> bool {
        self.backend.get(key).is_some()
    }
}

/// In-memory backend for tests
#[cfg(test)]
#[derive(Default)]
pub struct MemoryBackend {
    slots: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(test)]
impl MemoryBackend {
    pub fn with_slot(key: &str, value: &str) -> Self {
        let backend = Self::default();
        backend
            .slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        backend
    }
}

#[cfg(test)]
impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), String> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) {
        self.slots.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Tier, TierItem, TierList};
    use chrono::Utc;

    fn store() -> Store<MemoryBackend> {
        Store::new(MemoryBackend::default())
    }

    #[test]
    fn test_load_missing_slot() {
        let store = store();
        let loaded: Option<Vec<TierList>> = store.load(TIER_LISTS_KEY);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_load_malformed_blob() {
        let store = Store::new(MemoryBackend::with_slot(TIER_LISTS_KEY, "not json{"));
        let loaded: Option<Vec<TierList>> = store.load(TIER_LISTS_KEY);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_roundtrip_preserves_timestamp() {
        let store = store();
        let list = TierList {
            id: "1".to_string(),
            name: "Fruits".to_string(),
            description: "desc".to_string(),
            tiers: vec![Tier::new("S", "#ffb3ba")],
            items: vec![TierItem::new("a", "Apple", "🍎")],
            created_at: Utc::now(),
            icon: Some("🍇".to_string()),
        };
        store.save(TIER_LISTS_KEY, &vec![list.clone()]).unwrap();
        let loaded: Vec<TierList> = store.load(TIER_LISTS_KEY).unwrap();
        assert_eq!(loaded, vec![list.clone()]);
        assert_eq!(loaded[0].created_at, list.created_at);
    }

    #[test]
    fn test_save_empty_object_clears_slot() {
        let store = store();
        store
            .save(CURRENT_TIER_LIST_KEY, &crate::models::Draft::default())
            .unwrap();
        assert!(!store.has(CURRENT_TIER_LIST_KEY));
        let loaded: Option<crate::models::Draft> = store.load(CURRENT_TIER_LIST_KEY);
        assert!(loaded.is_none());
    }

    #[test]
    fn test_clear_removes_slot() {
        let store = store();
        store.save(TIER_LISTS_KEY, &vec![1, 2, 3]).unwrap();
        assert!(store.has(TIER_LISTS_KEY));
        store.clear(TIER_LISTS_KEY);
        assert!(!store.has(TIER_LISTS_KEY));
    }
}
