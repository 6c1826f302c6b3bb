//! Tier List Repository
//!
//! The ordered collection of finalized tier lists, loaded once from its
//! store slot and re-synced after every mutation.

use chrono::Utc;

use crate::models::{new_id, TierList, TierListPatch};
use crate::storage::{StorageBackend, Store, TIER_LISTS_KEY};

/// In-memory collection backed by the persistent store.
///
/// Insertion order is display order. A load failure is an explicit
/// error state, distinct from an empty store; `loading` settles to
/// false exactly once, during construction.
pub struct TierListRepository<B: StorageBackend> {
    store: Store<B>,
    lists: Vec<TierList>,
    loading: bool,
    error: Option<String>,
}

impl<B: StorageBackend> TierListRepository<B> {
    pub fn new(store: Store<B>) -> Self {
        let mut repo = Self {
            store,
            lists: Vec::new(),
            loading: true,
            error: None,
        };
        if repo.store.has(TIER_LISTS_KEY) {
            match repo.store.load::<Vec<TierList>>(TIER_LISTS_KEY) {
                Some(lists) => repo.lists = lists,
                // Slot present but unreadable: surface it, don't wipe the slot
                None => repo.error = Some("Failed to load saved tier lists".to_string()),
            }
        }
        repo.loading = false;
        repo
    }

    pub fn lists(&self) -> &[TierList] {
        &self.lists
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn take_error(&mut self) -> Option<String> {
        self.error.take()
    }

    /// Append a list. `list.id` uniqueness is the caller's contract.
    pub fn add(&mut self, list: TierList) {
        self.lists.push(list);
        self.persist();
    }

    /// Merge a patch onto the matching list; no-op when absent
    pub fn update(&mut self, id: &str, patch: TierListPatch) {
        let Some(list) = self.lists.iter_mut().find(|l| l.id == id) else {
            return;
        };
        patch.apply(list);
        self.persist();
    }

    /// Remove the matching list; no-op when absent
    pub fn delete(&mut self, id: &str) {
        let before = self.lists.len();
        self.lists.retain(|l| l.id != id);
        if self.lists.len() != before {
            self.persist();
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<&TierList> {
        self.lists.iter().find(|l| l.id == id)
    }

    /// Deep-copy a template into a fresh working list: new id, new
    /// timestamp, every item back to unranked.
    pub fn instantiate_from_template(&mut self, template: &TierList) -> TierList {
        let mut list = template.clone();
        list.id = new_id();
        list.created_at = Utc::now();
        for item in &mut list.items {
            item.tier = None;
        }
        self.add(list.clone());
        list
    }

    /// Empty the collection and its slot
    pub fn clear_all(&mut self) {
        self.lists.clear();
        self.store.clear(TIER_LISTS_KEY);
    }

    fn persist(&mut self) {
        if let Err(e) = self.store.save(TIER_LISTS_KEY, &self.lists) {
            crate::logging::error(&format!("[STORE] {e}"));
            self.error = Some("Failed to save tier lists".to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Tier, TierItem};
    use crate::storage::MemoryBackend;
    use crate::templates::builtin_templates;

    fn make_list(id: &str, name: &str) -> TierList {
        TierList {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            tiers: vec![Tier::new("S", "#ffb3ba")],
            items: vec![TierItem::new("a", "Apple", "🍎")],
            created_at: Utc::now(),
            icon: None,
        }
    }

    fn repo() -> TierListRepository<MemoryBackend> {
        TierListRepository::new(Store::new(MemoryBackend::default()))
    }

    #[test]
    fn test_empty_store_is_not_an_error() {
        let repo = repo();
        assert!(!repo.is_loading());
        assert!(repo.error().is_none());
        assert!(repo.lists().is_empty());
    }

    #[test]
    fn test_corrupt_blob_is_an_error_state() {
        let store = Store::new(MemoryBackend::with_slot(TIER_LISTS_KEY, "{broken"));
        let repo = TierListRepository::new(store);
        assert!(!repo.is_loading());
        assert!(repo.error().is_some());
        assert!(repo.lists().is_empty());
    }

    #[test]
    fn test_add_persists() {
        let mut repo = repo();
        repo.add(make_list("1", "Fruits"));
        // Reconstruct from the same backing store
        let reloaded = TierListRepository::new(Store::new(MemoryBackend::with_slot(
            TIER_LISTS_KEY,
            &serde_json::to_string(&repo.lists().to_vec()).unwrap(),
        )));
        assert_eq!(reloaded.lists().len(), 1);
        assert_eq!(reloaded.lists()[0].name, "Fruits");
    }

    #[test]
    fn test_update_merges_patch() {
        let mut repo = repo();
        repo.add(make_list("1", "Fruits"));
        repo.update(
            "1",
            TierListPatch {
                name: Some("Best Fruits".to_string()),
                ..Default::default()
            },
        );
        let list = repo.get_by_id("1").unwrap();
        assert_eq!(list.name, "Best Fruits");
        // Untouched fields survive
        assert_eq!(list.items.len(), 1);
    }

    #[test]
    fn test_update_missing_id_is_noop() {
        let mut repo = repo();
        repo.add(make_list("1", "Fruits"));
        repo.update(
            "nope",
            TierListPatch {
                name: Some("x".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(repo.get_by_id("1").unwrap().name, "Fruits");
    }

    #[test]
    fn test_delete_and_missing_lookup() {
        let mut repo = repo();
        repo.add(make_list("1", "Fruits"));
        repo.add(make_list("2", "Movies"));
        assert!(repo.get_by_id("missing-id").is_none());
        repo.delete("1");
        assert_eq!(repo.lists().len(), 1);
        repo.delete("1"); // already gone, no-op
        assert_eq!(repo.lists().len(), 1);
    }

    #[test]
    fn test_instantiate_from_template() {
        let mut repo = repo();
        let mut template = builtin_templates().remove(0);
        // A previously-used template keeps its rankings; the copy must not
        template.items[0].tier = Some("S".to_string());
        let list = repo.instantiate_from_template(&template);
        assert_ne!(list.id, template.id);
        assert!(list.items.iter().all(|i| i.tier.is_none()));
        assert_eq!(list.items.len(), template.items.len());
        // Added to the collection, and the template itself untouched
        assert!(repo.get_by_id(&list.id).is_some());
        assert_eq!(template.id, "template-pies");
    }

    #[test]
    fn test_clear_all() {
        let mut repo = repo();
        repo.add(make_list("1", "Fruits"));
        repo.clear_all();
        assert!(repo.lists().is_empty());
    }
}
