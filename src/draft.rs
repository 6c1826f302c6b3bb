//! Draft Session
//!
//! The single in-progress tier list, persisted under its own slot so a
//! reload resumes the draft and an abandoned draft never pollutes the
//! finished-lists collection.

use chrono::Utc;

use crate::models::{new_id, Draft, Tier, TierList};
use crate::reassign::{reassign, Destination};
use crate::storage::{StorageBackend, Store, CURRENT_TIER_LIST_KEY};

pub struct DraftSession<B: StorageBackend> {
    store: Store<B>,
    draft: Draft,
}

impl<B: StorageBackend> DraftSession<B> {
    /// Resume the persisted draft; missing or corrupt slot means a
    /// fresh empty draft.
    pub fn new(store: Store<B>) -> Self {
        let draft = store.load(CURRENT_TIER_LIST_KEY).unwrap_or_default();
        Self { store, draft }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Shallow-merge a patch and persist immediately. When the merged
    /// draft is empty the slot is cleared rather than storing `{}`.
    pub fn update(&mut self, patch: Draft) {
        self.draft.merge(patch);
        self.persist();
    }

    /// Lock in the tier set and move the draft into ranking. `id` and
    /// `created_at` are stamped once; returning to setup and beginning
    /// again must not reissue them.
    pub fn begin(&mut self, tiers: Vec<Tier>) {
        let mut patch = Draft {
            tiers: Some(tiers),
            ..Default::default()
        };
        if self.draft.id.is_none() {
            patch.id = Some(new_id());
            patch.created_at = Some(Utc::now());
        }
        self.update(patch);
    }

    /// Reset to an empty draft and remove the persisted slot
    pub fn clear(&mut self) {
        self.draft = Draft::default();
        self.store.clear(CURRENT_TIER_LIST_KEY);
    }

    /// Apply a move gesture to the draft's items. Does nothing (and
    /// writes nothing) when the move is a no-op.
    pub fn move_item(&mut self, item_id: &str, destination: Destination) {
        let items = self.draft.items.as_deref().unwrap_or_default();
        if let Some(items) = reassign(items, item_id, destination) {
            self.update(Draft {
                items: Some(items),
                ..Default::default()
            });
        }
    }

    /// Promote into a finished `TierList`; the caller adds the copy to
    /// the repository. The draft itself is left untouched.
    pub fn promote(&self) -> Option<TierList> {
        self.draft.complete()
    }

    fn persist(&self) {
        if let Err(e) = self.store.save(CURRENT_TIER_LIST_KEY, &self.draft) {
            crate::logging::error(&format!("[STORE] {e}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Tier, TierItem};
    use crate::storage::MemoryBackend;

    fn session() -> DraftSession<MemoryBackend> {
        DraftSession::new(Store::new(MemoryBackend::default()))
    }

    #[test]
    fn test_update_merges_and_persists() {
        let mut session = session();
        session.update(Draft {
            name: Some("Fruits".to_string()),
            ..Default::default()
        });
        session.update(Draft {
            items: Some(vec![TierItem::new("a", "Apple", "🍎")]),
            ..Default::default()
        });
        assert_eq!(session.draft().name.as_deref(), Some("Fruits"));

        let raw = session
            .store
            .load::<Draft>(CURRENT_TIER_LIST_KEY)
            .expect("draft should be persisted");
        assert_eq!(&raw, session.draft());
    }

    #[test]
    fn test_resume_from_slot() {
        let json = r#"{"name":"Fruits","createdAt":"2024-05-01T00:00:00Z"}"#;
        let store = Store::new(MemoryBackend::with_slot(CURRENT_TIER_LIST_KEY, json));
        let session = DraftSession::new(store);
        assert_eq!(session.draft().name.as_deref(), Some("Fruits"));
        assert!(session.draft().created_at.is_some());
    }

    #[test]
    fn test_corrupt_slot_resumes_empty() {
        let store = Store::new(MemoryBackend::with_slot(CURRENT_TIER_LIST_KEY, "###"));
        let session = DraftSession::new(store);
        assert!(session.draft().is_empty());
    }

    #[test]
    fn test_begin_stamps_identity_once() {
        let mut session = session();
        session.update(Draft {
            name: Some("Fruits".to_string()),
            ..Default::default()
        });
        session.begin(vec![Tier::new("S", "#ffb3ba")]);
        let id = session.draft().id.clone().expect("id stamped");
        let created_at = session.draft().created_at.expect("created_at stamped");

        // Back to setup, tweak the tiers, begin again
        session.begin(vec![Tier::new("S", "#ffb3ba"), Tier::new("A", "#ffdfba")]);
        assert_eq!(session.draft().id.as_deref(), Some(id.as_str()));
        assert_eq!(session.draft().created_at, Some(created_at));
        assert_eq!(session.draft().tiers.as_ref().map(Vec::len), Some(2));
    }

    #[test]
    fn test_clear_removes_slot() {
        let mut session = session();
        session.update(Draft {
            name: Some("Fruits".to_string()),
            ..Default::default()
        });
        session.clear();
        assert!(session.draft().is_empty());
        assert!(!session.store.has(CURRENT_TIER_LIST_KEY));
    }

    #[test]
    fn test_move_item_writes_through() {
        let mut session = session();
        session.update(Draft {
            items: Some(vec![TierItem::new("a", "Apple", "🍎")]),
            ..Default::default()
        });
        session.move_item("a", Destination::Tier("S".to_string()));
        let items = session.draft().items.as_ref().unwrap();
        assert_eq!(items[0].tier.as_deref(), Some("S"));

        let persisted: Draft = session.store.load(CURRENT_TIER_LIST_KEY).unwrap();
        assert_eq!(persisted.items.unwrap()[0].tier.as_deref(), Some("S"));
    }

    #[test]
    fn test_move_to_same_tier_writes_nothing() {
        let mut session = session();
        session.update(Draft {
            items: Some(vec![TierItem::new("a", "Apple", "🍎")]),
            ..Default::default()
        });
        session.move_item("a", Destination::Tier("S".to_string()));
        // Poison the slot; a no-op move must not rewrite it
        session.store.clear(CURRENT_TIER_LIST_KEY);
        session.move_item("a", Destination::Tier("S".to_string()));
        assert!(!session.store.has(CURRENT_TIER_LIST_KEY));
    }

    #[test]
    fn test_promote_copies_out() {
        let mut session = session();
        session.update(Draft {
            id: Some("42".to_string()),
            name: Some("Fruits".to_string()),
            tiers: Some(vec![Tier::new("S", "#ffb3ba")]),
            items: Some(vec![TierItem::new("a", "Apple", "🍎")]),
            ..Default::default()
        });
        let list = session.promote().expect("complete draft");
        assert_eq!(list.id, "42");
        // One-way copy: the draft is still intact until cleared
        assert!(!session.draft().is_empty());
    }
}
