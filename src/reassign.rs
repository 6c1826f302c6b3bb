//! Tier/Item Reassignment
//!
//! Given a move gesture (item dropped on a target), compute the new
//! item-to-tier assignment.

use crate::models::TierItem;

/// Where an item was dropped: the unranked sentinel, or a tier name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Unranked,
    Tier(String),
}

impl Destination {
    fn resolve(&self) -> Option<&str> {
        match self {
            Destination::Unranked => None,
            Destination::Tier(name) => Some(name),
        }
    }
}

/// Compute the item list after moving `item_id` to `destination`.
///
/// Returns `None` when the move is a no-op: unknown item id (defensive,
/// should not occur under correct wiring) or a drop back onto the
/// item's current tier. Otherwise only the matched item changes;
/// everything else is cloned as-is.
///
/// The destination is NOT validated against the list's tiers; dropping
/// onto a name that no longer exists is accepted here and left to
/// callers to police.
pub fn reassign(
    items: &[TierItem],
    item_id: &str,
    destination: Destination,
) -> Option<Vec<TierItem>> {
    let item = items.iter().find(|i| i.id == item_id)?;
    let target = destination.resolve();
    if item.tier.as_deref() == target {
        return None;
    }
    Some(
        items
            .iter()
            .map(|i| {
                if i.id == item_id {
                    TierItem {
                        tier: target.map(str::to_string),
                        ..i.clone()
                    }
                } else {
                    i.clone()
                }
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items() -> Vec<TierItem> {
        vec![
            TierItem::new("a", "Apple", "🍎"),
            TierItem {
                tier: Some("S".to_string()),
                ..TierItem::new("b", "Banana", "🍌")
            },
        ]
    }

    #[test]
    fn test_move_unranked_to_tier() {
        let result = reassign(&items(), "a", Destination::Tier("S".to_string())).unwrap();
        assert_eq!(result[0].tier.as_deref(), Some("S"));
        // Other items structurally unchanged
        assert_eq!(result[1], items()[1]);
    }

    #[test]
    fn test_move_tier_to_unranked() {
        let result = reassign(&items(), "b", Destination::Unranked).unwrap();
        assert_eq!(result[1].tier, None);
    }

    #[test]
    fn test_drop_on_current_tier_is_noop() {
        assert!(reassign(&items(), "b", Destination::Tier("S".to_string())).is_none());
        assert!(reassign(&items(), "a", Destination::Unranked).is_none());
    }

    #[test]
    fn test_unknown_item_is_noop() {
        assert!(reassign(&items(), "zzz", Destination::Tier("S".to_string())).is_none());
    }

    #[test]
    fn test_dangling_tier_name_is_accepted() {
        // Deliberate simplification: this layer does not validate the
        // destination against the list's tiers.
        let result = reassign(&items(), "a", Destination::Tier("Deleted".to_string())).unwrap();
        assert_eq!(result[0].tier.as_deref(), Some("Deleted"));
    }
}
