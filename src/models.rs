//! Domain Models
//!
//! Data structures matching the persisted tier-list JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ranked bucket within a tier list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tier {
    /// Display label, unique within a list
    pub name: String,
    /// Color (hex, e.g., "#ffb3ba")
    pub color: String,
}

impl Tier {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
        }
    }
}

/// An item being ranked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierItem {
    /// Unique identifier within its list
    pub id: String,
    pub name: String,
    /// An emoji glyph, a data URI, or an http(s) URL
    pub image: String,
    /// Name of the tier this item occupies; None = unranked.
    /// May dangle after a tier is edited away; renderers treat
    /// a dangling name as unranked.
    #[serde(default)]
    pub tier: Option<String>,
}

impl TierItem {
    pub fn new(id: impl Into<String>, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            tier: None,
        }
    }

    /// Whether the image renders as an <img> (vs. an inline glyph)
    pub fn has_image_url(&self) -> bool {
        self.image.starts_with("http") || self.image.starts_with("data:")
    }
}

/// A finalized tier list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierList {
    /// Globally unique, time-based, assigned once at creation
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub tiers: Vec<Tier>,
    pub items: Vec<TierItem>,
    /// Serialized as an RFC 3339 string, rehydrated on load
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl TierList {
    /// Items currently assigned to the named tier
    pub fn items_in_tier<'a>(&'a self, tier_name: &'a str) -> impl Iterator<Item = &'a TierItem> {
        self.items
            .iter()
            .filter(move |item| item.tier.as_deref() == Some(tier_name))
    }

    /// Items with no tier, plus items whose tier name no longer exists
    pub fn unranked_items(&self) -> Vec<&TierItem> {
        self.items
            .iter()
            .filter(|item| match &item.tier {
                None => true,
                Some(name) => !self.tiers.iter().any(|t| &t.name == name),
            })
            .collect()
    }
}

/// Partial update for `TierListRepository::update`; None fields are untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TierListPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub tiers: Option<Vec<Tier>>,
    pub items: Option<Vec<TierItem>>,
    pub icon: Option<String>,
}

impl TierListPatch {
    pub fn items(items: Vec<TierItem>) -> Self {
        Self {
            items: Some(items),
            ..Default::default()
        }
    }

    /// Merge onto an existing list, replacing only the set fields
    pub fn apply(self, list: &mut TierList) {
        if let Some(name) = self.name {
            list.name = name;
        }
        if let Some(description) = self.description {
            list.description = description;
        }
        if let Some(tiers) = self.tiers {
            list.tiers = tiers;
        }
        if let Some(items) = self.items {
            list.items = items;
        }
        if let Some(icon) = self.icon {
            list.icon = Some(icon);
        }
    }
}

/// The tier list under construction: every field optional.
///
/// An empty draft serializes to `{}`, which the store treats as "clear
/// the slot". The draft becomes a complete `TierList` once `id`, `name`
/// and `tiers` are all set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tiers: Option<Vec<Tier>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<TierItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Draft {
    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }

    /// Shallow merge: set fields of `patch` replace the current values
    pub fn merge(&mut self, patch: Draft) {
        if patch.id.is_some() {
            self.id = patch.id;
        }
        if patch.name.is_some() {
            self.name = patch.name;
        }
        if patch.description.is_some() {
            self.description = patch.description;
        }
        if patch.tiers.is_some() {
            self.tiers = patch.tiers;
        }
        if patch.items.is_some() {
            self.items = patch.items;
        }
        if patch.created_at.is_some() {
            self.created_at = patch.created_at;
        }
        if patch.icon.is_some() {
            self.icon = patch.icon;
        }
    }

    /// Promote into a full `TierList`; requires id, name and tiers
    pub fn complete(&self) -> Option<TierList> {
        Some(TierList {
            id: self.id.clone()?,
            name: self.name.clone()?,
            description: self.description.clone().unwrap_or_default(),
            tiers: self.tiers.clone()?,
            items: self.items.clone().unwrap_or_default(),
            created_at: self.created_at.unwrap_or_else(Utc::now),
            icon: self.icon.clone(),
        })
    }
}

impl From<TierList> for Draft {
    fn from(list: TierList) -> Self {
        Draft {
            id: Some(list.id),
            name: Some(list.name),
            description: Some(list.description),
            tiers: Some(list.tiers),
            items: Some(list.items),
            created_at: Some(list.created_at),
            icon: list.icon,
        }
    }
}

/// Fresh time-based id, assigned once at creation
pub fn new_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list() -> TierList {
        TierList {
            id: "1".to_string(),
            name: "Fruits".to_string(),
            description: String::new(),
            tiers: vec![Tier::new("S", "#ffb3ba"), Tier::new("A", "#ffdfba")],
            items: vec![
                TierItem {
                    tier: Some("S".to_string()),
                    ..TierItem::new("a", "Apple", "🍎")
                },
                TierItem::new("b", "Banana", "🍌"),
                TierItem {
                    tier: Some("Gone".to_string()),
                    ..TierItem::new("c", "Cherry", "🍒")
                },
            ],
            created_at: Utc::now(),
            icon: None,
        }
    }

    #[test]
    fn test_items_in_tier() {
        let list = make_list();
        let in_s: Vec<_> = list.items_in_tier("S").collect();
        assert_eq!(in_s.len(), 1);
        assert_eq!(in_s[0].id, "a");
    }

    #[test]
    fn test_dangling_tier_renders_unranked() {
        let list = make_list();
        let unranked: Vec<_> = list.unranked_items().iter().map(|i| i.id.clone()).collect();
        assert_eq!(unranked, vec!["b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_draft_merge_is_shallow() {
        let mut draft = Draft {
            name: Some("Fruits".to_string()),
            ..Default::default()
        };
        draft.merge(Draft {
            items: Some(vec![TierItem::new("a", "Apple", "🍎")]),
            ..Default::default()
        });
        assert_eq!(draft.name.as_deref(), Some("Fruits"));
        assert_eq!(draft.items.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_empty_draft_serializes_to_empty_object() {
        let json = serde_json::to_string(&Draft::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_draft_complete_requires_core_fields() {
        let mut draft = Draft {
            name: Some("Fruits".to_string()),
            items: Some(vec![TierItem::new("a", "Apple", "🍎")]),
            ..Default::default()
        };
        assert!(draft.complete().is_none());

        draft.merge(Draft {
            id: Some("42".to_string()),
            tiers: Some(vec![Tier::new("S", "#ffb3ba")]),
            ..Default::default()
        });
        let list = draft.complete().expect("draft should be complete");
        assert_eq!(list.id, "42");
        assert_eq!(list.description, "");
    }

    #[test]
    fn test_created_at_roundtrip_as_timestamp() {
        let list = make_list();
        let json = serde_json::to_string(&list).unwrap();
        assert!(json.contains("\"createdAt\""));
        let back: TierList = serde_json::from_str(&json).unwrap();
        assert_eq!(back.created_at, list.created_at);
        assert_eq!(back, list);
    }
}
