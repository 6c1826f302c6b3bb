//! Template Catalog
//!
//! Built-in tier lists seeded into their store slot on first run,
//! ready to be cloned into a user's working set.

use chrono::Utc;

use crate::models::{Tier, TierItem, TierList};
use crate::storage::{StorageBackend, Store, TEMPLATES_KEY};

/// Default tier palette shown on the init screen (S through F)
pub const DEFAULT_TIER_COLORS: &[(&str, &str)] = &[
    ("S", "#ffb3ba"),
    ("A", "#ffdfba"),
    ("B", "#ffffba"),
    ("C", "#baffc9"),
    ("D", "#bae1ff"),
    ("F", "#c9c9ff"),
];

/// Default tiers for new lists and templates (the F tier is left out)
pub fn default_tiers() -> Vec<Tier> {
    DEFAULT_TIER_COLORS
        .iter()
        .filter(|(name, _)| *name != "F")
        .map(|(name, color)| Tier::new(*name, *color))
        .collect()
}

fn item(id: &str, name: &str, image: &str) -> TierItem {
    TierItem::new(id, name, image)
}

/// The fixed built-in catalog; every item starts unranked
pub fn builtin_templates() -> Vec<TierList> {
    vec![
        TierList {
            id: "template-pies".to_string(),
            name: "Pies".to_string(),
            description: "Rank your favorite pies".to_string(),
            icon: Some("🥧".to_string()),
            tiers: default_tiers(),
            items: vec![
                item("pie-apple", "Apple Pie", "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4b/Apple_pie.jpg/800px-Apple_pie.jpg"),
                item("pie-cherry", "Cherry Pie", "https://upload.wikimedia.org/wikipedia/commons/thumb/7/7a/Cherry_pie_%281%29.jpg/800px-Cherry_pie_%281%29.jpg"),
                item("pie-pumpkin", "Pumpkin Pie", "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Pumpkin_pie.jpg/800px-Pumpkin_pie.jpg"),
                item("pie-pecan", "Pecan Pie", "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8c/Pecan_pie.jpg/800px-Pecan_pie.jpg"),
                item("pie-keylime", "Key Lime Pie", "https://upload.wikimedia.org/wikipedia/commons/thumb/0/0a/Key_Lime_Pie.jpg/800px-Key_Lime_Pie.jpg"),
                item("pie-blueberry", "Blueberry Pie", "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4c/Blueberry_pie.jpg/800px-Blueberry_pie.jpg"),
                item("pie-lemon", "Lemon Meringue Pie", "https://upload.wikimedia.org/wikipedia/commons/thumb/1/1c/Lemon_meringue_pie.jpg/800px-Lemon_meringue_pie.jpg"),
                item("pie-strawberry", "Strawberry Pie", "https://upload.wikimedia.org/wikipedia/commons/thumb/9/9a/Strawberry_pie.jpg/800px-Strawberry_pie.jpg"),
            ],
            created_at: Utc::now(),
        },
        TierList {
            id: "template-spiritual-elements".to_string(),
            name: "Spiritual Elements".to_string(),
            description: "Rank the classical elements".to_string(),
            icon: Some("✨".to_string()),
            tiers: default_tiers(),
            items: vec![
                item("spirit-fire", "Fire", "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6f/Fire_02.jpg/800px-Fire_02.jpg"),
                item("spirit-water", "Water", "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6e/Ocean_Water.jpg/800px-Ocean_Water.jpg"),
                item("spirit-earth", "Earth", "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4a/Soil_profile.jpg/800px-Soil_profile.jpg"),
                item("spirit-air", "Air", "https://upload.wikimedia.org/wikipedia/commons/thumb/7/7a/Clouds_over_the_Atlantic_Ocean.jpg/800px-Clouds_over_the_Atlantic_Ocean.jpg"),
                item("spirit-spirit", "Spirit", "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8a/Aurora_Borealis.jpg/800px-Aurora_Borealis.jpg"),
            ],
            created_at: Utc::now(),
        },
        TierList {
            id: "template-chemical-elements".to_string(),
            name: "Chemical Elements".to_string(),
            description: "Rank the elements".to_string(),
            icon: Some("⚛️".to_string()),
            tiers: default_tiers(),
            items: vec![
                item("element-gold", "Gold", "https://upload.wikimedia.org/wikipedia/commons/thumb/d/d7/Gold-crystals.jpg/800px-Gold-crystals.jpg"),
                item("element-silver", "Silver", "https://upload.wikimedia.org/wikipedia/commons/thumb/7/7e/Silver_crystal.jpg/800px-Silver_crystal.jpg"),
                item("element-iron", "Iron", "https://upload.wikimedia.org/wikipedia/commons/thumb/0/0c/Iron_electrolytic_and_1cm3_cube.jpg/800px-Iron_electrolytic_and_1cm3_cube.jpg"),
                item("element-copper", "Copper", "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5d/Copper_crystals.jpg/800px-Copper_crystals.jpg"),
                item("element-carbon", "Carbon", "https://upload.wikimedia.org/wikipedia/commons/thumb/6/6f/Graphite-233436.jpg/800px-Graphite-233436.jpg"),
                item("element-oxygen", "Oxygen", "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Liquid_oxygen_in_a_beaker_%28cropped_and_retouched%29.jpg/800px-Liquid_oxygen_in_a_beaker_%28cropped_and_retouched%29.jpg"),
                item("element-hydrogen", "Hydrogen", "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4a/Hydrogen_discharge_tube.jpg/800px-Hydrogen_discharge_tube.jpg"),
                item("element-sulfur", "Sulfur", "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4c/Sulfur-sample.jpg/800px-Sulfur-sample.jpg"),
            ],
            created_at: Utc::now(),
        },
    ]
}

/// Write the built-in catalog to its slot, only if the slot holds nothing
pub fn seed_templates_if_absent<B: StorageBackend>(store: &Store<B>) {
    if store.has(TEMPLATES_KEY) {
        return;
    }
    if let Err(e) = store.save(TEMPLATES_KEY, &builtin_templates()) {
        crate::logging::error(&format!("[STORE] failed to seed templates: {e}"));
    }
}

/// Read the seeded catalog; `[]` on any failure, never an error
pub fn get_templates<B: StorageBackend>(store: &Store<B>) -> Vec<TierList> {
    store.load(TEMPLATES_KEY).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryBackend;

    #[test]
    fn test_seed_then_get_returns_builtin_catalog() {
        let store = Store::new(MemoryBackend::default());
        seed_templates_if_absent(&store);
        let templates = get_templates(&store);
        assert_eq!(templates.len(), 3);
        assert!(templates
            .iter()
            .all(|t| t.items.iter().all(|i| i.tier.is_none())));
        assert_eq!(templates[0].id, "template-pies");
    }

    #[test]
    fn test_seeding_is_idempotent() {
        let store = Store::new(MemoryBackend::default());
        seed_templates_if_absent(&store);
        let first = get_templates(&store);
        seed_templates_if_absent(&store);
        let second = get_templates(&store);
        // Second seed must not overwrite (created_at would differ)
        assert_eq!(first, second);
    }

    #[test]
    fn test_corrupt_slot_yields_empty() {
        let store = Store::new(MemoryBackend::with_slot(TEMPLATES_KEY, "]["));
        assert!(get_templates(&store).is_empty());
    }

    #[test]
    fn test_default_tiers_exclude_f() {
        let tiers = default_tiers();
        assert_eq!(tiers.len(), 5);
        assert!(!tiers.iter().any(|t| t.name == "F"));
    }
}
