//! Hero catalog

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Name shown when a hero id is not in the catalog.
pub const UNKNOWN_HERO: &str = "Unknown";

/// One playable hero as listed by the heroes endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hero {
    /// Numeric hero id used by match records.
    pub id: u32,
    /// Human-readable name, e.g. "Anti-Mage".
    pub localized_name: String,
}

/// Lookup from hero id to display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroCatalog {
    names: HashMap<u32, String>,
}

impl HeroCatalog {
    /// Builds a catalog from a list of heroes.
    pub fn new(heroes: impl IntoIterator<Item = Hero>) -> Self {
        Self {
            names: heroes
                .into_iter()
                .map(|hero| (hero.id, hero.localized_name))
                .collect(),
        }
    }

    /// Builds a catalog from the raw heroes response.
    ///
    /// Entries without a numeric `id` or a string `localized_name` are
    /// skipped; a non-array response yields an empty catalog.
    #[must_use]
    pub fn from_response(response: &Value) -> Self {
        let heroes = response
            .as_array()
            .into_iter()
            .flatten()
            .filter_map(|entry| {
                let id = u32::try_from(entry.get("id")?.as_u64()?).ok()?;
                let localized_name = entry.get("localized_name")?.as_str()?.to_string();
                Some(Hero { id, localized_name })
            });
        Self::new(heroes)
    }

    /// Looks up a hero name.
    #[must_use]
    pub fn name(&self, hero_id: u32) -> Option<&str> {
        self.names.get(&hero_id).map(String::as_str)
    }

    /// Name to display for a match's hero id: blank without an id,
    /// [`UNKNOWN_HERO`] when the id is not in the catalog.
    #[must_use]
    pub fn display_name(&self, hero_id: Option<u32>) -> &str {
        hero_id.map_or("", |id| self.name(id).unwrap_or(UNKNOWN_HERO))
    }

    /// Number of heroes in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the catalog has no heroes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_response_skips_malformed_entries() {
        let catalog = HeroCatalog::from_response(&json!([
            { "id": 1, "name": "npc_dota_hero_antimage", "localized_name": "Anti-Mage" },
            { "id": 2, "localized_name": "Axe" },
            { "id": "3", "localized_name": "Bane" },
            { "localized_name": "Nobody" }
        ]));

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.name(1), Some("Anti-Mage"));
        assert_eq!(catalog.name(2), Some("Axe"));
        assert_eq!(catalog.name(3), None);
    }

    #[test]
    fn test_non_array_response_is_empty() {
        assert!(HeroCatalog::from_response(&json!({ "error": "rate limited" })).is_empty());
    }

    #[test]
    fn test_display_name_sentinels() {
        let catalog = HeroCatalog::new([Hero {
            id: 8,
            localized_name: "Juggernaut".to_string(),
        }]);

        assert_eq!(catalog.display_name(Some(8)), "Juggernaut");
        assert_eq!(catalog.display_name(Some(999)), UNKNOWN_HERO);
        assert_eq!(catalog.display_name(None), "");
    }
}
