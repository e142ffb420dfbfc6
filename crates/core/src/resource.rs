//! Resource model for the upstream provider.

use serde::{Deserialize, Serialize};

/// The categories of upstream data served by the cache layer.
///
/// The type determines the cache key namespace and whether detail-level
/// accesses are recorded in the recency history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceType {
    Pokemon,
    Move,
    Item,
}

impl ResourceType {
    /// URL path segment and cache key prefix for this resource type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Pokemon => "pokemon",
            ResourceType::Move => "move",
            ResourceType::Item => "item",
        }
    }

    /// Whether detail-level accesses to this type are recorded in the
    /// recency history. Only pokemon accesses are tracked.
    pub fn history_tracked(&self) -> bool {
        matches!(self, ResourceType::Pokemon)
    }

    /// Human-readable plural label, used for page titles.
    pub fn label(&self) -> &'static str {
        match self {
            ResourceType::Pokemon => "Pokemon",
            ResourceType::Move => "Moves",
            ResourceType::Item => "Items",
        }
    }
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw structured payload for one resource, as returned by the upstream
/// provider. Immutable once fetched.
///
/// Only `id` and `name` are given structure; the rest of the payload is
/// carried through untouched so the cached document is a full replacement
/// for the upstream response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub id: u64,
    pub name: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One entry of a collection listing: the upstream's `results` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSummary {
    pub name: String,
    pub url: String,
}

/// Parses a detail-page identifier, accepting only positive integers.
///
/// This runs before any store or upstream call; `"0"`, `"-5"`, and `"abc"`
/// are all rejected.
pub fn parse_resource_id(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|id| *id > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_type_as_str() {
        assert_eq!(ResourceType::Pokemon.as_str(), "pokemon");
        assert_eq!(ResourceType::Move.as_str(), "move");
        assert_eq!(ResourceType::Item.as_str(), "item");
    }

    #[test]
    fn test_only_pokemon_is_history_tracked() {
        assert!(ResourceType::Pokemon.history_tracked());
        assert!(!ResourceType::Move.history_tracked());
        assert!(!ResourceType::Item.history_tracked());
    }

    #[test]
    fn test_parse_resource_id_valid() {
        assert_eq!(parse_resource_id("1"), Some(1));
        assert_eq!(parse_resource_id("9001"), Some(9001));
    }

    #[test]
    fn test_parse_resource_id_rejects_zero() {
        assert_eq!(parse_resource_id("0"), None);
    }

    #[test]
    fn test_parse_resource_id_rejects_negative() {
        assert_eq!(parse_resource_id("-5"), None);
    }

    #[test]
    fn test_parse_resource_id_rejects_non_numeric() {
        assert_eq!(parse_resource_id("abc"), None);
        assert_eq!(parse_resource_id(""), None);
        assert_eq!(parse_resource_id("1.5"), None);
    }

    #[test]
    fn test_record_round_trips_full_payload() {
        let json = serde_json::json!({
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "types": [{"slot": 1, "type": {"name": "electric"}}]
        });

        let record: ResourceRecord = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(record.id, 25);
        assert_eq!(record.name, "pikachu");

        // Unknown fields survive the round trip
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back, json);
    }
}
