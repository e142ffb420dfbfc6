//! Cache key derivation.
//!
//! Keys are globally unique per (resource type, id, tier) triple. The rendered
//! and raw tiers for the same resource use distinct namespaces so a detail
//! page and its backing data can be checked independently.

use crate::resource::ResourceType;

/// Root path for JSON document operations.
pub const ROOT_PATH: &str = ".";

/// Returns the rendered-artifact key for a collection root page.
pub fn homepage_key(resource: ResourceType) -> String {
    format!("{}Homepage", resource.as_str())
}

/// Returns the rendered-artifact key for a detail page.
pub fn page_key(resource: ResourceType, id: u64) -> String {
    format!("{}Page:{}", resource.as_str(), id)
}

/// Returns the raw-payload key for a detail page (JSON document tier).
pub fn data_key(resource: ResourceType, id: u64) -> String {
    format!("{}Data:{}", resource.as_str(), id)
}

/// Returns the fixed key holding the recency history array.
///
/// Only pokemon accesses are history-tracked, so there is a single list.
pub fn history_key() -> &'static str {
    "pokemonHistory"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_homepage_key() {
        assert_eq!(homepage_key(ResourceType::Pokemon), "pokemonHomepage");
        assert_eq!(homepage_key(ResourceType::Move), "moveHomepage");
        assert_eq!(homepage_key(ResourceType::Item), "itemHomepage");
    }

    #[test]
    fn test_page_key() {
        assert_eq!(page_key(ResourceType::Pokemon, 25), "pokemonPage:25");
        assert_eq!(page_key(ResourceType::Move, 9001), "movePage:9001");
    }

    #[test]
    fn test_data_key() {
        assert_eq!(data_key(ResourceType::Pokemon, 25), "pokemonData:25");
        assert_eq!(data_key(ResourceType::Item, 4), "itemData:4");
    }

    #[test]
    fn test_tiers_never_collide() {
        let id = 7;
        let keys = [
            homepage_key(ResourceType::Pokemon),
            page_key(ResourceType::Pokemon, id),
            data_key(ResourceType::Pokemon, id),
            history_key().to_string(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in keys.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
