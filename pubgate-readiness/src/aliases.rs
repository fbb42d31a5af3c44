//! Versioned category alias table
//!
//! Consumers pinned to an older score layout expect category slots that no
//! longer exist as categories of their own. Each alias maps an old key onto a
//! stable `CategoryId` and records the layout version that introduced it.

use crate::types::{CategoryId, CategoryScore};
use serde::Serialize;
use std::collections::BTreeMap;

/// Current score layout version
pub const CURRENT_LAYOUT_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryAlias {
    /// Layout version from which the alias slot is emitted
    pub since_version: u32,
    pub alias: &'static str,
    pub target: CategoryId,
}

pub const CATEGORY_ALIASES: &[CategoryAlias] = &[CategoryAlias {
    since_version: 1,
    alias: "mobile",
    target: CategoryId::Social,
}];

/// Resolve a category key, canonical or aliased
pub fn resolve_category_key(key: &str) -> Option<CategoryId> {
    let key = key.trim().to_ascii_lowercase();
    CategoryId::ALL
        .iter()
        .copied()
        .find(|c| c.key() == key)
        .or_else(|| CATEGORY_ALIASES.iter().find(|a| a.alias == key).map(|a| a.target))
}

/// One slot of the legacy keyed layout
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySlot {
    pub passed: usize,
    pub total: usize,
    pub percentage: u8,
    /// Canonical category this slot was filled from
    pub source: CategoryId,
}

/// Keyed category map for a consumer pinned to `version`: every canonical
/// category plus each alias introduced at or before that version.
pub fn legacy_category_map(scores: &[CategoryScore], version: u32) -> BTreeMap<String, LegacySlot> {
    let slot = |score: &CategoryScore| LegacySlot {
        passed: score.passed,
        total: score.total,
        percentage: score.percentage,
        source: score.category,
    };

    let mut map: BTreeMap<String, LegacySlot> = scores
        .iter()
        .map(|score| (score.category.key().to_string(), slot(score)))
        .collect();

    for alias in CATEGORY_ALIASES.iter().filter(|a| a.since_version <= version) {
        if let Some(score) = scores.iter().find(|s| s.category == alias.target) {
            map.insert(alias.alias.to_string(), slot(score));
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(category: CategoryId, percentage: u8) -> CategoryScore {
        CategoryScore {
            category,
            passed: 1,
            total: 2,
            percentage,
            max_score: 10,
            items: Vec::new(),
        }
    }

    #[test]
    fn test_resolve_canonical_and_alias() {
        assert_eq!(resolve_category_key("meta_tags"), Some(CategoryId::MetaTags));
        assert_eq!(resolve_category_key("Mobile"), Some(CategoryId::Social));
        assert_eq!(resolve_category_key("speed"), None);
    }

    #[test]
    fn test_mobile_slot_mirrors_social() {
        let scores = vec![score(CategoryId::Content, 40), score(CategoryId::Social, 75)];
        let map = legacy_category_map(&scores, CURRENT_LAYOUT_VERSION);
        assert_eq!(map.len(), 3);
        let mobile = &map["mobile"];
        assert_eq!(mobile.percentage, 75);
        assert_eq!(mobile.source, CategoryId::Social);
    }

    #[test]
    fn test_version_zero_has_no_alias_slots() {
        let scores = vec![score(CategoryId::Social, 75)];
        let map = legacy_category_map(&scores, 0);
        assert!(!map.contains_key("mobile"));
        assert!(map.contains_key("social"));
    }
}
