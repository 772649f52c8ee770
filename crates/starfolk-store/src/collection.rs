//! Ordered collection of character records and the read-only queries
//! the API serves from it.

use serde::{Deserialize, Serialize};

use crate::record::CharacterRecord;

/// Characters in data file order.
///
/// A collection is never mutated once built. Reloading produces a new
/// collection instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CharacterCollection(Vec<CharacterRecord>);

impl CharacterCollection {
    /// Build a collection from records, keeping their order.
    pub const fn new(records: Vec<CharacterRecord>) -> Self {
        Self(records)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over records in order.
    pub fn iter(&self) -> std::slice::Iter<'_, CharacterRecord> {
        self.0.iter()
    }

    /// Records whose name contains `query`, ignoring case.
    ///
    /// The query is trimmed and lowercased first. An empty query matches
    /// every record.
    pub fn search(&self, query: &str) -> Vec<&CharacterRecord> {
        let needle = query.trim().to_lowercase();
        self.0
            .iter()
            .filter(|record| record.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Records marked `"featured": true`.
    pub fn featured(&self) -> Vec<&CharacterRecord> {
        self.0.iter().filter(|record| record.is_featured()).collect()
    }

    /// The first record whose `id` equals `id`.
    pub fn find_by_id(&self, id: i64) -> Option<&CharacterRecord> {
        self.0.iter().find(|record| record.id() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CharacterCollection {
        serde_json::from_value(serde_json::json!([
            { "id": 1, "name": "Ari Stormveil", "featured": true },
            { "id": 2, "name": "Bo Quickshadow", "featured": false },
            { "id": 3, "name": "Cass Stormborn" },
            { "id": 4, "featured": true, "role": "navigator" },
        ]))
        .unwrap_or_default()
    }

    fn ids(records: &[&CharacterRecord]) -> Vec<Option<i64>> {
        records.iter().map(|r| r.id()).collect()
    }

    #[test]
    fn empty_search_returns_everything_in_order() {
        let c = sample();
        assert_eq!(ids(&c.search("")), vec![Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(ids(&c.search("   ")), vec![Some(1), Some(2), Some(3), Some(4)]);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let c = sample();
        assert_eq!(ids(&c.search("storm")), vec![Some(1), Some(3)]);
        assert_eq!(ids(&c.search("  STORMV ")), vec![Some(1)]);
        assert_eq!(ids(&c.search("qUiCkShAdOw")), vec![Some(2)]);
    }

    #[test]
    fn search_without_match_is_empty() {
        assert!(sample().search("zephyr").is_empty());
    }

    #[test]
    fn nameless_records_only_match_empty_query() {
        let c = sample();
        assert!(!ids(&c.search("a")).contains(&Some(4)));
        assert!(ids(&c.search("")).contains(&Some(4)));
    }

    #[test]
    fn featured_keeps_order_and_skips_non_true() {
        assert_eq!(ids(&sample().featured()), vec![Some(1), Some(4)]);
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let c: CharacterCollection = serde_json::from_value(serde_json::json!([
            { "id": 5, "name": "first" },
            { "id": 5, "name": "second" },
        ]))
        .unwrap_or_default();
        assert_eq!(c.find_by_id(5).map(CharacterRecord::name), Some("first"));
        assert!(c.find_by_id(6).is_none());
    }

    #[test]
    fn empty_collection_answers_nothing() {
        let c = CharacterCollection::default();
        assert!(c.is_empty());
        assert!(c.search("").is_empty());
        assert!(c.featured().is_empty());
        assert!(c.find_by_id(1).is_none());
    }
}
