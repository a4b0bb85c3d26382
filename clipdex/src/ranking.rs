//! Two-tier recency ranking
//!
//! Favorites always sort ahead of regular entries: a pin with a stale
//! `used` stamp still beats a brand-new unpinned entry. Inside each tier
//! the most recently used entry comes first. The sort is stable, so entries
//! with colliding stamps (common for bulk-imported history) keep their
//! on-disk relative order.

use crate::models::RegistryEntry;

/// Order entries in place: favorites first, then by `used` descending.
pub fn rank_entries(entries: &mut [RegistryEntry]) {
    entries.sort_by(|a, b| {
        b.favorite
            .cmp(&a.favorite)
            .then_with(|| b.last_used().total_cmp(&a.last_used()))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(contents: &str, favorite: bool, used: Option<f64>) -> RegistryEntry {
        RegistryEntry {
            contents: contents.to_string(),
            favorite,
            used,
            ..Default::default()
        }
    }

    fn contents_of(entries: &[RegistryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.contents.as_str()).collect()
    }

    #[test]
    fn test_favorite_beats_newer_regular() {
        let mut entries = vec![
            entry("fresh", false, Some(5000.0)),
            entry("pinned", true, Some(1.0)),
        ];
        rank_entries(&mut entries);
        assert_eq!(contents_of(&entries), vec!["pinned", "fresh"]);
    }

    #[test]
    fn test_used_descending_within_each_tier() {
        let mut entries = vec![
            entry("old fav", true, Some(10.0)),
            entry("new fav", true, Some(20.0)),
            entry("old", false, Some(10.0)),
            entry("new", false, Some(20.0)),
        ];
        rank_entries(&mut entries);
        assert_eq!(
            contents_of(&entries),
            vec!["new fav", "old fav", "new", "old"]
        );
    }

    #[test]
    fn test_equal_stamps_keep_input_order() {
        let mut entries = vec![
            entry("first", false, Some(7.0)),
            entry("second", false, Some(7.0)),
            entry("third", false, Some(7.0)),
        ];
        rank_entries(&mut entries);
        assert_eq!(contents_of(&entries), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_missing_stamp_sorts_last_in_tier() {
        let mut entries = vec![
            entry("unstamped", false, None),
            entry("stamped", false, Some(1.0)),
        ];
        rank_entries(&mut entries);
        assert_eq!(contents_of(&entries), vec!["stamped", "unstamped"]);
    }
}
