//! Query filtering over registry entries
//!
//! Pure: the output depends only on the entries and the query. Non-textual
//! entries never reach the result list — only textual entries are
//! favorite-toggleable, so an image row would carry an action that can
//! never resolve.

use crate::models::RegistryEntry;

/// Select entries eligible for display whose contents contain the query.
///
/// Matching is case-insensitive substring containment after trimming the
/// query's surrounding whitespace; an empty query passes every eligible
/// entry through. Input order is preserved.
pub fn filter_entries(entries: Vec<RegistryEntry>, query: &str) -> Vec<RegistryEntry> {
    let needle = query.trim().to_lowercase();
    entries
        .into_iter()
        .filter(|entry| entry.is_textual())
        .filter(|entry| needle.is_empty() || entry.contents.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(contents: &str) -> RegistryEntry {
        RegistryEntry {
            contents: contents.to_string(),
            ..Default::default()
        }
    }

    fn contents_of(entries: &[RegistryEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.contents.as_str()).collect()
    }

    #[test]
    fn test_empty_query_passes_everything_in_order() {
        let entries = vec![text("alpha"), text("beta"), text("gamma")];
        let filtered = filter_entries(entries, "");
        assert_eq!(contents_of(&filtered), vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let entries = vec![text("Hello World"), text("goodbye"), text("HELLOES")];
        let filtered = filter_entries(entries, "hello");
        assert_eq!(contents_of(&filtered), vec!["Hello World", "HELLOES"]);
    }

    #[test]
    fn test_query_whitespace_is_trimmed() {
        let entries = vec![text("needle in a haystack")];
        let filtered = filter_entries(entries, "  needle ");
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_whitespace_only_query_is_empty_query() {
        let entries = vec![text("a"), text("b")];
        assert_eq!(filter_entries(entries, "   ").len(), 2);
    }

    #[test]
    fn test_non_textual_entries_are_excluded() {
        let image = RegistryEntry {
            contents: "whatever the collector stored".to_string(),
            mimetype: Some("image/png".to_string()),
            ..Default::default()
        };
        let entries = vec![text("whatever else"), image];
        let filtered = filter_entries(entries, "whatever");
        assert_eq!(contents_of(&filtered), vec!["whatever else"]);
    }
}
