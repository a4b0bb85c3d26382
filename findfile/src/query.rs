//! Query splitting: trailing directory detection
//!
//! A query may end with a directory ("report ~/Documents"), which scopes
//! the search. Trailing word-runs are probed shortest-first, so the last
//! word alone wins over longer runs when both name directories. A query
//! with no directory searches the preference-supplied path.

use std::path::PathBuf;

/// A query split into its search term and search root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub term: String,
    pub dir: PathBuf,
}

/// Expand a leading `~` the way a shell would.
fn expand(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Split `query` into a term and an existing directory.
pub fn parse_query(query: &str, default_dir: &str) -> ParsedQuery {
    let words: Vec<&str> = query.split(' ').collect();

    for split in (0..words.len()).rev() {
        let candidate = expand(&words[split..].join(" "));
        if candidate.is_dir() {
            return ParsedQuery {
                term: words[..split].join(" "),
                dir: candidate,
            };
        }
    }

    ParsedQuery {
        term: query.to_string(),
        dir: expand(default_dir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_plain_term_uses_default_dir() {
        let dir = TempDir::new().unwrap();
        let default = dir.path().to_string_lossy().into_owned();

        let parsed = parse_query("report draft", &default);
        assert_eq!(parsed.term, "report draft");
        assert_eq!(parsed.dir, dir.path());
    }

    #[test]
    fn test_trailing_directory_scopes_the_search() {
        let dir = TempDir::new().unwrap();
        let query = format!("report {}", dir.path().display());

        let parsed = parse_query(&query, "/nonexistent-default");
        assert_eq!(parsed.term, "report");
        assert_eq!(parsed.dir, dir.path());
    }

    #[test]
    fn test_directory_with_spaces_is_detected() {
        let dir = TempDir::new().unwrap();
        let spaced = dir.path().join("My Documents");
        std::fs::create_dir(&spaced).unwrap();
        let query = format!("notes {}", spaced.display());

        let parsed = parse_query(&query, "/nonexistent-default");
        assert_eq!(parsed.term, "notes");
        assert_eq!(parsed.dir, spaced);
    }

    #[test]
    fn test_nonexistent_trailing_path_stays_part_of_the_term() {
        let parsed = parse_query("report /no/such/dir", "/nonexistent-default");
        assert_eq!(parsed.term, "report /no/such/dir");
        assert_eq!(parsed.dir, PathBuf::from("/nonexistent-default"));
    }

    #[test]
    fn test_whole_query_can_be_a_directory() {
        let dir = TempDir::new().unwrap();
        let parsed = parse_query(&dir.path().to_string_lossy(), "/nonexistent-default");
        assert_eq!(parsed.term, "");
        assert_eq!(parsed.dir, dir.path());
    }
}
