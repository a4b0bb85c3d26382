//! Result presentation for the launcher host
//!
//! Maps finder output to a bounded list of rows and collapses every failure
//! into an explanatory, non-actionable row — the host never sees an error.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::finder::{FindError, Finder};
use crate::query::parse_query;

/// Result rows shown for one query.
const MAX_RESULTS: usize = 15;

fn default_search_path() -> String {
    "~".to_string()
}

/// Per-query settings supplied by the host's preference store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchPreferences {
    /// Directory searched when the query names none, `~`-expandable.
    #[serde(default = "default_search_path")]
    pub search_path: String,
}

impl Default for SearchPreferences {
    fn default() -> Self {
        Self {
            search_path: default_search_path(),
        }
    }
}

/// Row kind; the host maps it to an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    File,
    Dir,
    Message,
}

/// What activating a row does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
    /// Open the path with the desktop's default handler.
    Open(std::path::PathBuf),
    /// Inert row.
    Nothing,
}

/// One rendered result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileItem {
    pub kind: ItemKind,
    pub label: String,
    pub caption: String,
    pub on_enter: FileAction,
}

impl FileItem {
    fn message(label: &str, caption: &str) -> Self {
        Self {
            kind: ItemKind::Message,
            label: label.to_string(),
            caption: caption.to_string(),
            on_enter: FileAction::Nothing,
        }
    }
}

/// Answer one query with a bounded list of file rows.
pub fn handle_query(
    finder: &impl Finder,
    query: &str,
    prefs: &SearchPreferences,
) -> Vec<FileItem> {
    if query.trim().is_empty() {
        return vec![prompt_row()];
    }

    let parsed = parse_query(query, &prefs.search_path);
    if parsed.term.is_empty() {
        return vec![prompt_row()];
    }

    match finder.find(&parsed.term, &parsed.dir) {
        Ok(paths) if paths.is_empty() => vec![no_results_row()],
        Ok(paths) => paths.iter().take(MAX_RESULTS).map(|p| file_row(p)).collect(),
        Err(FindError::FinderMissing) => vec![FileItem::message(
            "`fd` or `fdfind` command not found",
            "Please install it to search files",
        )],
        Err(err) => {
            debug!(%err, "finder failed");
            vec![no_results_row()]
        }
    }
}

fn prompt_row() -> FileItem {
    FileItem::message(
        "Enter search query",
        "Type a file name, optionally followed by a directory",
    )
}

fn no_results_row() -> FileItem {
    FileItem::message(
        "No results found",
        "No files or folders found matching your query",
    )
}

fn file_row(path: &Path) -> FileItem {
    let kind = if path.is_dir() {
        ItemKind::Dir
    } else {
        ItemKind::File
    };
    let label = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    FileItem {
        kind,
        label,
        caption: path.display().to_string(),
        on_enter: FileAction::Open(path.to_path_buf()),
    }
}
