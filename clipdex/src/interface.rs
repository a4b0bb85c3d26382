//! Host-facing interface types
//!
//! The launcher host renders `DisplayItem`s, reports the activated item's
//! action back, and acts on the returned outcome. These types are the whole
//! contract between the host and the engine.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// PREFERENCES
// ─────────────────────────────────────────────────────────────────────────────

fn default_max_results() -> usize {
    10
}

/// Per-query settings supplied by the host's preference store. Passed into
/// every call so the pipeline carries no ambient state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryPreferences {
    /// Maximum number of rows returned for one query.
    #[serde(default = "default_max_results")]
    pub max_results: usize,
}

impl Default for QueryPreferences {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// DISPLAY ITEMS
// ─────────────────────────────────────────────────────────────────────────────

/// Action attached to a display item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemAction {
    /// Put the full original contents on the system clipboard.
    CopyText { text: String },
    /// Flip the favorite flag of the entry with exactly these contents.
    ToggleFavorite { contents: String },
    /// Inert row, nothing to do on activation.
    Nothing,
}

/// One rendered result row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    /// Bounded preview of the entry, favorite marker included.
    pub label: String,
    /// Fixed descriptive line under the label.
    pub caption: String,
    /// Primary activation.
    pub on_enter: ItemAction,
    /// Secondary activation, when the row supports one.
    pub on_alt_enter: Option<ItemAction>,
}

// ─────────────────────────────────────────────────────────────────────────────
// ACTIVATION
// ─────────────────────────────────────────────────────────────────────────────

/// What the host should do after dispatching an activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// Place the string on the system clipboard.
    CopyToClipboard(String),
    /// Re-issue the given query so the list reflects the mutation.
    RefreshQuery(String),
    /// Nothing to do.
    Nothing,
}
