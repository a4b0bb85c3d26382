//! Presentation: label truncation, emphasis, result capping
//!
//! Truncation is display-only. The copy action always carries the full
//! original contents, so a six-line entry shows three lines in the list but
//! pastes all six.

use crate::interface::{DisplayItem, ItemAction};
use crate::models::RegistryEntry;

/// Labels longer than this many lines get cut down.
const MAX_LABEL_LINES: usize = 4;
/// Lines kept when a label is cut.
const KEPT_LABEL_LINES: usize = 3;
/// Synthetic final line appended to truncated labels.
const ELLIPSIS_LINE: &str = "...";
/// Emphasis prefix for favorite entries.
const FAVORITE_MARK: &str = "★ ";
/// Fixed caption under every entry row.
const ENTRY_CAPTION: &str = "Enter to copy, Alt+Enter to toggle favorite";

/// Bound multi-line contents to a short preview.
///
/// Contents of up to four lines pass through unmodified; anything longer
/// keeps the first three lines plus an ellipsis line. Applying this to its
/// own output changes nothing, since a truncated label is already within
/// the bound.
pub fn truncate_label(contents: &str) -> String {
    let lines: Vec<&str> = contents.split('\n').collect();
    if lines.len() <= MAX_LABEL_LINES {
        return contents.to_string();
    }

    let mut kept = lines[..KEPT_LABEL_LINES].to_vec();
    kept.push(ELLIPSIS_LINE);
    kept.join("\n")
}

/// Map already-ranked entries to display items, at most `limit` of them.
///
/// The cap is applied after ranking, so trimming always drops the
/// lowest-priority tail.
pub fn present(entries: &[RegistryEntry], limit: usize) -> Vec<DisplayItem> {
    entries.iter().take(limit).map(display_item).collect()
}

fn display_item(entry: &RegistryEntry) -> DisplayItem {
    let mut label = truncate_label(&entry.contents);
    if entry.favorite {
        label.insert_str(0, FAVORITE_MARK);
    }

    DisplayItem {
        label,
        caption: ENTRY_CAPTION.to_string(),
        on_enter: ItemAction::CopyText {
            text: entry.contents.clone(),
        },
        on_alt_enter: Some(ItemAction::ToggleFavorite {
            contents: entry.contents.clone(),
        }),
    }
}
