//! RegistryStore — the engine's host API
//!
//! One query is one fresh load of the registry pushed through the pure
//! filter → rank → present pipeline. There is no cross-query cache: the view
//! always reflects the current file, including entries the external
//! collector appended between keystrokes, at the cost of re-parsing on every
//! keystroke-triggered query.

use tracing::{debug, warn};

use crate::interface::{ActivationOutcome, DisplayItem, ItemAction, QueryPreferences};
use crate::preview::present;
use crate::ranking::rank_entries;
use crate::registry::{RegistryError, RegistryFile, RegistryResult};
use crate::search::filter_entries;

pub struct RegistryStore {
    registry: RegistryFile,
}

impl RegistryStore {
    /// Store over the collector's default registry location.
    pub fn open() -> RegistryResult<Self> {
        Ok(Self {
            registry: RegistryFile::locate()?,
        })
    }

    /// Store over an explicit registry (tests, alternate hosts).
    pub fn with_registry(registry: RegistryFile) -> Self {
        Self { registry }
    }

    /// Answer one query with ranked, truncated, capped display items.
    ///
    /// Never fails: any load error collapses into a single explanatory,
    /// non-actionable row instead of propagating to the host.
    pub fn handle_query(&self, query: &str, prefs: &QueryPreferences) -> Vec<DisplayItem> {
        let entries = match self.registry.load() {
            Ok(entries) => entries,
            Err(err) => {
                debug!(%err, "registry unavailable");
                return vec![unavailable_row(&err)];
            }
        };

        let mut matched = filter_entries(entries, query);
        rank_entries(&mut matched);
        debug!(query, matched = matched.len(), "query handled");
        present(&matched, prefs.max_results)
    }

    /// Dispatch an activation the host reported for a rendered item.
    ///
    /// A favorite toggle answers with a refresh of the same query so the
    /// list re-ranks under the new partition membership.
    pub fn handle_activate(&self, query: &str, action: &ItemAction) -> ActivationOutcome {
        match action {
            ItemAction::CopyText { text } => ActivationOutcome::CopyToClipboard(text.clone()),
            ItemAction::ToggleFavorite { contents } => {
                if let Err(err) = self.toggle_favorite(contents) {
                    warn!(%err, "favorite toggle failed");
                }
                ActivationOutcome::RefreshQuery(query.to_string())
            }
            ItemAction::Nothing => ActivationOutcome::Nothing,
        }
    }

    /// Flip the favorite flag of the first entry whose contents equal
    /// `identity`, then rewrite the registry.
    ///
    /// The rendered list is a stale snapshot by the time an activation
    /// arrives, so the target is re-resolved by content on freshly loaded
    /// data; positions are meaningless across loads. An identity with no
    /// match is a no-op — the collector may have evicted the entry in
    /// between.
    pub fn toggle_favorite(&self, identity: &str) -> RegistryResult<()> {
        let mut entries = self.registry.load()?;

        let Some(entry) = entries.iter_mut().find(|e| e.contents == identity) else {
            debug!("toggle target no longer in registry");
            return Ok(());
        };
        entry.favorite = !entry.favorite;

        // Best effort: the host's list was rendered from the pre-mutation
        // snapshot either way, and the next query re-loads from disk.
        if let Err(err) = self.registry.save(&entries) {
            warn!(%err, "could not persist favorite flag");
        }
        Ok(())
    }
}

fn unavailable_row(err: &RegistryError) -> DisplayItem {
    let caption = match err {
        RegistryError::NotFound => {
            "No registry file found — is the clipboard collector enabled?"
        }
        RegistryError::Malformed(_) => "The registry file could not be parsed",
        RegistryError::Io(_) => "The registry file could not be read",
        RegistryError::NoHome => "The home directory could not be determined",
    };

    DisplayItem {
        label: "Clipboard history unavailable".to_string(),
        caption: caption.to_string(),
        on_enter: ItemAction::Nothing,
        on_alt_enter: None,
    }
}
