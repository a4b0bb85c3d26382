//! Registry entry data model
//!
//! Mirrors the JSON objects the external clipboard collector writes into the
//! registry file. The collector and this engine share that file, so the model
//! preserves every key it does not understand and only adds keys it owns.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mimetypes treated as plain text besides the `text/` tree.
static PLAIN_TEXT_ALIASES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "application/json",
        "application/xml",
        "application/x-sh",
        "application/javascript",
    ]
    .into_iter()
    .collect()
});

/// One record of the shared clipboard registry.
///
/// `contents` and `favorite` are always written back; `mimetype` and `used`
/// are only written when the collector wrote them in the first place, so a
/// toggle does not change which keys an entry carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryEntry {
    /// Text payload. Identity for mutation purposes — position in the file
    /// may shift between a render and the activation that refers to it.
    #[serde(default)]
    pub contents: String,
    /// User-pinned flag, the only field this engine ever mutates.
    #[serde(default)]
    pub favorite: bool,
    /// Payload classification; absent means plain text (older collectors
    /// never wrote it).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
    /// Last-used epoch stamp written by the collector. Never fabricated or
    /// updated here; only read for ordering.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<f64>,
    /// Collector-owned keys this engine does not understand, round-tripped
    /// verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RegistryEntry {
    /// Last-used stamp for ranking; a missing value sorts as oldest.
    pub fn last_used(&self) -> f64 {
        self.used.unwrap_or(0.0)
    }

    /// Whether the payload is displayable text.
    ///
    /// Empty/absent mimetypes count as text for compatibility with
    /// collectors that never classify entries.
    pub fn is_textual(&self) -> bool {
        match self.mimetype.as_deref() {
            None | Some("") => true,
            Some(mime) => mime.starts_with("text/") || PLAIN_TEXT_ALIASES.contains(mime),
        }
    }
}
