//! Whole-file persistence for the shared clipboard registry
//!
//! The registry is a single UTF-8 JSON array owned by an external collector
//! process. Every read parses the whole file and every write rewrites it in
//! full; the whole-file rewrite is the unit of durability. There is no lock
//! against the collector — the only concurrent mutator is the same desktop
//! session, and last-writer-wins is accepted.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use crate::models::RegistryEntry;

/// Registry location relative to the user's home directory. The collector
/// hard-codes `~/.cache`, so XDG cache overrides are deliberately ignored.
const REGISTRY_RELATIVE_PATH: &str = ".cache/clipboard-indicator@tudmotu.com/registry.txt";

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("registry file not found")]
    NotFound,
    #[error("registry is not a JSON entry list: {0}")]
    Malformed(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("home directory could not be determined")]
    NoHome,
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// Handle on the registry file; owns path resolution and the load/save pair.
pub struct RegistryFile {
    path: PathBuf,
}

impl RegistryFile {
    /// Registry at an explicit path (tests, alternate hosts).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the collector's fixed home-relative registry path.
    pub fn locate() -> RegistryResult<Self> {
        let home = dirs::home_dir().ok_or(RegistryError::NoHome)?;
        Ok(Self::new(home.join(REGISTRY_RELATIVE_PATH)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the full entry sequence.
    pub fn load(&self) -> RegistryResult<Vec<RegistryEntry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                return Err(RegistryError::NotFound)
            }
            Err(err) => return Err(err.into()),
        };

        let entries: Vec<RegistryEntry> =
            serde_json::from_str(&raw).map_err(|err| RegistryError::Malformed(err.to_string()))?;
        debug!(count = entries.len(), "registry loaded");
        Ok(entries)
    }

    /// Serialize the full entry sequence back over the registry.
    ///
    /// The payload lands in a sibling temp file first and is renamed into
    /// place, so a failed write leaves the previous registry intact instead
    /// of a truncated one.
    pub fn save(&self, entries: &[RegistryEntry]) -> RegistryResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }

        let payload =
            serde_json::to_vec(entries).map_err(|err| RegistryError::Io(io::Error::other(err)))?;

        let tmp = self.path.with_extension("txt.tmp");
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &self.path)?;
        debug!(count = entries.len(), "registry rewritten");
        Ok(())
    }
}
