//! The finder seam and its subprocess implementation
//!
//! Query handling talks to a `Finder` trait so tests can substitute a stub;
//! the production impl shells out to `fd`. Debian-family distributions ship
//! the binary as `fdfind`, so that name is probed first.

use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Binaries probed in order.
const FINDER_BINARIES: &[&str] = &["fdfind", "fd"];

#[derive(Error, Debug)]
pub enum FindError {
    /// Neither `fdfind` nor `fd` is installed.
    #[error("`fd` or `fdfind` command not found")]
    FinderMissing,
    /// The finder ran but exited with a failure status.
    #[error("finder exited with {0}")]
    Failed(std::process::ExitStatus),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Seam between query handling and the external finder binary.
pub trait Finder {
    /// Run one search and return the matching paths, most relevant first.
    fn find(&self, term: &str, dir: &Path) -> Result<Vec<PathBuf>, FindError>;
}

/// Production finder: spawns `fdfind`, falling back to `fd`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FdFinder;

impl Finder for FdFinder {
    fn find(&self, term: &str, dir: &Path) -> Result<Vec<PathBuf>, FindError> {
        for binary in FINDER_BINARIES {
            let output = match Command::new(binary).arg(term).arg(dir).output() {
                Ok(output) => output,
                Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
                Err(err) => return Err(err.into()),
            };

            if !output.status.success() {
                return Err(FindError::Failed(output.status));
            }

            let stdout = String::from_utf8_lossy(&output.stdout);
            let paths: Vec<PathBuf> = stdout
                .lines()
                .filter(|line| !line.is_empty())
                .map(PathBuf::from)
                .collect();
            debug!(binary, matches = paths.len(), "finder run complete");
            return Ok(paths);
        }

        Err(FindError::FinderMissing)
    }
}
