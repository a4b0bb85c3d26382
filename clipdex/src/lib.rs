//! Clipdex — query and mutation engine for a shared clipboard registry
//!
//! The registry is a JSON array of clipboard entries owned by an external
//! collector process. This crate loads it fresh on every query, filters and
//! ranks the entries, presents bounded previews to a launcher host, and
//! persists favorite toggles back to the same file without dropping fields
//! it does not own.
//!
//! # Architecture
//! - `models`: registry entry data model and text-eligibility policy
//! - `registry`: whole-file load/save with atomic rewrite
//! - `search`: case-insensitive substring filtering
//! - `ranking`: favorites-first recency ordering
//! - `preview`: label truncation and result capping
//! - `interface`: types shared with the launcher host
//! - `store`: the host API tying the pipeline together

pub mod interface;
pub mod models;
pub mod preview;
pub mod ranking;
pub mod registry;
pub mod search;
mod store;

pub use interface::*;
pub use models::RegistryEntry;
pub use registry::{RegistryError, RegistryFile, RegistryResult};
pub use store::RegistryStore;
