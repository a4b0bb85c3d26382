//! Findfile — file-search query handler for a launcher host
//!
//! Turns a free-form query into an invocation of the external `fd` finder
//! and renders its output as a bounded list of result rows. The finder
//! binary is an opaque collaborator: it gets a term and a directory and
//! answers with newline-separated paths.
//!
//! # Architecture
//! - `query`: splits a query into search term and search directory
//! - `finder`: the `Finder` seam and the `fd`/`fdfind` subprocess impl
//! - `present`: row mapping, capping, and explanatory rows

pub mod finder;
pub mod present;
pub mod query;

pub use finder::{FdFinder, FindError, Finder};
pub use present::{handle_query, FileAction, FileItem, ItemKind, SearchPreferences};
pub use query::{parse_query, ParsedQuery};
