//! Record types, name normalization, and collection path resolution for a
//! Zotero library.
//!
//! This crate has no database dependency. `zync-db` builds these records
//! from a Zotero SQLite file; frontends consume them through `zync-lib`.

pub mod error;
pub mod hierarchy;
pub mod normalize;
pub mod types;

pub use error::PathError;
pub use hierarchy::{resolve_full_path, update_full_paths};
pub use normalize::{normalize, strip_storage_prefix, title_case, NameRule};
pub use types::*;
