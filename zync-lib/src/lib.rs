//! Entry point for tools that consume a Zotero library: resolves where the
//! database lives and loads collections and items from it in one step.

pub mod error;
pub mod library;
pub mod settings;

pub use error::LibraryError;
pub use library::Library;
pub use settings::{resolve_database_path, Settings};
pub use zync_core::{Collection, ExtraTag, Item};
