use std::path::PathBuf;

use thiserror::Error;
use zync_db::LoadError;

/// Errors from locating or loading a Zotero library.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The database file does not exist.
    #[error("Zotero database not found: {}", .0.display())]
    DatabaseNotFound(PathBuf),

    /// Reading from the database failed.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// I/O error while reading or writing settings
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The settings file is not valid TOML
    #[error("Invalid settings: {0}")]
    Settings(#[from] toml::de::Error),
}
