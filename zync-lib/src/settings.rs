//! Shared settings: where the Zotero database lives.
//!
//! The settings file is `~/.config/zync/settings.toml`:
//!
//! ```toml
//! [zotero]
//! database = "/home/me/Zotero/zotero.sqlite"
//! ```

use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LibraryError;

/// Parsed contents of `settings.toml`. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub zotero: ZoteroSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZoteroSettings {
    #[serde(default)]
    pub database: Option<PathBuf>,
}

impl Settings {
    pub fn parse(contents: &str) -> Result<Self, LibraryError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, LibraryError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Configured database path, ignoring empty values.
    pub fn database(&self) -> Option<&Path> {
        self.zotero
            .database
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
    }
}

/// Canonical path to the settings file: `~/.config/zync/settings.toml`.
pub fn settings_path() -> PathBuf {
    let config = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    config.join("zync").join("settings.toml")
}

/// Where Zotero keeps its database unless told otherwise: `~/Zotero/zotero.sqlite`.
pub fn default_database_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join("Zotero").join("zotero.sqlite")
}

/// Resolve the database path using a priority chain:
///
/// 1. Explicit override (if `Some`)
/// 2. `zotero.database` in `settings.toml`
/// 3. [`default_database_path`]
pub fn resolve_database_path(cli_override: Option<PathBuf>) -> PathBuf {
    let settings = match Settings::load_from(&settings_path()) {
        Ok(settings) => Some(settings),
        Err(LibraryError::Io(e)) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => {
            log::warn!("Ignoring {}: {e}", settings_path().display());
            None
        }
    };
    resolve_with(cli_override, settings.as_ref())
}

fn resolve_with(cli_override: Option<PathBuf>, settings: Option<&Settings>) -> PathBuf {
    if let Some(p) = cli_override {
        return p;
    }
    if let Some(p) = settings.and_then(Settings::database) {
        return p.to_path_buf();
    }
    default_database_path()
}

/// Save (or clear) the database path in `settings.toml`.
pub fn save_database_path(path: Option<&Path>) -> Result<(), LibraryError> {
    save_database_path_to(&settings_path(), path)
}

/// Save (or clear) the database path in the settings file at `settings`.
///
/// Only `zotero.database` changes; every other key is kept. A file that does
/// not parse is reported and left untouched.
pub fn save_database_path_to(settings: &Path, path: Option<&Path>) -> Result<(), LibraryError> {
    let mut doc = match std::fs::read_to_string(settings) {
        Ok(contents) => toml::from_str::<toml::Table>(&contents)?,
        Err(e) if e.kind() == io::ErrorKind::NotFound => toml::Table::new(),
        Err(e) => return Err(e.into()),
    };

    let zotero = doc
        .entry("zotero")
        .or_insert_with(|| toml::Value::Table(toml::Table::new()))
        .as_table_mut()
        .ok_or_else(|| io::Error::other("[zotero] is not a table"))?;

    match path {
        Some(p) => {
            zotero.insert(
                "database".to_string(),
                toml::Value::String(p.to_string_lossy().into_owned()),
            );
        }
        None => {
            zotero.remove("database");
        }
    }

    let serialized = toml::to_string_pretty(&doc).map_err(io::Error::other)?;
    write_atomically(settings, &serialized)?;
    Ok(())
}

fn write_atomically(target: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = target.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let tmp = target.with_extension("toml.tmp");
    std::fs::write(&tmp, contents)?;
    std::fs::rename(&tmp, target)
}
