//! A fully loaded Zotero library.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use zync_core::{hierarchy, Collection, ExtraTag, Item};
use zync_db::{load_collections, load_items, Gateway};

use crate::error::LibraryError;
use crate::settings::resolve_database_path;

/// Collections and items read from one database in a single load.
///
/// A library is a snapshot; reload to pick up changes made in Zotero.
#[derive(Debug, Clone)]
pub struct Library {
    database: PathBuf,
    collections: BTreeMap<i64, Collection>,
    items: BTreeMap<i64, Item>,
}

impl Library {
    /// Load from the database at `database`.
    pub fn open(database: impl Into<PathBuf>) -> Result<Self, LibraryError> {
        let database = database.into();
        if !database.is_file() {
            return Err(LibraryError::DatabaseNotFound(database));
        }

        let gateway = Gateway::new(database.clone());
        let collections = load_collections(&gateway)?;
        let items = load_items(&gateway)?;
        log::info!(
            "Opened {}: {} collection(s), {} item(s)",
            database.display(),
            collections.len(),
            items.len()
        );

        Ok(Self {
            database,
            collections,
            items,
        })
    }

    /// Load from the configured database; see [`resolve_database_path`].
    pub fn load(cli_override: Option<PathBuf>) -> Result<Self, LibraryError> {
        Self::open(resolve_database_path(cli_override))
    }

    pub fn database(&self) -> &Path {
        &self.database
    }

    pub fn collections(&self) -> &BTreeMap<i64, Collection> {
        &self.collections
    }

    pub fn items(&self) -> &BTreeMap<i64, Item> {
        &self.items
    }

    pub fn collection(&self, collection_id: i64) -> Option<&Collection> {
        self.collections.get(&collection_id)
    }

    pub fn item(&self, item_id: i64) -> Option<&Item> {
        self.items.get(&item_id)
    }

    pub fn collection_by_path(&self, path: &str) -> Option<&Collection> {
        hierarchy::find_by_path(&self.collections, path)
    }

    pub fn roots(&self) -> Vec<&Collection> {
        hierarchy::roots(&self.collections)
    }

    pub fn children(&self, collection_id: i64) -> Vec<&Collection> {
        hierarchy::children(&self.collections, collection_id)
    }

    /// Loaded items in a collection, in `item_ids` order.
    ///
    /// Attachments that were not loaded as items (non-PDF, or on an entry
    /// without authors) are skipped.
    pub fn items_in(&self, collection_id: i64) -> Vec<&Item> {
        self.collection(collection_id)
            .map(|c| c.item_ids.iter().filter_map(|id| self.items.get(id)).collect())
            .unwrap_or_default()
    }

    /// Items whose entry carries `tag`.
    pub fn tagged(&self, tag: ExtraTag) -> impl Iterator<Item = &Item> {
        self.items.values().filter(move |i| i.extra_tag == Some(tag))
    }
}
