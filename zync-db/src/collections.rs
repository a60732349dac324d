//! Collection loading and full-path resolution.

use std::collections::BTreeMap;

use rusqlite::params;
use zync_core::{update_full_paths, Collection};

use crate::error::LoadError;
use crate::gateway::Gateway;

const COLLECTIONS_SQL: &str = "
    SELECT collectionID AS collection_id,
           collectionName AS name,
           key,
           parentCollectionID AS parent_id
    FROM collections
    ORDER BY collectionID";

const COLLECTION_COLUMNS: &[&str] = &["collection_id", "name", "key", "parent_id"];

// Membership is recorded on bibliographic entries; collections expose the
// attachments hanging off those entries.
const COLLECTION_ITEMS_SQL: &str = "
    SELECT ia.itemID AS item_id
    FROM collectionItems ci
    JOIN itemAttachments ia ON ia.parentItemID = ci.itemID
    WHERE ci.collectionID = ?1
    ORDER BY ia.itemID";

const COLLECTION_ITEM_COLUMNS: &[&str] = &["item_id"];

struct CollectionRow {
    collection_id: i64,
    name: String,
    key: String,
    parent_id: Option<i64>,
}

/// Load every collection and resolve its full path.
///
/// Paths are resolved only once all collections exist, so parents may
/// appear after their children in the source table.
pub fn load_collections(gateway: &Gateway) -> Result<BTreeMap<i64, Collection>, LoadError> {
    let rows = gateway.execute(COLLECTIONS_SQL, [], COLLECTION_COLUMNS, row_to_collection)?;

    let mut collections = BTreeMap::new();
    for row in rows {
        let collection = build_collection(gateway, row)?;
        collections.insert(collection.collection_id, collection);
    }

    update_full_paths(&mut collections)?;

    log::info!(
        "Loaded {} collection(s) from {}",
        collections.len(),
        gateway.path().display()
    );
    Ok(collections)
}

/// Attachment item ids visible in `collection_id`, ordered by id.
pub fn collection_item_ids(gateway: &Gateway, collection_id: i64) -> Result<Vec<i64>, LoadError> {
    gateway.execute(
        COLLECTION_ITEMS_SQL,
        params![collection_id],
        COLLECTION_ITEM_COLUMNS,
        |row| row.get(0),
    )
}

fn build_collection(gateway: &Gateway, row: CollectionRow) -> Result<Collection, LoadError> {
    let item_ids = collection_item_ids(gateway, row.collection_id)?;
    log::debug!(
        "Collection {} '{}': {} item(s)",
        row.collection_id,
        row.name,
        item_ids.len()
    );
    Ok(Collection::new(
        row.collection_id,
        &row.name,
        row.key,
        row.parent_id,
        item_ids,
    ))
}

fn row_to_collection(row: &rusqlite::Row<'_>) -> rusqlite::Result<CollectionRow> {
    Ok(CollectionRow {
        collection_id: row.get(0)?,
        name: row.get(1)?,
        key: row.get(2)?,
        parent_id: row.get(3)?,
    })
}
