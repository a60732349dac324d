//! Loading PDF attachments with their parent entry's metadata.

use std::collections::BTreeMap;

use rusqlite::params;
use zync_core::Item;

use crate::error::LoadError;
use crate::fields::{lookup_field, Field};
use crate::gateway::Gateway;

/// Content type of the attachments materialized as items.
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

// One row per PDF attachment, paired with the first-listed creator of the
// entry it belongs to. Entries without creators produce no rows.
const ITEMS_SQL: &str = "
    SELECT att.itemID AS item_id,
           ia.parentItemID AS parent_item_id,
           parent.itemTypeID AS item_type_id,
           att.key AS key,
           c.lastName AS author_last_name,
           c.firstName AS author_first_name,
           ia.path AS zotero_path
    FROM items parent
    JOIN itemAttachments ia ON ia.parentItemID = parent.itemID
    JOIN items att ON att.itemID = ia.itemID
    JOIN itemCreators ic ON ic.itemID = parent.itemID
    JOIN creators c ON c.creatorID = ic.creatorID
    WHERE ia.contentType = ?1 AND ic.orderIndex = 0
    ORDER BY att.itemID";

const ITEM_COLUMNS: &[&str] = &[
    "item_id",
    "parent_item_id",
    "item_type_id",
    "key",
    "author_last_name",
    "author_first_name",
    "zotero_path",
];

struct AttachmentRow {
    item_id: i64,
    parent_item_id: i64,
    item_type_id: i64,
    key: String,
    author_last_name: Option<String>,
    author_first_name: Option<String>,
    zotero_path: Option<String>,
}

/// Load every PDF attachment whose parent entry has a primary author.
pub fn load_items(gateway: &Gateway) -> Result<BTreeMap<i64, Item>, LoadError> {
    let rows = gateway.execute(
        ITEMS_SQL,
        params![PDF_CONTENT_TYPE],
        ITEM_COLUMNS,
        row_to_attachment,
    )?;

    let mut items = BTreeMap::new();
    for row in rows {
        let item = build_item(gateway, row)?;
        items.insert(item.item_id, item);
    }

    log::info!(
        "Loaded {} item(s) from {}",
        items.len(),
        gateway.path().display()
    );
    Ok(items)
}

fn build_item(gateway: &Gateway, row: AttachmentRow) -> Result<Item, LoadError> {
    let title = lookup_field(gateway, row.parent_item_id, Field::Title)?.ok_or_else(|| {
        LoadError::MissingField {
            item_id: row.item_id,
            parent_item_id: row.parent_item_id,
            field: Field::Title.name(),
        }
    })?;
    let date = lookup_field(gateway, row.parent_item_id, Field::Date)?;
    let extra = lookup_field(gateway, row.parent_item_id, Field::Extra)?;

    if date.is_none() {
        log::debug!(
            "Item {}: parent entry {} has no date, year left unknown",
            row.item_id,
            row.parent_item_id
        );
    }

    let item = Item::new(
        row.item_id,
        row.parent_item_id,
        row.item_type_id,
        row.key,
        row.author_last_name.as_deref().unwrap_or_default(),
        row.author_first_name.as_deref().unwrap_or_default(),
        row.zotero_path.as_deref().unwrap_or_default(),
    )
    .with_title(&title)
    .with_date(date.as_deref())
    .with_extra(extra.as_deref());

    Ok(item)
}

fn row_to_attachment(row: &rusqlite::Row<'_>) -> rusqlite::Result<AttachmentRow> {
    Ok(AttachmentRow {
        item_id: row.get(0)?,
        parent_item_id: row.get(1)?,
        item_type_id: row.get(2)?,
        key: row.get(3)?,
        author_last_name: row.get(4)?,
        author_first_name: row.get(5)?,
        zotero_path: row.get(6)?,
    })
}
