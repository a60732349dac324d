//! Typed field lookups on bibliographic entries.
//!
//! Zotero stores metadata as key/value pairs: an entry's type lists its
//! allowed fields (`itemTypeFields`), and `itemData` links the entry and a
//! field to a shared value in `itemDataValues`.

use rusqlite::params;
use rusqlite::types::Value;

use crate::error::LoadError;
use crate::gateway::Gateway;

/// Metadata fields read from an attachment's parent entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Date,
    Extra,
}

impl Field {
    /// Name as stored in Zotero's `fields` table.
    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Date => "date",
            Field::Extra => "extra",
        }
    }
}

const FIELD_SQL: &str = "
    SELECT idv.value AS value
    FROM items i
    JOIN itemTypeFields itf ON itf.itemTypeID = i.itemTypeID
    JOIN fields f ON f.fieldID = itf.fieldID
    JOIN itemData id ON id.fieldID = f.fieldID AND id.itemID = i.itemID
    JOIN itemDataValues idv ON idv.valueID = id.valueID
    WHERE i.itemID = ?1 AND f.fieldName = ?2";

const FIELD_COLUMNS: &[&str] = &["value"];

/// Read `field` for the entry `item_id`, stringified.
///
/// Returns `None` when the entry has no value for the field.
pub fn lookup_field(
    gateway: &Gateway,
    item_id: i64,
    field: Field,
) -> Result<Option<String>, LoadError> {
    let value = gateway.execute_first(
        FIELD_SQL,
        params![item_id, field.name()],
        FIELD_COLUMNS,
        |row| row.get::<_, Value>(0),
    )?;
    Ok(value.and_then(value_to_string))
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Integer(i) => Some(i.to_string()),
        Value::Real(f) => Some(f.to_string()),
        Value::Text(s) => Some(s),
        Value::Blob(b) => Some(String::from_utf8_lossy(&b).into_owned()),
    }
}
