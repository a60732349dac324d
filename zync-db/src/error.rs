use thiserror::Error;
use zync_core::PathError;

/// Errors that abort a load. Loaders never return partial results.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The database could not be opened or a query failed.
    #[error("Data access error: {0}")]
    DataAccess(#[from] rusqlite::Error),

    /// A query's result columns differ from what the caller expects.
    #[error("Query returned columns {found:?}, expected {expected:?}")]
    ColumnMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },

    /// A collection references a parent outside the loaded set.
    #[error("Lookup error: {0}")]
    Lookup(#[from] PathError),

    /// A required field is absent on an item's parent entry.
    #[error("Item {item_id}: parent entry {parent_item_id} has no '{field}' field")]
    MissingField {
        item_id: i64,
        parent_item_id: i64,
        field: &'static str,
    },
}
