use thiserror::Error;

/// Errors raised while resolving a collection's position in the hierarchy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A collection names a parent that is not part of the loaded set.
    #[error("Collection {collection_id} references missing parent {parent_id}")]
    MissingParent { collection_id: i64, parent_id: i64 },

    /// Following parent links from a collection never reaches a root.
    #[error("Collection {collection_id} has a cyclic parent chain")]
    CyclicParent { collection_id: i64 },
}
