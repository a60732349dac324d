//! Full-path resolution and tree navigation over a loaded collection set.
//!
//! Paths are resolved in a second pass, after every collection exists, so
//! rows may arrive in any order.

use std::collections::BTreeMap;

use crate::error::PathError;
use crate::types::Collection;

/// Build the `/`-joined path of `collection` by walking parent links
/// through `all`.
///
/// `collection` itself does not need to be a member of `all`.
pub fn resolve_full_path(
    collection: &Collection,
    all: &BTreeMap<i64, Collection>,
) -> Result<String, PathError> {
    let mut segments = vec![collection.name.as_str()];
    let mut child_id = collection.collection_id;
    let mut parent_id = collection.parent_id;

    while let Some(id) = parent_id {
        // An acyclic chain visits each collection at most once.
        if segments.len() > all.len() {
            return Err(PathError::CyclicParent {
                collection_id: collection.collection_id,
            });
        }
        let parent = all.get(&id).ok_or(PathError::MissingParent {
            collection_id: child_id,
            parent_id: id,
        })?;
        segments.push(parent.name.as_str());
        child_id = parent.collection_id;
        parent_id = parent.parent_id;
    }

    segments.reverse();
    Ok(segments.join("/"))
}

/// Resolve and assign `full_path` for every collection in the set.
///
/// Nothing is assigned unless every path resolves.
pub fn update_full_paths(all: &mut BTreeMap<i64, Collection>) -> Result<(), PathError> {
    let paths = all
        .values()
        .map(|c| resolve_full_path(c, all).map(|path| (c.collection_id, path)))
        .collect::<Result<Vec<_>, _>>()?;

    for (id, path) in paths {
        if let Some(collection) = all.get_mut(&id) {
            collection.full_path = path;
        }
    }
    Ok(())
}

impl Collection {
    /// Resolve this collection's path against the complete collection set.
    pub fn update_full_path(&mut self, all: &BTreeMap<i64, Collection>) -> Result<(), PathError> {
        self.full_path = resolve_full_path(self, all)?;
        Ok(())
    }
}

/// Top-level collections, ordered by id.
pub fn roots(all: &BTreeMap<i64, Collection>) -> Vec<&Collection> {
    all.values().filter(|c| c.is_root()).collect()
}

/// Direct children of `parent_id`, ordered by id.
pub fn children(all: &BTreeMap<i64, Collection>, parent_id: i64) -> Vec<&Collection> {
    all.values()
        .filter(|c| c.parent_id == Some(parent_id))
        .collect()
}

/// Look up a collection by its resolved `full_path`.
pub fn find_by_path<'a>(all: &'a BTreeMap<i64, Collection>, path: &str) -> Option<&'a Collection> {
    all.values().find(|c| c.full_path == path)
}
