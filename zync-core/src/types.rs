//! Record types for collections and attachment items.

use std::fmt;

use serde::Serialize;

use crate::normalize::{strip_storage_prefix, title_case, NameRule};

/// Placeholder year for items whose parent entry has no `date` field.
pub const UNKNOWN_YEAR: &str = "yyyy";

// ── Collection ──────────────────────────────────────────────────────────────

/// A node in the collection (folder) hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Collection {
    pub collection_id: i64,
    /// Collection name after [`NameRule::Structural`].
    pub name: String,
    pub key: String,
    /// `None` for top-level collections.
    pub parent_id: Option<i64>,
    /// `/`-joined names from the root down to this collection. Empty until
    /// the whole collection set has been loaded and paths resolved.
    pub full_path: String,
    /// Attachment items whose parent entry belongs to this collection.
    pub item_ids: Vec<i64>,
}

impl Collection {
    pub fn new(
        collection_id: i64,
        name: &str,
        key: impl Into<String>,
        parent_id: Option<i64>,
        item_ids: Vec<i64>,
    ) -> Self {
        Self {
            collection_id,
            name: NameRule::Structural.apply(name),
            key: key.into(),
            parent_id,
            full_path: String::new(),
            item_ids,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

// ── Item ────────────────────────────────────────────────────────────────────

/// Categorical tag read from an entry's `extra` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExtraTag {
    #[serde(rename = "TOREAD")]
    ToRead,
}

impl ExtraTag {
    pub fn as_str(self) -> &'static str {
        match self {
            ExtraTag::ToRead => "TOREAD",
        }
    }

    /// Recognize a tag from the raw `extra` value. Only exact matches count.
    pub fn from_extra(value: &str) -> Option<Self> {
        match value {
            "TOREAD" => Some(ExtraTag::ToRead),
            _ => None,
        }
    }
}

impl fmt::Display for ExtraTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A PDF attachment together with metadata from its parent bibliographic entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    /// Identity of the attachment itself, not of the bibliographic entry.
    pub item_id: i64,
    pub parent_item_id: i64,
    pub item_type_id: i64,
    pub key: String,
    pub author_last_name: String,
    pub author_first_name: String,
    /// Path relative to Zotero's storage directory.
    pub zotero_path: String,
    pub title: String,
    pub publish_year: String,
    pub extra_tag: Option<ExtraTag>,
}

impl Item {
    /// Build an item from a joined attachment row.
    ///
    /// Title, year, and tag keep their defaults until set with
    /// [`with_title`](Self::with_title), [`with_date`](Self::with_date), and
    /// [`with_extra`](Self::with_extra).
    pub fn new(
        item_id: i64,
        parent_item_id: i64,
        item_type_id: i64,
        key: impl Into<String>,
        author_last_name: &str,
        author_first_name: &str,
        zotero_path: &str,
    ) -> Self {
        Self {
            item_id,
            parent_item_id,
            item_type_id,
            key: key.into(),
            author_last_name: NameRule::CANONICAL.apply(author_last_name),
            author_first_name: NameRule::CANONICAL.apply(author_first_name),
            zotero_path: strip_storage_prefix(zotero_path).to_string(),
            title: String::new(),
            publish_year: UNKNOWN_YEAR.to_string(),
            extra_tag: None,
        }
    }

    pub fn with_title(mut self, raw: &str) -> Self {
        self.title = NameRule::CANONICAL.apply(&title_case(raw));
        self
    }

    /// Take the year from the first four characters of the `date` field.
    ///
    /// An empty value counts as absent and keeps [`UNKNOWN_YEAR`].
    pub fn with_date(mut self, raw: Option<&str>) -> Self {
        if let Some(date) = raw.filter(|d| !d.is_empty()) {
            self.publish_year = date.chars().take(4).collect();
        }
        self
    }

    pub fn with_extra(mut self, raw: Option<&str>) -> Self {
        self.extra_tag = raw.and_then(ExtraTag::from_extra);
        self
    }

    pub fn has_known_year(&self) -> bool {
        self.publish_year != UNKNOWN_YEAR
    }
}
