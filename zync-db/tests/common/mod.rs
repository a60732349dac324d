#![allow(dead_code)]

use std::path::PathBuf;

use rusqlite::{params, Connection};
use tempfile::TempDir;
use zync_db::{open_fixture, Gateway};

pub const JOURNAL_ARTICLE: i64 = 22;
pub const ATTACHMENT: i64 = 3;

/// A throwaway Zotero-shaped database on disk.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
    pub conn: Connection,
}

impl Fixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zotero.sqlite");
        let conn = open_fixture(&path).unwrap();
        conn.execute_batch(
            "INSERT INTO itemTypes (itemTypeID, typeName) VALUES (3, 'attachment'), (22, 'journalArticle');
             INSERT INTO fields (fieldID, fieldName) VALUES (1, 'title'), (6, 'date'), (16, 'extra'), (90, 'url');
             INSERT INTO itemTypeFields (itemTypeID, fieldID, hide, orderIndex) VALUES
                 (22, 1, NULL, 0), (22, 6, NULL, 1), (22, 16, NULL, 2),
                 (3, 1, NULL, 0), (3, 90, NULL, 1);",
        )
        .unwrap();
        Self {
            _dir: dir,
            path,
            conn,
        }
    }

    pub fn gateway(&self) -> Gateway {
        Gateway::new(self.path.clone())
    }

    pub fn add_collection(&self, id: i64, name: &str, parent: Option<i64>) {
        self.conn
            .execute(
                "INSERT INTO collections (collectionID, collectionName, parentCollectionID, key)
                 VALUES (?1, ?2, ?3, ?4)",
                params![id, name, parent, format!("COLL{id:04}")],
            )
            .unwrap();
    }

    pub fn add_entry(&self, id: i64) {
        self.conn
            .execute(
                "INSERT INTO items (itemID, itemTypeID, key) VALUES (?1, ?2, ?3)",
                params![id, JOURNAL_ARTICLE, format!("ENTRY{id:03}")],
            )
            .unwrap();
    }

    pub fn set_field(&self, item_id: i64, field: &str, value: &str) {
        self.conn
            .execute(
                "INSERT OR IGNORE INTO itemDataValues (value) VALUES (?1)",
                params![value],
            )
            .unwrap();
        self.conn
            .execute(
                "INSERT INTO itemData (itemID, fieldID, valueID)
                 SELECT ?1, f.fieldID, v.valueID
                 FROM fields f, itemDataValues v
                 WHERE f.fieldName = ?2 AND v.value = ?3",
                params![item_id, field, value],
            )
            .unwrap();
    }

    pub fn add_creator(&self, item_id: i64, creator_id: i64, first: &str, last: &str, order: i64) {
        self.conn
            .execute(
                "INSERT OR IGNORE INTO creators (creatorID, firstName, lastName, fieldMode)
                 VALUES (?1, ?2, ?3, 0)",
                params![creator_id, first, last],
            )
            .unwrap();
        self.conn
            .execute(
                "INSERT INTO itemCreators (itemID, creatorID, orderIndex) VALUES (?1, ?2, ?3)",
                params![item_id, creator_id, order],
            )
            .unwrap();
    }

    pub fn add_attachment(&self, id: i64, parent: i64, content_type: &str, path: Option<&str>) {
        self.conn
            .execute(
                "INSERT INTO items (itemID, itemTypeID, key) VALUES (?1, ?2, ?3)",
                params![id, ATTACHMENT, format!("ATT{id:05}")],
            )
            .unwrap();
        self.conn
            .execute(
                "INSERT INTO itemAttachments (itemID, parentItemID, linkMode, contentType, path)
                 VALUES (?1, ?2, 0, ?3, ?4)",
                params![id, parent, content_type, path],
            )
            .unwrap();
    }

    pub fn add_to_collection(&self, collection_id: i64, item_id: i64) {
        self.conn
            .execute(
                "INSERT INTO collectionItems (collectionID, itemID) VALUES (?1, ?2)",
                params![collection_id, item_id],
            )
            .unwrap();
    }

    /// An entry with a title, first author, and one PDF attachment.
    pub fn add_paper(&self, entry_id: i64, attachment_id: i64, title: &str, last: &str) {
        self.add_entry(entry_id);
        self.set_field(entry_id, "title", title);
        self.add_creator(entry_id, entry_id * 100, "Ada", last, 0);
        self.add_attachment(
            attachment_id,
            entry_id,
            "application/pdf",
            Some(&format!("storage:{attachment_id}.pdf")),
        );
    }
}
