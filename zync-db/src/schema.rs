//! The subset of Zotero's schema read by the loaders.
//!
//! Loaders only ever open databases read-only; these functions exist to
//! build fixture databases with the same shape as a real `zotero.sqlite`.

use std::path::Path;

use rusqlite::Connection;

/// Create the tables if they don't exist. Idempotent.
pub fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}

/// Create (or open) a writable fixture database at `path` with the schema.
///
/// Foreign keys are switched off (the bundled SQLite enables them by
/// default) so fixtures can insert rows in any order and model
/// inconsistent libraries.
pub fn open_fixture(path: &Path) -> rusqlite::Result<Connection> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA foreign_keys=OFF;")?;
    create_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS itemTypes (
    itemTypeID INTEGER PRIMARY KEY,
    typeName TEXT NOT NULL UNIQUE
);

CREATE TABLE IF NOT EXISTS fields (
    fieldID INTEGER PRIMARY KEY,
    fieldName TEXT NOT NULL UNIQUE
);

-- Fields each item type may carry
CREATE TABLE IF NOT EXISTS itemTypeFields (
    itemTypeID INT NOT NULL REFERENCES itemTypes(itemTypeID),
    fieldID INT NOT NULL REFERENCES fields(fieldID),
    hide INT,
    orderIndex INT NOT NULL,
    PRIMARY KEY (itemTypeID, orderIndex),
    UNIQUE (itemTypeID, fieldID)
);

CREATE TABLE IF NOT EXISTS items (
    itemID INTEGER PRIMARY KEY,
    itemTypeID INT NOT NULL REFERENCES itemTypes(itemTypeID),
    dateAdded TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    libraryID INT NOT NULL DEFAULT 1,
    key TEXT NOT NULL,
    UNIQUE (libraryID, key)
);

-- Shared value pool; itemData points entries and fields at it
CREATE TABLE IF NOT EXISTS itemDataValues (
    valueID INTEGER PRIMARY KEY,
    value UNIQUE
);

CREATE TABLE IF NOT EXISTS itemData (
    itemID INT NOT NULL REFERENCES items(itemID) ON DELETE CASCADE,
    fieldID INT NOT NULL REFERENCES fields(fieldID),
    valueID INT NOT NULL REFERENCES itemDataValues(valueID),
    PRIMARY KEY (itemID, fieldID)
);

CREATE TABLE IF NOT EXISTS creators (
    creatorID INTEGER PRIMARY KEY,
    firstName TEXT,
    lastName TEXT,
    fieldMode INT,
    UNIQUE (lastName, firstName, fieldMode)
);

CREATE TABLE IF NOT EXISTS itemCreators (
    itemID INT NOT NULL REFERENCES items(itemID) ON DELETE CASCADE,
    creatorID INT NOT NULL REFERENCES creators(creatorID),
    creatorTypeID INT NOT NULL DEFAULT 1,
    orderIndex INT NOT NULL DEFAULT 0,
    PRIMARY KEY (itemID, creatorID, creatorTypeID, orderIndex),
    UNIQUE (itemID, orderIndex)
);

CREATE TABLE IF NOT EXISTS itemAttachments (
    itemID INTEGER PRIMARY KEY REFERENCES items(itemID) ON DELETE CASCADE,
    parentItemID INT REFERENCES items(itemID) ON DELETE CASCADE,
    linkMode INT,
    contentType TEXT,
    path TEXT
);
CREATE INDEX IF NOT EXISTS itemAttachments_parentItemID ON itemAttachments(parentItemID);
CREATE INDEX IF NOT EXISTS itemAttachments_contentType ON itemAttachments(contentType);

CREATE TABLE IF NOT EXISTS collections (
    collectionID INTEGER PRIMARY KEY,
    collectionName TEXT NOT NULL,
    parentCollectionID INT DEFAULT NULL REFERENCES collections(collectionID) ON DELETE CASCADE,
    libraryID INT NOT NULL DEFAULT 1,
    key TEXT NOT NULL,
    UNIQUE (libraryID, key)
);

CREATE TABLE IF NOT EXISTS collectionItems (
    collectionID INT NOT NULL REFERENCES collections(collectionID) ON DELETE CASCADE,
    itemID INT NOT NULL REFERENCES items(itemID) ON DELETE CASCADE,
    orderIndex INT NOT NULL DEFAULT 0,
    PRIMARY KEY (collectionID, itemID)
);
"#;
