use std::path::PathBuf;

use rusqlite::Connection;
use tempfile::TempDir;
use zync_lib::{ExtraTag, Library, LibraryError};

/// Two nested collections, three entries, one of them with a non-PDF
/// attachment only.
fn fixture() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zotero.sqlite");
    let conn: Connection = zync_db::open_fixture(&path).unwrap();
    conn.execute_batch(
        "INSERT INTO itemTypes VALUES (3, 'attachment'), (22, 'journalArticle');
         INSERT INTO fields VALUES (1, 'title'), (6, 'date'), (16, 'extra');
         INSERT INTO itemTypeFields VALUES (22, 1, NULL, 0), (22, 6, NULL, 1), (22, 16, NULL, 2);

         INSERT INTO collections (collectionID, collectionName, parentCollectionID, key) VALUES
             (1, 'Computer Science', NULL, 'CS000001'),
             (2, 'Type Theory', 1, 'TT000002'),
             (3, 'Unsorted', NULL, 'UN000003');

         INSERT INTO items (itemID, itemTypeID, key) VALUES
             (10, 22, 'ENTRY010'), (11, 3, 'PDF00011'),
             (20, 22, 'ENTRY020'), (21, 3, 'PDF00021'),
             (30, 22, 'ENTRY030'), (31, 3, 'WEB00031');

         INSERT INTO itemDataValues VALUES
             (1, 'on computable numbers'), (2, '1936-11-12'), (3, 'TOREAD'),
             (4, 'a theory of types'), (5, '1940'),
             (6, 'Some Web Page');
         INSERT INTO itemData VALUES
             (10, 1, 1), (10, 6, 2), (10, 16, 3),
             (20, 1, 4), (20, 6, 5),
             (30, 1, 6);

         INSERT INTO creators VALUES (1, 'Alan', 'Turing', 0), (2, 'Alonzo', 'Church', 0);
         INSERT INTO itemCreators (itemID, creatorID, orderIndex) VALUES (10, 1, 0), (20, 2, 0), (30, 1, 0);

         INSERT INTO itemAttachments (itemID, parentItemID, linkMode, contentType, path) VALUES
             (11, 10, 0, 'application/pdf', 'storage:turing.pdf'),
             (21, 20, 0, 'application/pdf', 'storage:church.pdf'),
             (31, 30, 0, 'text/html', 'storage:page.html');

         INSERT INTO collectionItems (collectionID, itemID) VALUES (1, 10), (2, 20), (2, 30);",
    )
    .unwrap();
    (dir, path)
}

#[test]
fn open_loads_collections_and_items() {
    let (_dir, path) = fixture();
    let library = Library::open(&path).unwrap();

    assert_eq!(library.database(), path.as_path());
    assert_eq!(library.collections().len(), 3);
    assert_eq!(library.items().len(), 2);

    let turing = library.item(11).unwrap();
    assert_eq!(turing.title, "On_Computable_Numbers");
    assert_eq!(turing.publish_year, "1936");
    assert_eq!(turing.author_last_name, "Turing");
    assert_eq!(turing.zotero_path, "turing.pdf");
}

#[test]
fn collection_paths_and_navigation() {
    let (_dir, path) = fixture();
    let library = Library::open(&path).unwrap();

    let types = library.collection_by_path("Computer_Science/Type_Theory").unwrap();
    assert_eq!(types.collection_id, 2);

    let roots: Vec<i64> = library.roots().iter().map(|c| c.collection_id).collect();
    assert_eq!(roots, vec![1, 3]);

    let children: Vec<i64> = library.children(1).iter().map(|c| c.collection_id).collect();
    assert_eq!(children, vec![2]);
}

#[test]
fn items_in_skips_unloaded_attachments() {
    let (_dir, path) = fixture();
    let library = Library::open(&path).unwrap();

    // The collection sees both attachments, but only the PDF is an item.
    assert_eq!(library.collection(2).unwrap().item_ids, vec![21, 31]);
    let items: Vec<i64> = library.items_in(2).iter().map(|i| i.item_id).collect();
    assert_eq!(items, vec![21]);

    assert!(library.items_in(3).is_empty());
    assert!(library.items_in(404).is_empty());
}

#[test]
fn tagged_items() {
    let (_dir, path) = fixture();
    let library = Library::open(&path).unwrap();

    let queued: Vec<i64> = library.tagged(ExtraTag::ToRead).map(|i| i.item_id).collect();
    assert_eq!(queued, vec![11]);
}

#[test]
fn missing_database_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.sqlite");
    match Library::open(&missing) {
        Err(LibraryError::DatabaseNotFound(p)) => assert_eq!(p, missing),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn load_prefers_override() {
    let (_dir, path) = fixture();
    let library = Library::load(Some(path.clone())).unwrap();
    assert_eq!(library.database(), path.as_path());
}
