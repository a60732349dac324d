//! Read-only access to a Zotero SQLite database.
//!
//! Every query opens its own read-only connection through [`Gateway`]; the
//! loaders turn the results into `zync-core` records.

pub mod collections;
pub mod error;
pub mod fields;
pub mod gateway;
pub mod items;
pub mod schema;

pub use collections::{collection_item_ids, load_collections};
pub use error::LoadError;
pub use fields::{lookup_field, Field};
pub use gateway::Gateway;
pub use items::{load_items, PDF_CONTENT_TYPE};
pub use schema::{create_schema, open_fixture};
