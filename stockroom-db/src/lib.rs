//! SQLite persistence layer for the inventory catalog.
//!
//! Provides schema creation, row operations, read queries, and the
//! observable [`CatalogStore`] backed by SQLite (via rusqlite with the
//! bundled feature).

pub mod operations;
pub mod queries;
pub mod schema;
pub mod store;

pub use operations::{OperationError, delete_item, insert_or_replace_item, update_item};
pub use queries::{count_items, find_item, list_items};
pub use schema::{SchemaError, open_database, open_memory};
pub use store::{CatalogStore, Snapshot, StoreError, Subscription};
