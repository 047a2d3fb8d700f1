//! Inventory screen core: repository, list adapter, and live-update plumbing.
//!
//! Frontends open a [`CatalogStore`], wrap it in a [`CatalogRepository`],
//! and feed the live query into an [`ItemListAdapter`] through a
//! [`SnapshotPump`].

pub mod adapter;
pub mod error;
pub mod pump;
pub mod repository;
pub mod search;
pub mod seed;
pub mod settings;

pub use adapter::{ItemListAdapter, ListChange, RowActions, RowGesture, RowView};
pub use error::{CatalogError, IndexError};
pub use pump::SnapshotPump;
pub use repository::CatalogRepository;
pub use search::search;
pub use seed::{default_items, seed_if_empty};

pub use stockroom_catalog::{Item, ItemDraft, ItemId, ValidationError, parse_quantity};
pub use stockroom_db::{CatalogStore, Snapshot, StoreError, Subscription};
