//! Inventory data model, input validation, and snapshot search.
//!
//! This crate defines the catalog item type without any database
//! dependencies. Consumers pass these types to `stockroom-db` for
//! persistence and to `stockroom-lib` for presentation.

pub mod search;
pub mod types;
pub mod validation;

pub use search::filter_items;
pub use types::*;
pub use validation::{ItemDraft, ValidationError, parse_quantity};
