//! Write operations on the products table.

use rusqlite::{Connection, params};
use stockroom_catalog::{Item, ItemId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Insert an item, replacing any existing row with the same id.
pub fn insert_or_replace_item(conn: &Connection, item: &Item) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO products (id, type, quantity, model, imageUrl)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
             type = excluded.type,
             quantity = excluded.quantity,
             model = excluded.model,
             imageUrl = excluded.imageUrl",
        params![
            item.id.as_str(),
            item.category,
            item.quantity,
            item.description,
            item.image_ref,
        ],
    )?;
    Ok(())
}

/// Replace every field of the row matching `item.id`.
///
/// Returns `false` when no such row exists; that is not an error.
pub fn update_item(conn: &Connection, item: &Item) -> Result<bool, OperationError> {
    let changed = conn.execute(
        "UPDATE products SET type = ?2, quantity = ?3, model = ?4, imageUrl = ?5
         WHERE id = ?1",
        params![
            item.id.as_str(),
            item.category,
            item.quantity,
            item.description,
            item.image_ref,
        ],
    )?;
    Ok(changed > 0)
}

/// Delete the row with the given id. Returns `false` if it was already gone.
pub fn delete_item(conn: &Connection, id: &ItemId) -> Result<bool, OperationError> {
    let changed = conn.execute("DELETE FROM products WHERE id = ?1", params![id.as_str()])?;
    Ok(changed > 0)
}
