//! Read queries for the inventory database.

use rusqlite::{Connection, OptionalExtension, params};
use stockroom_catalog::{Item, ItemId};

use crate::operations::OperationError;

const ITEM_COLUMNS: &str = "id, type, quantity, model, imageUrl";

/// List every item ordered by category, then id.
pub fn list_items(conn: &Connection) -> Result<Vec<Item>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ITEM_COLUMNS} FROM products ORDER BY type ASC, id ASC"
    ))?;
    let rows = stmt.query_map([], row_to_item)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a single item by id.
pub fn find_item(conn: &Connection, id: &ItemId) -> Result<Option<Item>, OperationError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {ITEM_COLUMNS} FROM products WHERE id = ?1"
    ))?;
    stmt.query_row(params![id.as_str()], row_to_item)
        .optional()
        .map_err(Into::into)
}

/// Number of rows in the products table.
pub fn count_items(conn: &Connection) -> Result<usize, OperationError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
    Ok(count as usize)
}

fn row_to_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: ItemId::from(row.get::<_, String>(0)?),
        category: row.get(1)?,
        quantity: row.get(2)?,
        description: row.get(3)?,
        image_ref: row.get(4)?,
    })
}
