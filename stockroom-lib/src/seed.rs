//! First-run seeding of an empty inventory.

use stockroom_catalog::Item;

use crate::error::CatalogError;
use crate::repository::CatalogRepository;

/// The items written into a brand-new inventory.
pub fn default_items() -> Vec<Item> {
    vec![
        Item::new("Electronics", 5, "Laptop"),
        Item::new("Furniture", 12, "Office chair"),
        Item::new("Tool", 30, "Cordless drill"),
    ]
}

/// Insert [`default_items`] if the store holds nothing yet.
///
/// Returns the number of items inserted (0 when the store was not empty).
pub async fn seed_if_empty(repo: &CatalogRepository) -> Result<usize, CatalogError> {
    if repo.count().await? > 0 {
        return Ok(0);
    }

    let items = default_items();
    let inserted = items.len();
    for item in items {
        repo.add(item).await?;
    }
    log::info!("Seeded empty inventory with {} items", inserted);
    Ok(inserted)
}
