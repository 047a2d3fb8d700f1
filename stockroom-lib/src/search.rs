use stockroom_catalog::{Item, filter_items};

use crate::error::CatalogError;
use crate::repository::CatalogRepository;

/// Fetch the catalog once and filter it, both off the caller's thread.
///
/// The result is a point-in-time answer; it is not refreshed by later writes.
pub async fn search(
    repo: &CatalogRepository,
    query: Option<String>,
) -> Result<Vec<Item>, CatalogError> {
    let items = repo.list_all().await?;
    let found =
        tokio::task::spawn_blocking(move || filter_items(&items, query.as_deref())).await?;
    log::debug!("Search matched {} items", found.len());
    Ok(found)
}
