//! Text search over a catalog snapshot.
//!
//! This is a pure function over whatever items the caller already holds; it
//! does not observe the store, so re-running it is the only way to refresh
//! its results.

use crate::types::Item;

/// Items whose category or description contains `query`, ignoring case.
///
/// An absent or blank query returns every item. Order is preserved.
pub fn filter_items(items: &[Item], query: Option<&str>) -> Vec<Item> {
    let needle = match query.map(str::trim) {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return items.to_vec(),
    };

    items
        .iter()
        .filter(|item| {
            item.category.to_lowercase().contains(&needle)
                || item.description.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
