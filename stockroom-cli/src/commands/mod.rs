pub(crate) mod config;
pub(crate) mod edit;
pub(crate) mod list;
pub(crate) mod search;
pub(crate) mod watch;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stockroom_lib::{CatalogRepository, Item, ItemId, RowView};

use crate::CliError;

/// Truncate a string to a maximum width, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max).collect()
    }
}

/// Print one inventory row.
pub(crate) fn log_row(item: &Item) {
    let row = RowView::from_item(item);
    log::info!(
        "  {:<16} {:>6}  {:<32} {}",
        truncate_str(&row.category, 16).if_supports_color(Stdout, |t| t.bold()),
        row.quantity,
        truncate_str(&row.description, 32),
        item.id.if_supports_color(Stdout, |t| t.dimmed()),
    );
    if let Some(image) = &row.image {
        log::info!(
            "  {:<16} {:>6}  {}",
            "",
            "",
            image.if_supports_color(Stdout, |t| t.cyan()),
        );
    }
}

/// Print a list of rows, or a note when there are none.
pub(crate) fn log_items(items: &[Item]) {
    if items.is_empty() {
        log::info!("  (no items)");
        return;
    }
    for item in items {
        log_row(item);
    }
}

/// Look up an item by id.
pub(crate) async fn find_item(
    repo: &CatalogRepository,
    id: &ItemId,
) -> Result<Option<Item>, CliError> {
    Ok(repo.find(id).await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_str("Tool", 16), "Tool");
    }

    #[test]
    fn test_truncate_long_string() {
        assert_eq!(truncate_str("Cordless drill kit", 10), "Cordles...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_str("Schraubenzieher größe", 8), "Schra...");
        assert_eq!(truncate_str("größe", 2), "gr");
    }
}
