use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stockroom_lib::{CatalogRepository, Item, seed_if_empty};

use crate::CliError;

use super::log_items;

pub(crate) async fn run_list(repo: &CatalogRepository) -> Result<(), CliError> {
    let items = repo.list_all().await?;
    let total = total_units(&items);

    log::info!(
        "{}",
        "Inventory".if_supports_color(Stdout, |t| t.bold()),
    );
    log_items(&items);
    crate::log_blank();
    log::info!("  {} items, {} units", items.len(), total);
    Ok(())
}

/// Sum of all quantities. Widened so large stock counts cannot overflow.
fn total_units(items: &[Item]) -> i128 {
    items.iter().map(|i| i128::from(i.quantity)).sum()
}

pub(crate) async fn run_seed(repo: &CatalogRepository) -> Result<(), CliError> {
    let inserted = seed_if_empty(repo).await?;
    if inserted == 0 {
        log::info!("Inventory is not empty; nothing seeded.");
    } else {
        log::info!(
            "{} {} default items",
            "Seeded".if_supports_color(Stdout, |t| t.green()),
            inserted,
        );
    }
    Ok(())
}
