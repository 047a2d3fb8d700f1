use std::io::Write;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stockroom_lib::{CatalogRepository, ItemDraft, ItemId, parse_quantity};

use crate::CliError;

use super::{find_item, log_row};

pub(crate) async fn run_add(
    repo: &CatalogRepository,
    category: String,
    quantity: String,
    description: String,
) -> Result<(), CliError> {
    let item = ItemDraft::new(category, quantity, description).validate()?;
    let item = repo.add(item).await?;

    log::info!("{}", "Added".if_supports_color(Stdout, |t| t.green()));
    log_row(&item);
    Ok(())
}

pub(crate) async fn run_remove(
    repo: &CatalogRepository,
    id: String,
    yes: bool,
) -> Result<(), CliError> {
    let id = ItemId::from(id);
    let Some(item) = find_item(repo, &id).await? else {
        log::warn!("No item with id {}", id);
        return Ok(());
    };

    if !yes && !confirm(&format!("Remove {} ({})?", item.description, item.category))? {
        log::info!("Cancelled.");
        return Ok(());
    }

    repo.remove(&item).await?;
    log::info!(
        "{} {}",
        "Removed".if_supports_color(Stdout, |t| t.red()),
        item.description,
    );
    Ok(())
}

pub(crate) async fn run_set_quantity(
    repo: &CatalogRepository,
    id: String,
    quantity: String,
) -> Result<(), CliError> {
    let quantity = parse_quantity(&quantity)?;
    let id = ItemId::from(id);

    match repo.change_quantity(&id, quantity).await? {
        Some(item) => {
            log::info!("{}", "Updated".if_supports_color(Stdout, |t| t.green()));
            log_row(&item);
        }
        None => log::warn!("No item with id {}", id),
    }
    Ok(())
}

pub(crate) async fn run_attach_image(
    repo: &CatalogRepository,
    id: String,
    uri: String,
) -> Result<(), CliError> {
    let id = ItemId::from(id);

    match repo.attach_image(&id, uri).await? {
        Some(item) => {
            log::info!(
                "{}",
                "Image attached".if_supports_color(Stdout, |t| t.green()),
            );
            log_row(&item);
        }
        None => log::warn!("No item with id {}", id),
    }
    Ok(())
}

/// Ask a yes/no question on stdin. Anything but "y"/"yes" is a no.
fn confirm(prompt: &str) -> Result<bool, CliError> {
    print!("{} [y/N] ", prompt);
    std::io::stdout().flush()?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
