use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stockroom_lib::CatalogRepository;

use crate::CliError;

use super::log_items;

pub(crate) async fn run_search(
    repo: &CatalogRepository,
    query: Option<String>,
) -> Result<(), CliError> {
    let label = query.clone().unwrap_or_default();
    let found = stockroom_lib::search(repo, query).await?;

    log::info!(
        "{} {}",
        "Search:".if_supports_color(Stdout, |t| t.bold()),
        label.if_supports_color(Stdout, |t| t.cyan()),
    );
    log_items(&found);
    crate::log_blank();
    log::info!("  {} matches", found.len());
    Ok(())
}
