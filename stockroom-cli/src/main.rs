//! stockroom CLI
//!
//! Command-line front end for the warehouse inventory: list, add, remove,
//! and edit items, attach image references, search, and watch live updates.

mod commands;
mod error;

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use stockroom_lib::settings;
use stockroom_lib::{CatalogRepository, CatalogStore};

pub(crate) use error::CliError;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Track warehouse inventory", long_about = None)]
struct Cli {
    /// Inventory database file (defaults to the configured or standard location)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every item, grouped by category
    List,

    /// Add a new item
    Add {
        /// Category label (e.g., Electronics)
        category: String,

        /// Number of units on hand
        quantity: String,

        /// Model or description
        description: String,
    },

    /// Remove an item
    Remove {
        /// Item id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Change the quantity of an item
    SetQuantity {
        /// Item id
        id: String,

        /// New quantity
        quantity: String,
    },

    /// Attach (or replace) an image reference on an item
    AttachImage {
        /// Item id
        id: String,

        /// Image URI (e.g., file:///photos/drill.jpg)
        uri: String,
    },

    /// Search categories and descriptions (case-insensitive)
    Search {
        /// Text to look for; omit to show everything
        query: Option<String>,
    },

    /// Insert the default items if the inventory is empty
    Seed,

    /// Print the inventory every time it changes (Ctrl-C to stop)
    Watch,

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the settings file path
    Path,

    /// Show effective settings
    Show,

    /// Store a database location in the settings file
    SetDb {
        /// Database file to use from now on
        path: PathBuf,
    },
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = settings::load_settings();

    // Config commands never open the database.
    if let Commands::Config { action } = &cli.command {
        match action {
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::Show => commands::config::run_config_show(&settings, cli.db),
            ConfigAction::SetDb { path } => {
                commands::config::run_config_set_db(&settings, path.clone())?
            }
        }
        return Ok(());
    }

    let db_path = settings::resolve_database_path(cli.db, &settings);
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let store = CatalogStore::open(&db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open inventory at {}: {}",
            db_path.display(),
            e
        ))
    })?;
    let repo = CatalogRepository::new(Arc::new(store));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::runtime(format!("Failed to start runtime: {}", e)))?;

    let watch = matches!(cli.command, Commands::Watch);
    let seed = settings.general.seed_on_empty && !matches!(cli.command, Commands::Seed);

    rt.block_on(async {
        if seed {
            stockroom_lib::seed_if_empty(&repo).await?;
        }

        match cli.command {
            Commands::List => commands::list::run_list(&repo).await,
            Commands::Add {
                category,
                quantity,
                description,
            } => commands::edit::run_add(&repo, category, quantity, description).await,
            Commands::Remove { id, yes } => commands::edit::run_remove(&repo, id, yes).await,
            Commands::SetQuantity { id, quantity } => {
                commands::edit::run_set_quantity(&repo, id, quantity).await
            }
            Commands::AttachImage { id, uri } => {
                commands::edit::run_attach_image(&repo, id, uri).await
            }
            Commands::Search { query } => commands::search::run_search(&repo, query).await,
            Commands::Seed => commands::list::run_seed(&repo).await,
            Commands::Watch | Commands::Config { .. } => Ok(()),
        }
    })?;

    if watch {
        commands::watch::run_watch(&rt, &repo)?;
    }

    repo.store()
        .close()
        .map_err(|e| CliError::database(format!("Failed to close inventory: {}", e)))
}

/// Route `log` output to the terminal: info as plain lines, everything
/// else prefixed with its level. `RUST_LOG` overrides the default level.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            level => writeln!(buf, "{}: {}", level, record.args()),
        })
        .init();
}

/// Emit an empty line through the logger.
pub(crate) fn log_blank() {
    log::info!("");
}
