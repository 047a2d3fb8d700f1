use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use stockroom_lib::settings::{self, Settings};

use crate::CliError;

pub(crate) fn run_config_path() {
    log::info!("{}", settings::settings_path().display());
}

/// Show the settings file location and the values in effect.
pub(crate) fn run_config_show(settings: &Settings, db_override: Option<PathBuf>) {
    let path = settings::settings_path();

    log::info!(
        "{}",
        "Stockroom Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }

    let source = if db_override.is_some() {
        "--db"
    } else if settings.database.path.is_some() {
        "settings"
    } else {
        "default"
    };
    let db_path = settings::resolve_database_path(db_override, settings);
    log::info!(
        "  Database:      {} {}",
        db_path.display().if_supports_color(Stdout, |t| t.cyan()),
        format!("({})", source).if_supports_color(Stdout, |t| t.dimmed()),
    );
    log::info!("  Seed on empty: {}", settings.general.seed_on_empty);
}

/// Persist `db` as the database location, keeping the other settings.
pub(crate) fn run_config_set_db(settings: &Settings, db: PathBuf) -> Result<(), CliError> {
    let db = std::path::absolute(&db)?;
    settings::save_settings(&with_database_path(settings, &db))?;
    log::info!(
        "Database set to {}",
        db.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    Ok(())
}

fn with_database_path(settings: &Settings, db: &Path) -> Settings {
    let mut updated = settings.clone();
    updated.database.path = Some(db.to_path_buf());
    updated
}
