use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use tokio::runtime::Runtime;

use stockroom_lib::{CatalogRepository, ItemListAdapter, SnapshotPump};

use crate::CliError;

use super::log_items;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Redraw the inventory whenever the live query emits, until Ctrl-C.
///
/// The calling thread plays the UI thread: it owns the adapter and applies
/// snapshots the pump forwards from the runtime.
pub(crate) fn run_watch(rt: &Runtime, repo: &CatalogRepository) -> Result<(), CliError> {
    let _guard = rt.enter();

    let stop = Arc::new(AtomicBool::new(false));
    let stop_flag = Arc::clone(&stop);
    rt.spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stop_flag.store(true, Ordering::SeqCst);
        }
    });

    let pump = SnapshotPump::start(repo.observe_all()?);
    let mut adapter = ItemListAdapter::new();
    let mut redraws: u64 = 0;

    log::info!("Watching inventory (Ctrl-C to stop)");
    while !stop.load(Ordering::SeqCst) {
        if pump.drain_into(&mut adapter).is_none() {
            if pump.is_finished() {
                log::warn!("Inventory closed, stopping watch");
                break;
            }
            std::thread::sleep(POLL_INTERVAL);
            continue;
        }

        redraws += 1;
        crate::log_blank();
        log::info!(
            "{} {}",
            "Inventory".if_supports_color(Stdout, |t| t.bold()),
            format!("(update {})", redraws).if_supports_color(Stdout, |t| t.dimmed()),
        );
        log_items(adapter.items());
    }

    log::debug!("Watch stopped after {} redraws", redraws);
    Ok(())
}
