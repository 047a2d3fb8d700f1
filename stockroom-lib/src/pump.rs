//! Delivery of live-query snapshots to a UI thread.
//!
//! The subscription is awaited on a tokio task; each snapshot is forwarded
//! over a std `mpsc` channel that the UI thread drains between frames.
//! Only the newest pending snapshot is ever applied.

use std::sync::mpsc;

use stockroom_db::{Snapshot, Subscription};
use tokio::task::JoinHandle;

use crate::adapter::{ItemListAdapter, ListChange};

/// Forwards snapshots from a [`Subscription`] until dropped.
#[derive(Debug)]
pub struct SnapshotPump {
    rx: mpsc::Receiver<Snapshot>,
    task: JoinHandle<()>,
}

impl SnapshotPump {
    /// Start forwarding. Must be called from within a tokio runtime.
    pub fn start(mut subscription: Subscription) -> Self {
        let (tx, rx) = mpsc::channel();
        let task = tokio::spawn(async move {
            while let Some(snapshot) = subscription.next().await {
                if tx.send(snapshot).is_err() {
                    break; // Receiver dropped
                }
            }
            log::debug!("Snapshot pump finished");
        });
        Self { rx, task }
    }

    /// Apply the newest pending snapshot, if any, to `adapter`.
    pub fn drain_into(&self, adapter: &mut ItemListAdapter) -> Option<ListChange> {
        let latest = self.rx.try_iter().last()?;
        Some(adapter.replace_all(latest.to_vec()))
    }

    /// Whether the forwarding task has ended (store closed or cancelled).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for SnapshotPump {
    fn drop(&mut self) {
        self.task.abort();
    }
}
