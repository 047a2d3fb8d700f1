//! Observable single-table store.
//!
//! [`CatalogStore`] owns the one SQLite connection behind a mutex, so writes
//! are applied one commit at a time. Every committed change re-reads the
//! whole table inside the same transaction and publishes the result on a
//! `tokio::sync::watch` channel. Subscribers always see a complete, committed
//! snapshot; a slow subscriber only sees the latest one.

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

use rusqlite::{Connection, Transaction};
use stockroom_catalog::{Item, ItemId};
use thiserror::Error;
use tokio::sync::watch;

use crate::operations::{self, OperationError};
use crate::queries;
use crate::schema::{self, SchemaError};

/// A full, ordered listing of the products table at one commit.
pub type Snapshot = Arc<Vec<Item>>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to open inventory database: {0}")]
    Schema(#[from] SchemaError),
    #[error("Storage failure: {0}")]
    Storage(#[from] OperationError),
    #[error("Inventory store lock poisoned")]
    LockPoisoned,
    #[error("Inventory store is closed")]
    Closed,
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        Self::Storage(OperationError::Sqlite(e))
    }
}

#[derive(Debug)]
struct Inner {
    conn: Connection,
    snapshots: watch::Sender<Snapshot>,
}

/// Durable item store with a live "all items" query.
///
/// Share it between tasks with `Arc<CatalogStore>`. Calls block on SQLite
/// I/O, so async callers should run them on a blocking pool.
#[derive(Debug)]
pub struct CatalogStore {
    inner: Mutex<Option<Inner>>,
}

impl CatalogStore {
    /// Open or create the database file at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = schema::open_database(path)?;
        log::debug!("Opened inventory database at {}", path.display());
        Self::from_connection(conn)
    }

    /// Open a private in-memory database. Useful for testing.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(schema::open_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        let initial = queries::list_items(&conn)?;
        let (snapshots, _) = watch::channel(Arc::new(initial));
        Ok(Self {
            inner: Mutex::new(Some(Inner { conn, snapshots })),
        })
    }

    /// Close the database. Every live subscription ends and later calls
    /// fail with [`StoreError::Closed`].
    pub fn close(&self) -> Result<(), StoreError> {
        let inner = self.lock()?.take();
        if let Some(inner) = inner {
            log::debug!(
                "Closing inventory store ({} live subscriptions)",
                inner.snapshots.receiver_count()
            );
            inner
                .conn
                .close()
                .map_err(|(_, e)| StoreError::from(e))?;
        }
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().map(|g| g.is_none()).unwrap_or(true)
    }

    // ── Writes ──────────────────────────────────────────────────────────────

    /// Insert `item`, replacing any existing row with the same id.
    pub fn insert_or_replace(&self, item: &Item) -> Result<(), StoreError> {
        self.write(|tx| {
            operations::insert_or_replace_item(tx, item)?;
            Ok(((), true))
        })
    }

    /// Replace every field of the stored item with `item.id`.
    ///
    /// Returns `false` (and publishes nothing) if the id is unknown.
    pub fn update(&self, item: &Item) -> Result<bool, StoreError> {
        self.write(|tx| {
            let changed = operations::update_item(tx, item)?;
            if !changed {
                log::debug!("Update of unknown item {} ignored", item.id);
            }
            Ok((changed, changed))
        })
    }

    /// Remove the stored item with `item.id`. Returns `false` if absent.
    pub fn delete(&self, item: &Item) -> Result<bool, StoreError> {
        self.delete_by_id(&item.id)
    }

    pub fn delete_by_id(&self, id: &ItemId) -> Result<bool, StoreError> {
        self.write(|tx| {
            let changed = operations::delete_item(tx, id)?;
            if !changed {
                log::debug!("Delete of unknown item {} ignored", id);
            }
            Ok((changed, changed))
        })
    }

    /// Read-modify-write of one item under the write lock.
    ///
    /// `edit` may change any field; the id is restored afterwards. Returns
    /// the stored result, or `None` if the id is unknown.
    pub fn modify<F>(&self, id: &ItemId, edit: F) -> Result<Option<Item>, StoreError>
    where
        F: FnOnce(&mut Item),
    {
        self.write(|tx| {
            let Some(mut item) = queries::find_item(tx, id)? else {
                log::debug!("Edit of unknown item {} ignored", id);
                return Ok((None, false));
            };
            edit(&mut item);
            item.id = id.clone();
            operations::update_item(tx, &item)?;
            Ok((Some(item), true))
        })
    }

    // ── Reads ───────────────────────────────────────────────────────────────

    /// One-shot read of every item, in snapshot order.
    pub fn list_all(&self) -> Result<Vec<Item>, StoreError> {
        let guard = self.lock()?;
        let inner = guard.as_ref().ok_or(StoreError::Closed)?;
        Ok(queries::list_items(&inner.conn)?)
    }

    pub fn find(&self, id: &ItemId) -> Result<Option<Item>, StoreError> {
        let guard = self.lock()?;
        let inner = guard.as_ref().ok_or(StoreError::Closed)?;
        Ok(queries::find_item(&inner.conn, id)?)
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let guard = self.lock()?;
        let inner = guard.as_ref().ok_or(StoreError::Closed)?;
        Ok(queries::count_items(&inner.conn)?)
    }

    /// Subscribe to the live "all items" query.
    ///
    /// The first [`Subscription::next`] yields the current state right away.
    pub fn observe_all(&self) -> Result<Subscription, StoreError> {
        let guard = self.lock()?;
        let inner = guard.as_ref().ok_or(StoreError::Closed)?;
        Ok(Subscription::new(inner.snapshots.subscribe()))
    }

    // ── Internals ───────────────────────────────────────────────────────────

    fn lock(&self) -> Result<MutexGuard<'_, Option<Inner>>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Run `op` in a transaction. When it reports a change, the new table
    /// contents are read before commit and published after it.
    fn write<T, F>(&self, op: F) -> Result<T, StoreError>
    where
        F: FnOnce(&Transaction<'_>) -> Result<(T, bool), OperationError>,
    {
        let mut guard = self.lock()?;
        let inner = guard.as_mut().ok_or(StoreError::Closed)?;

        let tx = inner.conn.transaction()?;
        let (value, changed) = op(&tx)?;
        if !changed {
            return Ok(value);
        }
        let items = queries::list_items(&tx)?;
        tx.commit()?;

        inner.snapshots.send_replace(Arc::new(items));
        Ok(value)
    }
}

/// Handle on the live query. Dropping it cancels the subscription.
#[derive(Debug)]
pub struct Subscription {
    rx: watch::Receiver<Snapshot>,
}

impl Subscription {
    fn new(mut rx: watch::Receiver<Snapshot>) -> Self {
        rx.mark_changed();
        Self { rx }
    }

    /// Wait for the next snapshot. Returns `None` once the store is closed.
    ///
    /// Snapshots published while the caller was busy are coalesced; only
    /// the newest is returned.
    pub async fn next(&mut self) -> Option<Snapshot> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }

    /// The newest snapshot if one arrived since the last read.
    pub fn try_next(&mut self) -> Option<Snapshot> {
        match self.rx.has_changed() {
            Ok(true) => Some(self.rx.borrow_and_update().clone()),
            _ => None,
        }
    }
}
