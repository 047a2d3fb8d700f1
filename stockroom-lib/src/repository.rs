//! Domain-named façade over [`CatalogStore`].
//!
//! Each call is a direct pass-through to one store operation, run on tokio's
//! blocking pool so SQLite I/O never stalls the caller's thread. Nothing is
//! cached here; the live query stays the single source of truth.

use std::sync::Arc;

use stockroom_catalog::{Item, ItemId};
use stockroom_db::{CatalogStore, StoreError, Subscription};

use crate::error::CatalogError;

#[derive(Debug, Clone)]
pub struct CatalogRepository {
    store: Arc<CatalogStore>,
}

impl CatalogRepository {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// One-shot read of every item, ordered by category.
    pub async fn list_all(&self) -> Result<Vec<Item>, CatalogError> {
        self.run(|store| store.list_all()).await
    }

    /// One-shot read of a single item; `None` if it does not exist.
    pub async fn find(&self, id: &ItemId) -> Result<Option<Item>, CatalogError> {
        let id = id.clone();
        self.run(move |store| store.find(&id)).await
    }

    /// Subscribe to the live "all items" query.
    pub fn observe_all(&self) -> Result<Subscription, CatalogError> {
        Ok(self.store.observe_all()?)
    }

    /// Persist a new item and return it.
    pub async fn add(&self, item: Item) -> Result<Item, CatalogError> {
        self.run(move |store| {
            store.insert_or_replace(&item)?;
            Ok(item)
        })
        .await
    }

    /// Replace every field of an existing item. `false` if it no longer exists.
    pub async fn update(&self, item: Item) -> Result<bool, CatalogError> {
        self.run(move |store| store.update(&item)).await
    }

    /// Set the quantity of an item, leaving its other fields untouched.
    pub async fn change_quantity(
        &self,
        id: &ItemId,
        quantity: i64,
    ) -> Result<Option<Item>, CatalogError> {
        let id = id.clone();
        self.run(move |store| store.modify(&id, |item| item.quantity = quantity))
            .await
    }

    /// Point an item at a new image, replacing any previous reference.
    pub async fn attach_image(
        &self,
        id: &ItemId,
        image_ref: impl Into<String>,
    ) -> Result<Option<Item>, CatalogError> {
        let id = id.clone();
        let image_ref = image_ref.into();
        self.run(move |store| store.modify(&id, |item| item.image_ref = Some(image_ref)))
            .await
    }

    /// Delete an item. Removing an item that is already gone is a no-op.
    pub async fn remove(&self, item: &Item) -> Result<bool, CatalogError> {
        let id = item.id.clone();
        self.run(move |store| store.delete_by_id(&id)).await
    }

    pub async fn count(&self) -> Result<usize, CatalogError> {
        self.run(|store| store.count()).await
    }

    async fn run<T, F>(&self, op: F) -> Result<T, CatalogError>
    where
        T: Send + 'static,
        F: FnOnce(&CatalogStore) -> Result<T, StoreError> + Send + 'static,
    {
        let store = Arc::clone(&self.store);
        let result = tokio::task::spawn_blocking(move || op(&store)).await?;
        Ok(result?)
    }
}
