//! List presentation state for the inventory screen.
//!
//! [`ItemListAdapter`] holds the rows currently on screen. The live query
//! drives it through [`ItemListAdapter::replace_all`]; the `*_local` helpers
//! only smooth over latency and are overwritten by the next snapshot.
//! Every operation reports a [`ListChange`] so a list widget can animate.

use std::sync::mpsc;

use stockroom_catalog::Item;

use crate::error::IndexError;

/// What changed in the visible list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListChange {
    /// Everything may have changed
    Reset,
    Inserted(usize),
    Removed(usize),
    Changed(usize),
}

/// Display values for one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub category: String,
    pub quantity: String,
    pub description: String,
    /// `None` hides the image region.
    pub image: Option<String>,
}

impl RowView {
    pub fn from_item(item: &Item) -> Self {
        Self {
            category: item.category.clone(),
            quantity: item.quantity.to_string(),
            description: item.description.clone(),
            image: item.image().map(str::to_string),
        }
    }
}

/// User gestures a row can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowGesture {
    RemoveClicked,
    ImageClicked,
    LongPress,
}

/// Callbacks the screen controller provides for row actions.
pub trait RowActions {
    fn on_remove(&mut self, item: &Item);

    fn on_attach_image(&mut self, item: &Item);

    /// Start the edit flow. Returns whether the gesture was handled.
    fn on_edit_requested(&mut self, item: &Item) -> bool;
}

#[derive(Debug, Default)]
pub struct ItemListAdapter {
    items: Vec<Item>,
    notifier: Option<mpsc::Sender<ListChange>>,
}

impl ItemListAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward every change to `tx` in addition to returning it.
    pub fn with_notifier(tx: mpsc::Sender<ListChange>) -> Self {
        Self {
            items: Vec::new(),
            notifier: Some(tx),
        }
    }

    /// Adopt `items` verbatim, discarding whatever was shown.
    pub fn replace_all(&mut self, items: Vec<Item>) -> ListChange {
        self.items = items;
        self.notify(ListChange::Reset)
    }

    /// Optimistically append an item.
    pub fn insert_local(&mut self, item: Item) -> ListChange {
        self.items.push(item);
        let position = self.items.len() - 1;
        self.notify(ListChange::Inserted(position))
    }

    /// Optimistically drop the row with `item.id`. `None` if it isn't shown.
    pub fn remove_local(&mut self, item: &Item) -> Option<ListChange> {
        let position = self.position_of(item)?;
        self.items.remove(position);
        Some(self.notify(ListChange::Removed(position)))
    }

    /// Optimistically replace the row with `item.id`. `None` if it isn't shown.
    pub fn update_local(&mut self, item: Item) -> Option<ListChange> {
        let position = self.position_of(&item)?;
        self.items[position] = item;
        Some(self.notify(ListChange::Changed(position)))
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// The item rendered at `position`. Negative positions are rejected.
    pub fn item_at(&self, position: isize) -> Result<&Item, IndexError> {
        usize::try_from(position)
            .ok()
            .and_then(|index| self.items.get(index))
            .ok_or(IndexError {
                position,
                count: self.items.len(),
            })
    }

    /// Display values for the row at `position`.
    pub fn bind(&self, position: isize) -> Result<RowView, IndexError> {
        self.item_at(position).map(RowView::from_item)
    }

    /// Route a gesture on row `position` to the controller.
    ///
    /// Returns whether the gesture was consumed. Button clicks always are;
    /// a long-press is consumed when the controller handles the edit.
    pub fn dispatch(
        &self,
        position: isize,
        gesture: RowGesture,
        actions: &mut impl RowActions,
    ) -> Result<bool, IndexError> {
        let item = self.item_at(position)?;
        let handled = match gesture {
            RowGesture::RemoveClicked => {
                actions.on_remove(item);
                true
            }
            RowGesture::ImageClicked => {
                actions.on_attach_image(item);
                true
            }
            RowGesture::LongPress => actions.on_edit_requested(item),
        };
        Ok(handled)
    }

    fn position_of(&self, item: &Item) -> Option<usize> {
        self.items.iter().position(|i| i.id == item.id)
    }

    fn notify(&self, change: ListChange) -> ListChange {
        if let Some(tx) = &self.notifier {
            if tx.send(change).is_err() {
                log::debug!("List change {:?} dropped: no listener", change);
            }
        }
        change
    }
}

#[cfg(test)]
#[path = "tests/adapter_tests.rs"]
mod tests;
