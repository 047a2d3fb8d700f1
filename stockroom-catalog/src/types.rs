//! Data model types for the inventory catalog.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ── Item Identity ───────────────────────────────────────────────────────────

/// Opaque, immutable identifier of a catalog item.
///
/// Generated once when the item is created and never reassigned. It is the
/// natural key for updates, deletes, and list diffing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── Item ────────────────────────────────────────────────────────────────────

/// A single warehouse item.
///
/// Every mutation is a whole-value replacement; `id` stays the same across
/// updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Free-text label such as "Electronics".
    pub category: String,
    /// Unit count. Negative values are representable but never produced by
    /// the validated edit flow.
    pub quantity: i64,
    /// Model or description text.
    pub description: String,
    /// Opaque URI of an externally stored image.
    #[serde(default)]
    pub image_ref: Option<String>,
}

impl Item {
    /// Create a new item with a freshly generated id and no image.
    pub fn new(
        category: impl Into<String>,
        quantity: i64,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: ItemId::generate(),
            category: category.into(),
            quantity,
            description: description.into(),
            image_ref: None,
        }
    }

    /// Copy of this item with a different quantity.
    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Copy of this item pointing at a different image.
    pub fn with_image(mut self, image_ref: impl Into<String>) -> Self {
        self.image_ref = Some(image_ref.into());
        self
    }

    /// The image reference, if one is set and non-empty.
    pub fn image(&self) -> Option<&str> {
        self.image_ref.as_deref().filter(|r| !r.is_empty())
    }

    pub fn has_image(&self) -> bool {
        self.image().is_some()
    }
}
