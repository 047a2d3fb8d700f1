//! Validation of user-entered text before it reaches the store.

use thiserror::Error;

use crate::types::Item;

/// User input that cannot be turned into an item or a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was empty or only whitespace
    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    /// Text that should be a whole number is not one
    #[error("'{value}' is not a valid {field}")]
    NotANumber { field: &'static str, value: String },
}

impl ValidationError {
    pub fn empty(field: &'static str) -> Self {
        Self::EmptyField { field }
    }
}

/// Parse a quantity typed by the user.
///
/// Accepts non-negative decimal digits, ignoring surrounding whitespace.
/// Signs are rejected so a negative count can never come from the edit flow.
pub fn parse_quantity(text: &str) -> Result<i64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::empty("quantity"));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotANumber {
            field: "quantity",
            value: trimmed.to_string(),
        });
    }
    trimmed.parse().map_err(|_| ValidationError::NotANumber {
        field: "quantity",
        value: trimmed.to_string(),
    })
}

/// Raw text from the "add item" form.
#[derive(Debug, Clone, Default)]
pub struct ItemDraft {
    pub category: String,
    pub quantity: String,
    pub description: String,
}

impl ItemDraft {
    pub fn new(
        category: impl Into<String>,
        quantity: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            quantity: quantity.into(),
            description: description.into(),
        }
    }

    /// Check every field and build a fresh [`Item`] (new id, no image).
    pub fn validate(&self) -> Result<Item, ValidationError> {
        let category = required("category", &self.category)?;
        let description = required("description", &self.description)?;
        let quantity = parse_quantity(&self.quantity)?;
        Ok(Item::new(category, quantity, description))
    }
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::empty(field))
    } else {
        Ok(trimmed.to_string())
    }
}
