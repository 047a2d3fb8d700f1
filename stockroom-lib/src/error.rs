use stockroom_catalog::ValidationError;
use stockroom_db::StoreError;
use thiserror::Error;

/// Errors surfaced to the screen controller.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// User input was rejected before reaching the store
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The store failed; nothing was changed
    #[error(transparent)]
    Storage(#[from] StoreError),

    /// A list position outside the displayed rows
    #[error(transparent)]
    Index(#[from] IndexError),

    /// A background store task panicked or was cancelled
    #[error("Background task failed: {0}")]
    Worker(String),
}

impl CatalogError {
    pub fn worker(msg: impl Into<String>) -> Self {
        Self::Worker(msg.into())
    }

    /// Whether the error came from user input rather than the system.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<tokio::task::JoinError> for CatalogError {
    fn from(e: tokio::task::JoinError) -> Self {
        Self::worker(e.to_string())
    }
}

/// A list position outside `[0, count)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Position {position} is out of bounds for a list of {count} rows")]
pub struct IndexError {
    pub position: isize,
    pub count: usize,
}
