use stockroom_lib::{CatalogError, ValidationError};
use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// User input rejected before touching the store
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// Runtime creation or async error
    #[error("Runtime error: {0}")]
    Runtime(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn runtime(msg: impl Into<String>) -> Self {
        Self::Runtime(msg.into())
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Validation(v) => Self::Validation(v),
            other => Self::database(other.to_string()),
        }
    }
}
