//! Catalog loading error types.

use thiserror::Error;

/// Errors raised while reading the inventory dataset.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("inventory not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("malformed inventory: {0}")]
    Parse(String),
}

/// Convenience alias for catalog results.
pub type CatalogResult<T> = Result<T, CatalogError>;
