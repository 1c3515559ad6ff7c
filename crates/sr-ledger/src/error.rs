//! Ledger error types.

use thiserror::Error;

/// Errors that can occur while reading or writing the ledger.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("serialization error: {0}")]
    Serialize(String),

    #[error("ledger document is corrupt: {0}")]
    Corrupt(String),

    #[error("ledger lock poisoned by a panicked writer")]
    Poisoned,
}

/// Convenience alias for ledger results.
pub type LedgerResult<T> = Result<T, LedgerError>;
