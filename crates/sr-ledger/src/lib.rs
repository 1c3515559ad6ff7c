//! Booking ledger for test-drive reservations.
//!
//! Bookings are kept as one JSON array that is rewritten in full on every
//! append. A `LedgerStore` trait separates persistence from the ledger logic
//! so tests can swap the file for an in-memory store.

pub mod error;
pub mod ledger;
pub mod mock;
pub mod store;

pub use error::{LedgerError, LedgerResult};
pub use ledger::BookingLedger;
pub use mock::MemoryLedgerStore;
pub use store::{FileLedgerStore, LedgerStore};
