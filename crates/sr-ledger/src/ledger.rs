//! The booking ledger: serialized read-modify-write over a `LedgerStore`.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use chrono::Utc;
use sr_protocol::booking::{Booking, NewBooking};

use crate::error::{LedgerError, LedgerResult};
use crate::store::{FileLedgerStore, LedgerStore};

/// Append-only list of test-drive bookings.
///
/// Every `create` holds `write_lock` across load, append and save, so two
/// callers sharing this ledger can never compute the same id or overwrite
/// each other's append. Separate processes writing the same file are not
/// coordinated.
pub struct BookingLedger {
    store: Arc<dyn LedgerStore>,
    write_lock: Mutex<()>,
}

impl BookingLedger {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Ledger persisted as JSON at `path`, created empty if absent.
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        Ok(Self::new(Arc::new(FileLedgerStore::open(path)?)))
    }

    /// Append a booking and persist the whole ledger.
    ///
    /// On failure nothing is appended and the stored document is unchanged.
    pub fn create(&self, request: NewBooking) -> LedgerResult<Booking> {
        let _guard = self.write_lock.lock().map_err(|_| LedgerError::Poisoned)?;

        let mut bookings = self.store.load()?;
        let booking = request.into_booking(next_id(&bookings)?, Utc::now());
        bookings.push(booking.clone());

        if let Err(e) = self.store.save(&bookings) {
            tracing::error!(
                store = %self.store.location(),
                car_model = %booking.car_model,
                error = %e,
                "failed to persist booking"
            );
            return Err(e);
        }

        tracing::info!(
            id = booking.id,
            car_model = %booking.car_model,
            date = %booking.date,
            time = %booking.time,
            "booking created"
        );
        Ok(booking)
    }

    /// All bookings, oldest first.
    pub fn list(&self) -> LedgerResult<Vec<Booking>> {
        self.store.load()
    }

    /// Number of stored bookings.
    pub fn len(&self) -> LedgerResult<usize> {
        Ok(self.store.load()?.len())
    }

    pub fn is_empty(&self) -> LedgerResult<bool> {
        Ok(self.len()? == 0)
    }
}

/// One past the highest id present; `len + 1` for an untouched ledger.
fn next_id(bookings: &[Booking]) -> LedgerResult<u64> {
    let highest = bookings.iter().map(|b| b.id).max().unwrap_or(0);
    highest
        .checked_add(1)
        .ok_or_else(|| LedgerError::Corrupt(format!("booking id {highest} cannot be followed")))
}
