//! In-memory ledger store for testing.
//!
//! Supports write/read failure injection so callers can exercise the
//! "booking could not be saved" path without touching the filesystem.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use sr_protocol::booking::Booking;

use crate::error::{LedgerError, LedgerResult};
use crate::store::LedgerStore;

/// Ledger store backed by a `Vec` in memory.
pub struct MemoryLedgerStore {
    bookings: Mutex<Vec<Booking>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryLedgerStore {
    pub fn new() -> Self {
        Self::with_bookings(Vec::new())
    }

    /// Create a store pre-loaded with existing bookings.
    pub fn with_bookings(bookings: Vec<Booking>) -> Self {
        Self {
            bookings: Mutex::new(bookings),
            fail_reads: AtomicBool::new(false),
            fail_writes: AtomicBool::new(false),
            saves: AtomicUsize::new(0),
        }
    }

    /// Make every subsequent `load` fail.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make every subsequent `save` fail.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Copy of the currently stored bookings.
    pub fn snapshot(&self) -> Vec<Booking> {
        self.bookings.lock().unwrap().clone()
    }

    /// Number of successful `save` calls.
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl Default for MemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for MemoryLedgerStore {
    fn load(&self) -> LedgerResult<Vec<Booking>> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(LedgerError::Io("simulated read failure".into()));
        }
        Ok(self.bookings.lock().unwrap().clone())
    }

    fn save(&self, bookings: &[Booking]) -> LedgerResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(LedgerError::Io("simulated write failure".into()));
        }
        *self.bookings.lock().unwrap() = bookings.to_vec();
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
