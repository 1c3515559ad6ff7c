//! Ledger persistence backends.

use std::io::Write;
use std::path::{Path, PathBuf};

use sr_protocol::booking::Booking;

use crate::error::{LedgerError, LedgerResult};

/// Whole-document storage for the booking list.
///
/// Implementations never update records in place: `save` replaces the
/// entire persisted list.
pub trait LedgerStore: Send + Sync {
    /// Read every booking, oldest first.
    fn load(&self) -> LedgerResult<Vec<Booking>>;

    /// Replace the persisted list with `bookings`.
    fn save(&self, bookings: &[Booking]) -> LedgerResult<()>;

    /// Human-readable location, for logs.
    fn location(&self) -> String;
}

/// Stores the ledger as a pretty-printed JSON array on disk.
#[derive(Debug, Clone)]
pub struct FileLedgerStore {
    path: PathBuf,
}

impl FileLedgerStore {
    /// Open the ledger at `path`, creating an empty `[]` document (and any
    /// missing parent directories) if nothing exists there yet.
    pub fn open(path: impl Into<PathBuf>) -> LedgerResult<Self> {
        let store = Self { path: path.into() };
        if !store.path.exists() {
            let dir = store.dir();
            std::fs::create_dir_all(dir).map_err(|e| io_error(dir, e))?;
            store.save(&[])?;
            tracing::info!(path = %store.path.display(), "initialized empty ledger");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn dir(&self) -> &Path {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }
}

impl LedgerStore for FileLedgerStore {
    fn load(&self) -> LedgerResult<Vec<Booking>> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error(&self.path, e)),
        };
        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Corrupt(format!("{}: {e}", self.path.display())))
    }

    fn save(&self, bookings: &[Booking]) -> LedgerResult<()> {
        let json = serde_json::to_string_pretty(bookings)
            .map_err(|e| LedgerError::Serialize(e.to_string()))?;

        // Write a uniquely named sibling and rename it over the target, so a
        // failed write leaves the previous document in place.
        let dir = self.dir();
        let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(|e| io_error(dir, e))?;
        tmp.write_all(json.as_bytes())
            .and_then(|()| tmp.as_file().sync_all())
            .map_err(|e| io_error(tmp.path(), e))?;
        tmp.persist(&self.path)
            .map_err(|e| io_error(&self.path, e.error))?;
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

fn io_error(path: &Path, e: std::io::Error) -> LedgerError {
    LedgerError::Io(format!("{}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sr_protocol::booking::NewBooking;

    fn booking(id: u64, model: &str) -> Booking {
        NewBooking::new(model, "tomorrow", "10 AM").into_booking(id, Utc::now())
    }

    #[test]
    fn open_creates_empty_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        let store = FileLedgerStore::open(&path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap().trim(), "[]");
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn open_creates_missing_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data").join("nested").join("bookings.json");
        FileLedgerStore::open(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn open_keeps_existing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        let store = FileLedgerStore::open(&path).unwrap();
        store.save(&[booking(1, "Camry")]).unwrap();

        let reopened = FileLedgerStore::open(&path).unwrap();
        assert_eq!(reopened.load().unwrap().len(), 1);
    }

    #[test]
    fn save_is_pretty_printed_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileLedgerStore::open(dir.path().join("bookings.json")).unwrap();
        store.save(&[booking(1, "Camry")]).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.starts_with("[\n  {"));
        assert!(raw.contains(r#""car_model": "Camry""#));

        let leftovers: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec![std::ffi::OsString::from("bookings.json")]);
    }

    #[test]
    fn concurrent_saves_from_separate_stores_never_clash() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        FileLedgerStore::open(&path).unwrap();

        let handles: Vec<_> = (0..4u64)
            .map(|i| {
                let store = FileLedgerStore::open(&path).unwrap();
                std::thread::spawn(move || {
                    for j in 0..10 {
                        store.save(&[booking(i * 10 + j, "Camry")]).unwrap();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let store = FileLedgerStore::open(&path).unwrap();
        assert_eq!(store.load().unwrap().len(), 1);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        let store = FileLedgerStore::open(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn load_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bookings.json");
        let store = FileLedgerStore::open(&path).unwrap();
        std::fs::write(&path, "{ broken").unwrap();
        assert!(matches!(store.load(), Err(LedgerError::Corrupt(_))));
    }

    #[test]
    fn save_into_missing_directory_fails_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gone").join("bookings.json");
        let store = FileLedgerStore::open(&path).unwrap();
        std::fs::remove_dir_all(dir.path().join("gone")).unwrap();
        assert!(matches!(store.save(&[]), Err(LedgerError::Io(_))));
    }
}
