//! Shared application state for the Axum server.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, TryLockError};

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use sr_assistant::{CallSession, DialogueController};
use sr_catalog::{InventoryCatalog, sample_inventory};
use sr_ledger::{BookingLedger, MemoryLedgerStore};

use crate::config::ApiConfig;

/// One call, locked independently of the session map.
pub type SharedSession = Arc<Mutex<CallSession>>;

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    /// Dialogue core (catalog + ledger + intent engine).
    pub controller: Arc<DialogueController>,
    /// Calls started over HTTP, by session id.
    pub sessions: Arc<RwLock<HashMap<Uuid, SharedSession>>>,
    /// How long an ended call's transcript stays readable.
    pub session_retention: TimeDelta,
}

impl AppState {
    pub fn new(controller: Arc<DialogueController>) -> Self {
        Self {
            controller,
            sessions: Arc::new(RwLock::new(HashMap::new())),
            session_retention: retention(ApiConfig::default().session_retention_secs),
        }
    }

    pub fn with_session_retention(mut self, retention: TimeDelta) -> Self {
        self.session_retention = retention;
        self
    }

    /// State backed by the configured inventory and ledger files.
    pub fn from_config(config: &ApiConfig) -> anyhow::Result<Self> {
        let catalog = Arc::new(InventoryCatalog::load(&config.catalog_path));
        let ledger = Arc::new(BookingLedger::open(&config.ledger_path)?);
        Ok(Self::new(Arc::new(DialogueController::new(catalog, ledger)))
            .with_session_retention(retention(config.session_retention_secs)))
    }

    /// Sample inventory with an in-memory ledger (tests and development).
    pub fn with_sample_data() -> Self {
        let ledger = BookingLedger::new(Arc::new(MemoryLedgerStore::new()));
        Self::new(Arc::new(DialogueController::new(
            Arc::new(sample_inventory()),
            Arc::new(ledger),
        )))
    }

    /// Look up a call by id without holding the map lock afterwards.
    pub async fn session(&self, id: &Uuid) -> Option<SharedSession> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Drop calls that ended at least `session_retention` before `now`.
    /// Returns how many were removed.
    pub async fn prune_sessions(&self, now: DateTime<Utc>) -> usize {
        let Some(cutoff) = now.checked_sub_signed(self.session_retention) else {
            return 0;
        };
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        // A call mid-turn is skipped rather than waited on.
        sessions.retain(|_, session| match session.try_lock() {
            Ok(s) => s.ended_at().is_none_or(|ended| ended > cutoff),
            Err(TryLockError::WouldBlock) => true,
            Err(TryLockError::Poisoned(_)) => false,
        });
        let removed = before - sessions.len();
        if removed > 0 {
            tracing::debug!(removed, remaining = sessions.len(), "pruned ended calls");
        }
        removed
    }
}

fn retention(secs: i64) -> TimeDelta {
    TimeDelta::try_seconds(secs).unwrap_or(TimeDelta::MAX)
}
