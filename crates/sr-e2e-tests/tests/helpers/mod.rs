//! Shared test harness for E2E integration tests.
//!
//! Writes an inventory file and a ledger file into a scratch directory,
//! then wires the real catalog loader, file-backed ledger, dialogue
//! controller and HTTP router on top of them.

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use sr_api::routes::build_router;
use sr_api::state::AppState;
use sr_assistant::DialogueController;
use sr_catalog::InventoryCatalog;
use sr_ledger::BookingLedger;
use sr_protocol::booking::Booking;

/// The dataset shipped in `data/cars.json`.
pub const SHIPPED_INVENTORY: &str = include_str!("../../../../data/cars.json");

/// End-to-end harness over real files.
pub struct TestHarness {
    /// Scratch directory; removed on drop.
    pub dir: TempDir,
    pub catalog_path: PathBuf,
    pub ledger_path: PathBuf,
    pub controller: Arc<DialogueController>,
    pub state: AppState,
    pub router: Router,
}

impl TestHarness {
    /// Harness over the shipped inventory.
    pub fn new() -> Self {
        Self::with_inventory(Some(SHIPPED_INVENTORY))
    }

    /// Harness over the given inventory JSON; `None` leaves the file absent.
    pub fn with_inventory(inventory: Option<&str>) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("cars.json");
        let ledger_path = dir.path().join("data").join("bookings.json");
        if let Some(json) = inventory {
            std::fs::write(&catalog_path, json).unwrap();
        }

        let catalog = Arc::new(InventoryCatalog::load(&catalog_path));
        let ledger = Arc::new(BookingLedger::open(&ledger_path).unwrap());
        let controller = Arc::new(DialogueController::new(catalog, ledger));
        let state = AppState::new(controller.clone());
        let router = build_router(state.clone());

        Self {
            dir,
            catalog_path,
            ledger_path,
            controller,
            state,
            router,
        }
    }

    /// Bookings as currently persisted on disk.
    pub fn stored_bookings(&self) -> Vec<Booking> {
        let raw = std::fs::read_to_string(&self.ledger_path).unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    /// Issue a GET and decode the JSON body.
    pub async fn get(&self, uri: &str) -> (StatusCode, serde_json::Value) {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    /// POST a JSON body and decode the JSON response.
    pub async fn post(&self, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        self.send(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_vec(&body).unwrap()))
                .unwrap(),
        )
        .await
    }

    /// Send one stateless turn via POST /api/v1/turns.
    pub async fn turn(&self, utterance: &str) -> serde_json::Value {
        let (status, json) = self
            .post("/api/v1/turns", serde_json::json!({ "utterance": utterance }))
            .await;
        assert_eq!(status, StatusCode::OK, "turn '{utterance}' failed");
        json
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }
}
