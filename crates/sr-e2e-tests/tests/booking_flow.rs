//! E2E: booking requests flowing from an utterance into the ledger file.

mod helpers;

use axum::http::StatusCode;
use helpers::TestHarness;
use sr_ledger::BookingLedger;

/// The RAV4 Hybrid request confirms with the caller's wording and writes
/// exactly one record to disk.
#[tokio::test]
async fn e2e_booking_confirms_and_persists() {
    let h = TestHarness::new();

    let json = h
        .turn("I want to book a test drive for a RAV4 Hybrid tomorrow at 2 PM")
        .await;
    assert_eq!(json["intent"], "booking");
    assert_eq!(
        json["response"],
        "Great! I have booked a test drive for the RAV4 Hybrid for tomorrow at 2 PM."
    );
    assert_eq!(json["ended"], false);

    let stored = h.stored_bookings();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, 1);
    assert_eq!(stored[0].car_model, "RAV4 Hybrid");
    assert_eq!(stored[0].date, "tomorrow");
    assert_eq!(stored[0].time, "2 PM");
}

/// Reopening the ledger file yields the same bookings.
#[tokio::test]
async fn e2e_bookings_survive_reload() {
    let h = TestHarness::new();
    h.turn("book a camry today at 9 am").await;
    h.turn("schedule the tundra").await;

    let reopened = BookingLedger::open(&h.ledger_path).unwrap();
    let bookings = reopened.list().unwrap();
    assert_eq!(bookings, h.controller.ledger().list().unwrap());
    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].car_model, "Camry");
    assert_eq!(bookings[0].date, "today");
    assert_eq!(bookings[0].time, "9 am");
    assert_eq!(bookings[1].car_model, "Tundra");
    assert_eq!(bookings[1].time, "10 AM");
    assert!(bookings[0].created_at <= bookings[1].created_at);
}

/// A booking request without a recognizable model asks which car and
/// leaves the ledger untouched.
#[tokio::test]
async fn e2e_booking_without_model_does_not_write() {
    let h = TestHarness::new();

    let json = h.turn("book a test drive").await;
    assert_eq!(json["intent"], "booking");
    assert_eq!(
        json["response"],
        "Which car model would you like to book? We have SUVs and Sedans."
    );
    assert!(h.stored_bookings().is_empty());
}

/// Ids continue from the highest id already in the file.
#[tokio::test]
async fn e2e_ids_continue_after_existing_records() {
    let h = TestHarness::new();
    std::fs::write(
        &h.ledger_path,
        r#"[
  {"id": 4, "car_model": "Camry", "date": "today", "time": "9 am",
   "created_at": "2026-01-05T09:00:00Z"}
]"#,
    )
    .unwrap();

    h.turn("book a corolla at 1 pm").await;

    let stored = h.stored_bookings();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[1].id, 5);
    assert_eq!(stored[1].car_model, "Corolla");
}

/// A ledger whose timestamps carry no UTC offset still accepts bookings
/// and is rewritten in RFC 3339.
#[tokio::test]
async fn e2e_offsetless_timestamps_accept_new_bookings() {
    let h = TestHarness::new();
    std::fs::write(
        &h.ledger_path,
        r#"[{"id": 1, "car_model": "Camry", "date": "tomorrow", "time": "10 AM", "created_at": "2025-06-01T10:15:30.123456"}]"#,
    )
    .unwrap();

    let json = h.turn("book a corolla at 1 pm").await;
    assert_eq!(
        json["response"],
        "Great! I have booked a test drive for the Corolla for tomorrow at 1 pm."
    );

    let stored = h.stored_bookings();
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].car_model, "Camry");
    assert_eq!(stored[1].id, 2);

    let raw = std::fs::read_to_string(&h.ledger_path).unwrap();
    assert!(raw.contains("2025-06-01T10:15:30.123456Z"));

    let (status, json) = h.get("/api/v1/bookings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json.as_array().unwrap().len(), 2);
}

/// The dashboard endpoint reflects the ledger file.
#[tokio::test]
async fn e2e_dashboard_lists_bookings() {
    let h = TestHarness::new();
    h.turn("book a tacoma today at 4:30 PM").await;

    let (status, json) = h.get("/api/v1/bookings").await;
    assert_eq!(status, StatusCode::OK);
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["car_model"], "Tacoma");
    assert_eq!(list[0]["time"], "4:30 PM");
    assert!(list[0]["created_at"].as_str().is_some());
}

/// An unreadable ledger makes the booking fail politely, without a crash.
#[tokio::test]
async fn e2e_corrupt_ledger_apologizes() {
    let h = TestHarness::new();
    std::fs::write(&h.ledger_path, "not json").unwrap();

    let json = h.turn("book a camry").await;
    assert_eq!(
        json["response"],
        "I'm sorry, I encountered an error saving your booking."
    );
    assert_eq!(std::fs::read_to_string(&h.ledger_path).unwrap(), "not json");

    let (status, _) = h.get("/api/v1/bookings").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
