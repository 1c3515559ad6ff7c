//! Booking dashboard endpoint.

use axum::Json;
use axum::extract::State;

use sr_protocol::booking::Booking;

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /api/v1/bookings: The full ledger, oldest first.
pub async fn list_bookings(State(state): State<AppState>) -> ApiResult<Json<Vec<Booking>>> {
    Ok(Json(state.controller.ledger().list()?))
}
