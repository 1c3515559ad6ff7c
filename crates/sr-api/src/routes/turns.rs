//! Stateless turn endpoint.

use axum::Json;
use axum::extract::State;

use sr_protocol::turn::{TurnRequest, TurnResponse};

use crate::state::AppState;

/// POST /api/v1/turns: Resolve one utterance outside any call.
pub async fn post_turn(
    State(state): State<AppState>,
    Json(req): Json<TurnRequest>,
) -> Json<TurnResponse> {
    let turn = state.controller.handle(&req.utterance);
    tracing::info!(intent = %turn.intent, "turn handled");
    Json(turn)
}
