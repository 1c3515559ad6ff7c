//! Call session endpoints: start a call, talk, read the transcript, hang up.

use std::sync::{Arc, Mutex, MutexGuard};

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use sr_assistant::CallSession;
use sr_protocol::turn::{Message, TurnRequest, TurnResponse};

use crate::error::{ApiError, ApiResult};
use crate::state::{AppState, SharedSession};

/// Response body for a newly started call.
#[derive(Debug, Serialize)]
pub struct SessionStarted {
    pub id: Uuid,
    pub greeting: String,
}

/// Transcript view of a call.
#[derive(Debug, Serialize)]
pub struct SessionView {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended: bool,
    pub transcript: Vec<Message>,
}

impl From<&CallSession> for SessionView {
    fn from(s: &CallSession) -> Self {
        Self {
            id: s.id(),
            started_at: s.started_at(),
            ended: s.is_ended(),
            transcript: s.transcript().to_vec(),
        }
    }
}

/// POST /api/v1/sessions: Start a call. Ended calls past retention are
/// dropped first.
pub async fn start_session(State(state): State<AppState>) -> (StatusCode, Json<SessionStarted>) {
    state.prune_sessions(Utc::now()).await;

    let session = CallSession::start();
    let started = SessionStarted {
        id: session.id(),
        greeting: session.greeting().to_string(),
    };
    tracing::info!(session_id = %started.id, "call started");
    state
        .sessions
        .write()
        .await
        .insert(started.id, Arc::new(Mutex::new(session)));
    (StatusCode::CREATED, Json(started))
}

/// POST /api/v1/sessions/{id}/turns: One utterance within a call.
///
/// The turn runs on the blocking pool holding only this call's lock, so a
/// ledger write never stalls other calls.
pub async fn session_turn(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TurnRequest>,
) -> ApiResult<Json<TurnResponse>> {
    let session = find(&state, id).await?;
    let controller = state.controller.clone();

    let turn = tokio::task::spawn_blocking(move || {
        let mut call = lock(&session)?;
        if call.is_ended() {
            return Err(ApiError::Conflict(format!("session '{id}' has ended")));
        }
        Ok(call.take_turn(&controller, &req.utterance))
    })
    .await
    .map_err(|e| ApiError::Internal(format!("turn task failed: {e}")))??;

    tracing::info!(session_id = %id, intent = %turn.intent, "turn handled");
    Ok(Json(turn))
}

/// GET /api/v1/sessions/{id}: Transcript so far.
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<SessionView>> {
    let session = find(&state, id).await?;
    let view = SessionView::from(&*lock(&session)?);
    Ok(Json(view))
}

/// DELETE /api/v1/sessions/{id}: Hang up. The transcript stays readable
/// until the retention window passes.
pub async fn end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    let session = find(&state, id).await?;
    lock(&session)?.end();
    tracing::info!(session_id = %id, "call ended");
    Ok(StatusCode::NO_CONTENT)
}

async fn find(state: &AppState, id: Uuid) -> ApiResult<SharedSession> {
    state
        .session(&id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("session '{id}' not found")))
}

fn lock(session: &SharedSession) -> ApiResult<MutexGuard<'_, CallSession>> {
    session
        .lock()
        .map_err(|_| ApiError::Internal("session lock poisoned".into()))
}
