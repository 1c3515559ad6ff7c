//! A single call with the assistant: transcript plus silence handling.
//!
//! The transcript is history only. Intent resolution never looks at it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use sr_protocol::turn::{Message, TurnResponse};

use crate::dialogue::DialogueController;

/// Opening line for calls started over the HTTP interface.
pub const CALL_GREETING: &str =
    "Hello! Thanks for calling the Auto Dealership. How can I help you today?";

/// Spoken after too many consecutive silent listens.
pub const SILENCE_NUDGE: &str = "I didn't hear anything. Are you still there?";

/// Consecutive silences before the nudge is spoken.
pub const DEFAULT_NUDGE_AFTER: u32 = 2;

/// State of one conversation.
#[derive(Debug, Clone)]
pub struct CallSession {
    id: Uuid,
    started_at: DateTime<Utc>,
    transcript: Vec<Message>,
    silence_count: u32,
    nudge_after: u32,
    ended_at: Option<DateTime<Utc>>,
}

impl CallSession {
    /// Start a call opened with `CALL_GREETING`.
    pub fn start() -> Self {
        Self::with_greeting(CALL_GREETING, DEFAULT_NUDGE_AFTER)
    }

    /// Start a call with a custom opening line and silence threshold.
    pub fn with_greeting(greeting: &str, nudge_after: u32) -> Self {
        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            transcript: vec![Message::assistant(greeting)],
            silence_count: 0,
            nudge_after: nudge_after.max(1),
            ended_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The opening line of the call.
    pub fn greeting(&self) -> &str {
        self.transcript
            .first()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }

    pub fn transcript(&self) -> &[Message] {
        &self.transcript
    }

    pub fn record_user(&mut self, text: impl Into<String>) {
        self.transcript.push(Message::user(text));
    }

    pub fn record_assistant(&mut self, text: impl Into<String>) {
        self.transcript.push(Message::assistant(text));
    }

    /// Run one utterance through the controller and log both sides.
    pub fn take_turn(&mut self, controller: &DialogueController, utterance: &str) -> TurnResponse {
        self.register_speech();
        self.record_user(utterance);
        let turn = controller.handle(utterance);
        self.record_assistant(turn.response.clone());
        if turn.ended {
            self.end();
        }
        turn
    }

    /// Count a listen that heard nothing. Returns the nudge to speak once
    /// the threshold is reached, and starts counting again from zero.
    pub fn register_silence(&mut self) -> Option<&'static str> {
        self.silence_count += 1;
        if self.silence_count < self.nudge_after {
            return None;
        }
        self.silence_count = 0;
        self.record_assistant(SILENCE_NUDGE);
        Some(SILENCE_NUDGE)
    }

    pub fn register_speech(&mut self) {
        self.silence_count = 0;
    }

    pub fn silence_count(&self) -> u32 {
        self.silence_count
    }

    /// Hang up. Ending twice keeps the first end time.
    pub fn end(&mut self) {
        self.ended_at.get_or_insert_with(Utc::now);
    }

    pub fn is_ended(&self) -> bool {
        self.ended_at.is_some()
    }

    /// When the call ended, if it has.
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }
}
