//! The voice loop: listen, resolve, reply, until the caller says goodbye.

use sr_ledger::BookingLedger;

use crate::config::AssistantConfig;
use crate::dialogue::DialogueController;
use crate::session::CallSession;
use crate::speech::{SpeechError, Synthesizer, Transcriber};

const LISTEN_PROMPT: &str = "Listening...";

/// Drive one conversation to completion and return its session.
///
/// Ends on a goodbye reply, when the transcriber closes, or on a
/// transcription error. Playback failures are logged and ignored.
pub async fn run_conversation(
    controller: &DialogueController,
    transcriber: &dyn Transcriber,
    synthesizer: &dyn Synthesizer,
    config: &AssistantConfig,
) -> CallSession {
    let mut session =
        CallSession::with_greeting(&config.welcome_message, config.silence_nudge_after);
    tracing::info!(session_id = %session.id(), "conversation started");
    say(synthesizer, &config.welcome_message).await;

    loop {
        let heard = match transcriber.listen(LISTEN_PROMPT).await {
            Ok(text) => text,
            Err(SpeechError::Closed) => {
                tracing::info!("speech input closed");
                break;
            }
            Err(e) => {
                tracing::error!(error = %e, "transcription failed");
                break;
            }
        };

        let heard = heard.trim();
        if heard.is_empty() {
            tracing::debug!(silences = session.silence_count() + 1, "no speech detected");
            if let Some(nudge) = session.register_silence() {
                say(synthesizer, nudge).await;
            }
            continue;
        }

        let turn = session.take_turn(controller, heard);
        tracing::info!(intent = %turn.intent, "turn complete");
        say(synthesizer, &turn.response).await;

        if turn.ended {
            break;
        }
    }

    session.end();
    tracing::info!(
        session_id = %session.id(),
        messages = session.transcript().len(),
        "conversation ended"
    );
    session
}

/// Log how many bookings the ledger holds at startup.
///
/// An unreadable ledger is reported and tolerated: only later bookings
/// fail, each answered with an apology.
pub fn log_ledger_status(ledger: &BookingLedger) -> Option<usize> {
    match ledger.len() {
        Ok(count) => {
            tracing::info!(bookings = count, "ledger ready");
            Some(count)
        }
        Err(e) => {
            tracing::warn!(error = %e, "ledger unreadable, bookings will fail until it is repaired");
            None
        }
    }
}

async fn say(synthesizer: &dyn Synthesizer, text: &str) {
    if let Err(e) = synthesizer.speak(text).await {
        tracing::warn!(error = %e, "speech playback failed");
    }
}
