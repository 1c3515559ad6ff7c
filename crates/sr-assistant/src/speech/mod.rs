//! Speech collaborators: listen for an utterance, speak a reply.
//!
//! Audio capture, transcription and synthesis live outside this crate.
//! The assistant only sees these two traits. Console and scripted
//! implementations are provided for the CLI and for tests.

pub mod console;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from speech collaborators.
#[derive(Debug, Error)]
pub enum SpeechError {
    /// The input side has no more utterances (EOF, hang-up).
    #[error("speech input closed")]
    Closed,

    #[error("speech I/O error: {0}")]
    Io(String),
}

/// Convenience alias for speech results.
pub type SpeechResult<T> = Result<T, SpeechError>;

/// Produces the next user utterance as text.
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// Block until the user says something. An empty string means no
    /// speech was detected.
    async fn listen(&self, prompt: &str) -> SpeechResult<String>;
}

/// Delivers a reply to the user.
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn speak(&self, text: &str) -> SpeechResult<()>;
}

pub use console::{ConsoleSynthesizer, ConsoleTranscriber};
pub use mock::{RecordingSynthesizer, ScriptedTranscriber};
