//! Scripted speech doubles for testing the voice loop.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use super::{SpeechError, SpeechResult, Synthesizer, Transcriber};

/// Returns queued utterances in order, then reports `Closed`.
/// An empty string in the script simulates silence.
pub struct ScriptedTranscriber {
    script: Mutex<VecDeque<String>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedTranscriber {
    pub fn new<I, S>(script: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            script: Mutex::new(script.into_iter().map(Into::into).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Number of utterances not yet consumed.
    pub fn remaining(&self) -> usize {
        self.script.lock().unwrap().len()
    }

    /// Prompts passed to `listen`, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transcriber for ScriptedTranscriber {
    async fn listen(&self, prompt: &str) -> SpeechResult<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .ok_or(SpeechError::Closed)
    }
}

/// Records everything it is asked to speak.
pub struct RecordingSynthesizer {
    spoken: Mutex<Vec<String>>,
    fail: AtomicBool,
}

impl RecordingSynthesizer {
    pub fn new() -> Self {
        Self {
            spoken: Mutex::new(Vec::new()),
            fail: AtomicBool::new(false),
        }
    }

    /// A synthesizer whose every `speak` fails (text is still recorded).
    pub fn failing() -> Self {
        let s = Self::new();
        s.fail.store(true, Ordering::SeqCst);
        s
    }

    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }

    pub fn last_spoken(&self) -> Option<String> {
        self.spoken.lock().unwrap().last().cloned()
    }
}

impl Default for RecordingSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Synthesizer for RecordingSynthesizer {
    async fn speak(&self, text: &str) -> SpeechResult<()> {
        self.spoken.lock().unwrap().push(text.to_string());
        if self.fail.load(Ordering::SeqCst) {
            return Err(SpeechError::Io("simulated playback failure".into()));
        }
        Ok(())
    }
}
