//! Terminal-backed speech: typed lines in, printed lines out.

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use super::{SpeechError, SpeechResult, Synthesizer, Transcriber};

/// Reads one line from stdin per `listen`.
pub struct ConsoleTranscriber {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl ConsoleTranscriber {
    pub fn new() -> Self {
        Self {
            lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()),
        }
    }
}

impl Default for ConsoleTranscriber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transcriber for ConsoleTranscriber {
    async fn listen(&self, prompt: &str) -> SpeechResult<String> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("[{prompt}] >> ").as_bytes())
            .await
            .map_err(|e| SpeechError::Io(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| SpeechError::Io(e.to_string()))?;

        match self.lines.lock().await.next_line().await {
            Ok(Some(line)) => Ok(line.trim().to_string()),
            Ok(None) => Err(SpeechError::Closed),
            Err(e) => Err(SpeechError::Io(e.to_string())),
        }
    }
}

/// Prints replies as `Agent: <text>`.
pub struct ConsoleSynthesizer;

#[async_trait]
impl Synthesizer for ConsoleSynthesizer {
    async fn speak(&self, text: &str) -> SpeechResult<()> {
        let mut stdout = tokio::io::stdout();
        stdout
            .write_all(format!("Agent: {text}\n").as_bytes())
            .await
            .map_err(|e| SpeechError::Io(e.to_string()))?;
        stdout
            .flush()
            .await
            .map_err(|e| SpeechError::Io(e.to_string()))
    }
}
