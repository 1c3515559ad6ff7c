//! Showroom: dealership voice assistant for the terminal.
//!
//! Loads the inventory and booking ledger, then runs one conversation
//! over the console speech collaborators until the caller says goodbye.

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use sr_assistant::config::AssistantConfig;
use sr_assistant::conversation::log_ledger_status;
use sr_assistant::conversation::run_conversation;
use sr_assistant::dialogue::DialogueController;
use sr_assistant::speech::{ConsoleSynthesizer, ConsoleTranscriber};
use sr_catalog::InventoryCatalog;
use sr_ledger::BookingLedger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the conversation; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .compact()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "showroom starting");

    // ── Load config ─────────────────────────────────────────────
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "showroom.toml".to_string());
    let config = AssistantConfig::load_or_default(&config_path)?;

    // ── Knowledge base + ledger ─────────────────────────────────
    let catalog = Arc::new(InventoryCatalog::load(&config.catalog_path));
    let ledger = Arc::new(BookingLedger::open(&config.ledger_path)?);
    log_ledger_status(&ledger);
    tracing::info!(categories = catalog.len(), "dialogue core ready");

    let controller = DialogueController::new(catalog, ledger);
    let transcriber = ConsoleTranscriber::new();
    let synthesizer = ConsoleSynthesizer;

    tokio::select! {
        session = run_conversation(&controller, &transcriber, &synthesizer, &config) => {
            tracing::info!(session_id = %session.id(), "call finished");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupted");
        }
    }

    tracing::info!("showroom stopped");
    Ok(())
}
