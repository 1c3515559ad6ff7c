//! Intent resolution for dealership utterances.
//!
//! Turns free text ("book a RAV4 Hybrid today at 3pm") into a
//! `ParsedIntent`: one of booking / info / greeting / farewell / unknown,
//! plus the model, date and time for bookings.

pub mod entities;
pub mod rules;

use sr_catalog::InventoryCatalog;
use sr_protocol::intent::ParsedIntent;

/// Trait for engines that classify an utterance against the inventory.
pub trait IntentEngine: Send + Sync {
    /// Resolve `text` to exactly one intent. Never fails: input that
    /// matches nothing resolves to `Intent::Unknown`.
    fn parse(&self, text: &str, catalog: &InventoryCatalog) -> ParsedIntent;

    /// Name of this engine (for logging).
    fn tier_name(&self) -> &str;
}

pub use rules::RuleBasedEngine;
