//! Rule-based intent engine: ordered keyword matching.
//!
//! Each intent owns a keyword list; the first list with a substring hit
//! wins, tested booking → info → greeting → farewell. Matching is by
//! substring, so "hi" inside "this" counts as a greeting.

use sr_catalog::InventoryCatalog;
use sr_protocol::intent::{Intent, ParsedIntent};

use super::IntentEngine;
use super::entities::extract_booking;

const BOOKING_KEYWORDS: &[&str] = &["book", "schedule", "test drive"];
const INFO_KEYWORDS: &[&str] = &["available", "what cars", "show me"];
const GREETING_KEYWORDS: &[&str] = &["hello", "hi"];
const FAREWELL_KEYWORDS: &[&str] = &["exit", "bye", "quit"];

/// Keyword-driven intent engine.
pub struct RuleBasedEngine;

impl RuleBasedEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RuleBasedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentEngine for RuleBasedEngine {
    fn parse(&self, text: &str, catalog: &InventoryCatalog) -> ParsedIntent {
        let lower = text.to_lowercase();
        match classify(&lower) {
            Intent::Booking => ParsedIntent::booking(extract_booking(text, catalog)),
            other => ParsedIntent::simple(other),
        }
    }

    fn tier_name(&self) -> &str {
        "rules"
    }
}

/// Classify an already lower-cased utterance.
pub fn classify(lower: &str) -> Intent {
    if matches_any(lower, BOOKING_KEYWORDS) {
        Intent::Booking
    } else if matches_any(lower, INFO_KEYWORDS) {
        Intent::Info
    } else if matches_any(lower, GREETING_KEYWORDS) {
        Intent::Greeting
    } else if matches_any(lower, FAREWELL_KEYWORDS) {
        Intent::Farewell
    } else {
        Intent::Unknown
    }
}

/// Check if the text contains any of the given patterns.
fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| text.contains(p))
}
