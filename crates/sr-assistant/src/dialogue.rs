//! Dialogue controller: one utterance in, one natural-language reply out.
//!
//! Composes the intent engine, the inventory catalog and the booking
//! ledger. Holds no per-conversation state: every turn is resolved from its
//! own text.

use std::sync::Arc;

use sr_catalog::InventoryCatalog;
use sr_ledger::BookingLedger;
use sr_protocol::booking::NewBooking;
use sr_protocol::intent::{BookingEntities, Intent};
use sr_protocol::turn::TurnResponse;

use crate::inference::{IntentEngine, RuleBasedEngine};

pub const GREETING_REPLY: &str =
    "Hello! I can help you book a test drive. What kind of car are you interested in?";
pub const FAREWELL_REPLY: &str = "Goodbye! Have a great day.";
pub const FALLBACK_REPLY: &str = "I'm sorry, I didn't quite catch that. You can ask me to book a test drive or list available cars.";
pub const BOOKING_FAILED_REPLY: &str = "I'm sorry, I encountered an error saving your booking.";
pub const CLARIFY_MODEL_REPLY: &str =
    "Which car model would you like to book? We have SUVs and Sedans.";

/// Request/response turn handler for the dealership assistant.
pub struct DialogueController {
    catalog: Arc<InventoryCatalog>,
    ledger: Arc<BookingLedger>,
    engine: Box<dyn IntentEngine>,
}

impl DialogueController {
    /// Controller using the rule-based engine.
    pub fn new(catalog: Arc<InventoryCatalog>, ledger: Arc<BookingLedger>) -> Self {
        Self::with_engine(catalog, ledger, Box::new(RuleBasedEngine::new()))
    }

    pub fn with_engine(
        catalog: Arc<InventoryCatalog>,
        ledger: Arc<BookingLedger>,
        engine: Box<dyn IntentEngine>,
    ) -> Self {
        Self {
            catalog,
            ledger,
            engine,
        }
    }

    /// The turn interface: reply text for one utterance. Never fails.
    pub fn process(&self, utterance: &str) -> String {
        self.handle(utterance).response
    }

    /// Like `process`, also reporting the resolved intent and whether the
    /// reply ends the conversation.
    pub fn handle(&self, utterance: &str) -> TurnResponse {
        let parsed = self.engine.parse(utterance, &self.catalog);
        tracing::debug!(
            engine = self.engine.tier_name(),
            intent = %parsed.intent,
            "utterance resolved"
        );

        let response = match parsed.intent {
            Intent::Booking => self.reply_booking(parsed.booking.unwrap_or_default()),
            Intent::Info => self.reply_info(&utterance.to_lowercase()),
            Intent::Greeting => GREETING_REPLY.to_string(),
            Intent::Farewell => FAREWELL_REPLY.to_string(),
            Intent::Unknown => FALLBACK_REPLY.to_string(),
        };

        TurnResponse {
            ended: is_goodbye(&response),
            response,
            intent: parsed.intent,
        }
    }

    pub fn catalog(&self) -> &InventoryCatalog {
        &self.catalog
    }

    pub fn ledger(&self) -> &BookingLedger {
        &self.ledger
    }

    fn reply_booking(&self, entities: BookingEntities) -> String {
        let Some(model) = entities.model else {
            return CLARIFY_MODEL_REPLY.to_string();
        };

        let date = entities.date.as_str();
        let request = NewBooking::new(model.as_str(), date, entities.time.as_str());
        match self.ledger.create(request) {
            Ok(_) => format!(
                "Great! I have booked a test drive for the {model} for {date} at {}.",
                entities.time
            ),
            Err(e) => {
                tracing::warn!(car_model = %model, error = %e, "booking not saved");
                BOOKING_FAILED_REPLY.to_string()
            }
        }
    }

    fn reply_info(&self, lower: &str) -> String {
        let categories = self.catalog.categories();

        for category in &categories {
            if lower.contains(&category.to_lowercase()) {
                let names: Vec<&str> = self
                    .catalog
                    .models_in(category)
                    .iter()
                    .map(|m| m.model.as_str())
                    .collect();
                return format!(
                    "We have the following {category}s available: {}.",
                    names.join(", ")
                );
            }
        }

        format!(
            "We have the following categories: {}. Which one are you interested in?",
            categories.join(", ")
        )
    }
}

/// Whether a reply closes the conversation.
pub fn is_goodbye(reply: &str) -> bool {
    reply.to_lowercase().contains("goodbye")
}
