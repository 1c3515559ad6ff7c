//! Entity extraction for booking requests: model, day and clock time.

use std::sync::LazyLock;

use regex::Regex;
use sr_catalog::InventoryCatalog;
use sr_protocol::intent::{BookingDate, BookingEntities, DEFAULT_BOOKING_TIME};

/// 12-hour clock expression: hour 1–12 (optional leading zero), optional
/// `:MM`, optional whitespace, then `am`/`pm`. Word boundaries keep the
/// trailing digit of a token like "RAV4" from being read as an hour.
static RE_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b((?:1[0-2]|0?[1-9])(?::\d{2})?\s*(?:am|pm))\b").unwrap()
});

/// Extract all booking entities from a raw utterance.
pub fn extract_booking(text: &str, catalog: &InventoryCatalog) -> BookingEntities {
    let lower = text.to_lowercase();
    BookingEntities {
        model: select_model(&lower, catalog),
        date: extract_date(&lower),
        time: extract_time(text).unwrap_or_else(|| DEFAULT_BOOKING_TIME.to_string()),
    }
}

/// Pick the model to book from a lower-cased utterance.
///
/// A category mention wins and selects that category's first listed model,
/// whichever model the caller meant. Otherwise the first model (in catalog
/// order) whose name occurs anywhere in the text is chosen.
pub fn select_model(lower: &str, catalog: &InventoryCatalog) -> Option<String> {
    for category in catalog.categories() {
        if lower.contains(&category.to_lowercase())
            && let Some(first) = catalog.models_in(category).first()
        {
            return Some(first.model.clone());
        }
    }

    catalog
        .all_models()
        .find(|m| lower.contains(&m.model.to_lowercase()))
        .map(|m| m.model.clone())
}

/// "today" if mentioned, otherwise tomorrow.
pub fn extract_date(lower: &str) -> BookingDate {
    if lower.contains("today") {
        BookingDate::Today
    } else {
        BookingDate::Tomorrow
    }
}

/// First clock expression in the text, with the caller's casing preserved.
pub fn extract_time(text: &str) -> Option<String> {
    RE_CLOCK
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}
