use serde::{Deserialize, Serialize};

/// Coarse action inferred from an utterance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    /// Reserve a test drive.
    Booking,
    /// Browse the inventory.
    Info,
    Greeting,
    Farewell,
    /// Nothing matched. Not an error.
    Unknown,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Booking => "booking",
            Self::Info => "info",
            Self::Greeting => "greeting",
            Self::Farewell => "farewell",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Day requested for a test drive. Only two words are recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingDate {
    Today,
    #[default]
    Tomorrow,
}

impl BookingDate {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
        }
    }
}

impl std::fmt::Display for BookingDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time used when the utterance carries no clock expression.
pub const DEFAULT_BOOKING_TIME: &str = "10 AM";

/// Entities pulled out of a booking request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingEntities {
    /// Resolved catalog model, `None` when nothing matched.
    pub model: Option<String>,
    #[serde(default)]
    pub date: BookingDate,
    pub time: String,
}

impl Default for BookingEntities {
    fn default() -> Self {
        Self {
            model: None,
            date: BookingDate::default(),
            time: DEFAULT_BOOKING_TIME.to_string(),
        }
    }
}

/// Result of intent resolution for one utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedIntent {
    pub intent: Intent,
    /// Present only for `Intent::Booking`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookingEntities>,
}

impl ParsedIntent {
    pub fn simple(intent: Intent) -> Self {
        Self {
            intent,
            booking: None,
        }
    }

    pub fn booking(entities: BookingEntities) -> Self {
        Self {
            intent: Intent::Booking,
            booking: Some(entities),
        }
    }
}
