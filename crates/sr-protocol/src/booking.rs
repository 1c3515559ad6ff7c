use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// A persisted test-drive reservation.
///
/// Bookings are append-only: created once by the ledger, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    /// Sequential identifier, 1-based.
    pub id: u64,
    /// Model name as recognized in the catalog (or as supplied by the caller).
    pub car_model: String,
    /// Day vocabulary: "today" or "tomorrow".
    pub date: String,
    /// Clock expression, e.g. "2 PM" or "10:30am".
    pub time: String,
    /// When the booking was written to the ledger. Written as RFC 3339;
    /// timestamps without an offset are read as UTC.
    #[serde(deserialize_with = "lenient_timestamp")]
    pub created_at: DateTime<Utc>,
}

/// Accepts RFC 3339 as well as ISO-8601 local timestamps such as
/// `2025-06-01T10:15:30.123456`.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).ok_or_else(|| {
        serde::de::Error::custom(format!("invalid created_at timestamp: {raw}"))
    })
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Some(ts.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Fields supplied by the caller when requesting a new booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub car_model: String,
    pub date: String,
    pub time: String,
}

impl NewBooking {
    pub fn new(
        car_model: impl Into<String>,
        date: impl Into<String>,
        time: impl Into<String>,
    ) -> Self {
        Self {
            car_model: car_model.into(),
            date: date.into(),
            time: time.into(),
        }
    }

    /// Stamp the request with its ledger id and creation time.
    pub fn into_booking(self, id: u64, created_at: DateTime<Utc>) -> Booking {
        Booking {
            id,
            car_model: self.car_model,
            date: self.date,
            time: self.time,
            created_at,
        }
    }
}
