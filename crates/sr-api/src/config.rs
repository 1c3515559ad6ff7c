//! API server configuration.

use std::path::PathBuf;

/// HTTP server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Listen address (e.g., "0.0.0.0").
    pub host: String,
    /// Listen port.
    pub port: u16,
    /// Inventory dataset (JSON).
    pub catalog_path: PathBuf,
    /// Booking ledger (JSON).
    pub ledger_path: PathBuf,
    /// Seconds an ended call stays readable before it is dropped.
    pub session_retention_secs: i64,
}

impl ApiConfig {
    /// Load config from `SHOWROOM_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup; unset keys keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(host) = lookup("SHOWROOM_HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("SHOWROOM_PORT") {
            match port.parse() {
                Ok(p) => config.port = p,
                Err(_) => tracing::warn!(value = %port, "invalid SHOWROOM_PORT, using default"),
            }
        }
        if let Some(path) = lookup("SHOWROOM_CATALOG") {
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("SHOWROOM_LEDGER") {
            config.ledger_path = PathBuf::from(path);
        }
        if let Some(secs) = lookup("SHOWROOM_SESSION_RETENTION_SECS") {
            match secs.parse::<i64>() {
                Ok(s) if s >= 0 => config.session_retention_secs = s,
                _ => tracing::warn!(
                    value = %secs,
                    "invalid SHOWROOM_SESSION_RETENTION_SECS, using default"
                ),
            }
        }
        config
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            catalog_path: PathBuf::from("data/cars.json"),
            ledger_path: PathBuf::from("data/bookings.json"),
            session_retention_secs: 900,
        }
    }
}
