//! Gateway configuration loaded from environment variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`), with defaults suitable for the
//! campus deployment this dashboard was built for.

use std::net::SocketAddr;

/// Top-level gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Base URL of the external key-value store.
    pub store_base_url: String,

    /// Collection name holding sensor readings.
    pub readings_collection: String,

    /// Collection name holding citizen reports.
    pub reports_collection: String,

    /// Per-request timeout in seconds for store and geocoder calls.
    pub store_timeout_secs: u64,

    /// Maximum read attempts against the store (1 = no retries).
    pub store_max_retries: u32,

    /// Base URL of the reverse-geocoding service.
    pub geocode_base_url: String,

    /// Monitoring station latitude in decimal degrees.
    pub station_lat: f64,

    /// Monitoring station longitude in decimal degrees.
    pub station_lng: f64,

    /// Human-readable monitoring station name.
    pub station_name: String,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let store_base_url = std::env::var("STORE_BASE_URL").unwrap_or_else(|_| {
            "https://aerovant-monitoring-default-rtdb.asia-southeast1.firebasedatabase.app"
                .to_string()
        });

        let readings_collection =
            std::env::var("STORE_READINGS_PATH").unwrap_or_else(|_| "aerovant_readings".to_string());
        let reports_collection =
            std::env::var("STORE_REPORTS_PATH").unwrap_or_else(|_| "citizen_reports".to_string());

        let store_timeout_secs = parse_env("STORE_TIMEOUT_SECS", 10);
        let store_max_retries = parse_env("STORE_MAX_RETRIES", 3);

        let geocode_base_url = std::env::var("GEOCODE_BASE_URL")
            .unwrap_or_else(|_| "https://nominatim.openstreetmap.org".to_string());

        let station_lat = parse_env("STATION_LAT", 8.486071);
        let station_lng = parse_env("STATION_LNG", 124.656805);
        let station_name =
            std::env::var("STATION_NAME").unwrap_or_else(|_| "USTP Campus".to_string());

        Ok(Self {
            listen_addr,
            store_base_url,
            readings_collection,
            reports_collection,
            store_timeout_secs,
            store_max_retries,
            geocode_base_url,
            station_lat,
            station_lng,
            station_name,
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
