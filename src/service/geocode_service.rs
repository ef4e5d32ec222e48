//! Reverse-geocoding proxy.
//!
//! The dashboard's location picker needs human-readable addresses for
//! map clicks. Lookups are proxied through the gateway so the browser
//! never talks to the third-party geocoder directly.

use reqwest::header::USER_AGENT;

use crate::error::GatewayError;

/// Identifies this service to the upstream geocoder, as its usage
/// policy requires.
const GATEWAY_USER_AGENT: &str = "airq-gateway/0.1 (air quality monitoring)";

/// Proxy for a Nominatim-style reverse-geocoding service.
#[derive(Debug, Clone)]
pub struct GeocodeService {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeService {
    /// Creates a geocoding proxy against `base_url`.
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Looks up the address for the given coordinates.
    ///
    /// Coordinates are passed through as received; the upstream response
    /// is returned verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Upstream`] when the geocoder is
    /// unreachable or answers with a non-success status.
    pub async fn reverse(&self, lat: &str, lng: &str) -> Result<serde_json::Value, GatewayError> {
        let response = self
            .http
            .get(format!("{}/reverse", self.base_url))
            .query(&[
                ("format", "json"),
                ("lat", lat),
                ("lon", lng),
                ("zoom", "18"),
                ("addressdetails", "1"),
            ])
            .header(USER_AGENT, GATEWAY_USER_AGENT)
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(format!("geocoder request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(GatewayError::Upstream(format!(
                "geocoder returned status {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| GatewayError::Upstream(format!("malformed geocoder payload: {e}")))
    }
}
