//! Proximity-search and geocoding DTOs.

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for `GET /nearby-reports`.
///
/// Coordinates arrive as raw strings and are parsed in the handler so
/// non-numeric input yields the gateway's own 400 body.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct NearbyParams {
    /// Origin latitude in decimal degrees. Required.
    #[serde(default)]
    pub lat: Option<String>,
    /// Origin longitude in decimal degrees. Required.
    #[serde(default)]
    pub lon: Option<String>,
    /// Search radius in kilometers. Defaults to 10.
    #[serde(default)]
    pub radius: Option<String>,
}

/// Query parameters for `GET /geocode`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct GeocodeParams {
    /// Latitude to reverse-geocode. Required.
    #[serde(default)]
    pub lat: Option<String>,
    /// Longitude to reverse-geocode. Required.
    #[serde(default)]
    pub lng: Option<String>,
}
