//! Sensor-data DTOs.

use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters for `GET /sensor-data-range`.
///
/// Timestamps arrive as raw strings and are parsed in the handler so a
/// malformed date yields the gateway's own 400 body rather than an
/// extractor rejection.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct RangeParams {
    /// Inclusive range start, ISO-8601.
    #[serde(default)]
    pub start: Option<String>,
    /// Inclusive range end, ISO-8601.
    #[serde(default)]
    pub end: Option<String>,
}
