//! Sensor reading model and classification normalization.
//!
//! Readings are produced by an upstream sensing/ML pipeline and served
//! through this gateway unchanged, except that the polymorphic
//! classification field is collapsed into [`Classification`] at the
//! deserialization boundary so internal code never branches on the
//! external representation.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Air-quality classification produced by the upstream ML pipeline.
///
/// Upstream encodes this either as a numeric code (1 means stable, any
/// other value critical) or as a string label. Both forms deserialize
/// into this enum; serialization is always the lowercase string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Air quality within normal bounds.
    Stable,
    /// Abnormal readings detected upstream.
    Critical,
}

impl<'de> Deserialize<'de> for Classification {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match value {
            serde_json::Value::Number(n) => {
                if n.as_i64() == Some(1) || n.as_f64() == Some(1.0) {
                    Ok(Self::Stable)
                } else {
                    Ok(Self::Critical)
                }
            }
            serde_json::Value::String(s) => {
                let trimmed = s.trim();
                if trimmed.eq_ignore_ascii_case("stable") || trimmed == "1" {
                    Ok(Self::Stable)
                } else {
                    Ok(Self::Critical)
                }
            }
            other => Err(D::Error::custom(format!(
                "classification must be a number or string, got {other}"
            ))),
        }
    }
}

/// Parts-per-million readings for the five fixed gas-sensor channels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GasReadings {
    /// MQ-135 channel (air quality / NH3, benzene).
    #[serde(rename = "MQ135_ppm")]
    pub mq135_ppm: f64,
    /// MQ-2 channel (smoke, LPG).
    #[serde(rename = "MQ2_ppm")]
    pub mq2_ppm: f64,
    /// MQ-3 channel (alcohol, ethanol).
    #[serde(rename = "MQ3_ppm")]
    pub mq3_ppm: f64,
    /// MQ-6 channel (LPG, butane).
    #[serde(rename = "MQ6_ppm")]
    pub mq6_ppm: f64,
    /// MQ-9 channel (CO, flammable gases).
    #[serde(rename = "MQ9_ppm")]
    pub mq9_ppm: f64,
}

/// Environmental block attached to each reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EnvironmentBlock {
    /// Ambient temperature in degrees Celsius.
    pub temperature: f64,
    /// Relative humidity in percent.
    pub humidity: f64,
    /// Derived environment index, computed upstream and passed through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_index: Option<f64>,
}

/// ML classification block attached to each reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MlPrediction {
    /// Normalized classification.
    pub classification: Classification,
    /// Model confidence in `[0, 1]` when reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

/// Fixed coordinates of the monitoring station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StationLocation {
    /// Station latitude in decimal degrees.
    pub latitude: f64,
    /// Station longitude in decimal degrees.
    pub longitude: f64,
    /// Human-readable station name.
    pub name: String,
}

/// One timestamped snapshot from the monitoring station.
///
/// Produced externally and read-only here. The gateway stamps the fixed
/// station location onto readings it serves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SensorReading {
    /// Measurement time.
    pub timestamp: DateTime<Utc>,
    /// The five gas channels.
    pub readings: GasReadings,
    /// Temperature, humidity, and derived index.
    pub environment: EnvironmentBlock,
    /// Upstream classification. Some producers emit the block under the
    /// key `mL_prediction`; both spellings are accepted.
    #[serde(alias = "mL_prediction")]
    pub ml_prediction: MlPrediction,
    /// Station location, stamped by the gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<StationLocation>,
}
