//! Read-only sensor data paths: latest reading and historical ranges.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::domain::reading::{SensorReading, StationLocation};
use crate::error::GatewayError;
use crate::store::StoreClient;

/// Read-only access to the sensor reading collection.
///
/// Readings are produced upstream; this service only fetches, filters,
/// and stamps the fixed station location onto what it serves. The
/// latest-reading path inherits the client's request timeout (10 s by
/// default) so a degraded store fails fast instead of hanging the
/// dashboard.
#[derive(Debug)]
pub struct SensorService {
    store: Arc<StoreClient>,
    collection: String,
    station: StationLocation,
}

impl SensorService {
    /// Creates a sensor service over `collection` in the given store.
    #[must_use]
    pub fn new(store: Arc<StoreClient>, collection: impl Into<String>, station: StationLocation) -> Self {
        Self {
            store,
            collection: collection.into(),
            station,
        }
    }

    fn collection_path(&self) -> String {
        format!("{}.json", self.collection)
    }

    /// Fetches the most recent reading via a tail read of the keyed
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] when the collection is empty
    /// and [`GatewayError::Upstream`] when the store stays unreachable
    /// or rate-limited after retries.
    pub async fn latest(&self) -> Result<SensorReading, GatewayError> {
        let data = self
            .store
            .get_json(
                &self.collection_path(),
                &[("orderBy", "\"$key\""), ("limitToLast", "1")],
            )
            .await?;

        let Some((_, raw)) = data.as_object().and_then(|map| map.iter().last()) else {
            return Err(GatewayError::NotFound("no sensor data available".to_string()));
        };

        let mut reading: SensorReading = serde_json::from_value(raw.clone())
            .map_err(|e| GatewayError::Upstream(format!("malformed sensor reading: {e}")))?;
        reading.location = Some(self.station.clone());
        Ok(reading)
    }

    /// Fetches all readings with `start <= timestamp <= end`, sorted by
    /// ascending timestamp.
    ///
    /// The store cannot filter by value, so this pulls the whole
    /// collection and filters locally. Malformed records are skipped
    /// with a warning rather than failing the whole range.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Upstream`] when the store is unreachable
    /// after retries.
    pub async fn range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<SensorReading>, GatewayError> {
        let data = self.store.get_json(&self.collection_path(), &[]).await?;

        let Some(map) = data.as_object() else {
            return Ok(Vec::new());
        };

        let readings = map
            .iter()
            .filter_map(|(key, raw)| {
                match serde_json::from_value::<SensorReading>(raw.clone()) {
                    Ok(reading) => Some(reading),
                    Err(err) => {
                        tracing::warn!(key, error = %err, "skipping malformed sensor reading");
                        None
                    }
                }
            })
            .collect();

        let mut filtered = in_range_sorted(readings, start, end);
        for reading in &mut filtered {
            reading.location = Some(self.station.clone());
        }
        Ok(filtered)
    }
}

/// Keeps readings within `[start, end]`, sorted ascending by timestamp.
fn in_range_sorted(
    readings: Vec<SensorReading>,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Vec<SensorReading> {
    let mut filtered: Vec<SensorReading> = readings
        .into_iter()
        .filter(|r| r.timestamp >= start && r.timestamp <= end)
        .collect();
    filtered.sort_by_key(|r| r.timestamp);
    filtered
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::reading::{Classification, EnvironmentBlock, GasReadings, MlPrediction};

    fn reading_at(rfc3339: &str) -> SensorReading {
        let Ok(timestamp) = rfc3339.parse::<DateTime<Utc>>() else {
            panic!("test timestamps are valid");
        };
        SensorReading {
            timestamp,
            readings: GasReadings {
                mq135_ppm: 1.0,
                mq2_ppm: 0.5,
                mq3_ppm: 0.1,
                mq6_ppm: 0.2,
                mq9_ppm: 0.3,
            },
            environment: EnvironmentBlock {
                temperature: 31.0,
                humidity: 70.0,
                env_index: None,
            },
            ml_prediction: MlPrediction {
                classification: Classification::Stable,
                confidence: None,
            },
            location: None,
        }
    }

    fn bounds(start: &str, end: &str) -> (DateTime<Utc>, DateTime<Utc>) {
        let (Ok(start), Ok(end)) = (start.parse(), end.parse()) else {
            panic!("test timestamps are valid");
        };
        (start, end)
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let readings = vec![
            reading_at("2025-03-01T00:00:00Z"),
            reading_at("2025-03-01T06:00:00Z"),
            reading_at("2025-03-01T12:00:00Z"),
        ];
        let (start, end) = bounds("2025-03-01T00:00:00Z", "2025-03-01T06:00:00Z");
        let result = in_range_sorted(readings, start, end);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn results_are_sorted_ascending() {
        let readings = vec![
            reading_at("2025-03-01T12:00:00Z"),
            reading_at("2025-03-01T00:00:00Z"),
            reading_at("2025-03-01T06:00:00Z"),
        ];
        let (start, end) = bounds("2025-02-28T00:00:00Z", "2025-03-02T00:00:00Z");
        let result = in_range_sorted(readings, start, end);
        let times: Vec<_> = result.iter().map(|r| r.timestamp).collect();
        let mut sorted = times.clone();
        sorted.sort();
        assert_eq!(times, sorted);
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn empty_input_stays_empty() {
        let (start, end) = bounds("2025-03-01T00:00:00Z", "2025-03-02T00:00:00Z");
        assert!(in_range_sorted(Vec::new(), start, end).is_empty());
    }
}
