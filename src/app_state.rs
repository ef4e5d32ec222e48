//! Shared application state injected into all Axum handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::config::GatewayConfig;
use crate::domain::reading::StationLocation;
use crate::error::GatewayError;
use crate::service::{GeocodeService, ReportService, SensorService};
use crate::store::StoreClient;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Citizen report gateway.
    pub reports: Arc<ReportService>,
    /// Read-only sensor data paths.
    pub sensors: Arc<SensorService>,
    /// Reverse-geocoding proxy.
    pub geocode: Arc<GeocodeService>,
}

impl AppState {
    /// Builds the full service graph from configuration.
    ///
    /// One [`reqwest::Client`] (and thus one connection pool and one
    /// request timeout) is shared by the store client and the geocoding
    /// proxy; it is constructed here, explicitly, and handed down by
    /// reference.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Internal`] if the HTTP client cannot be
    /// constructed.
    pub fn from_config(config: &GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.store_timeout_secs))
            .build()
            .map_err(|e| GatewayError::Internal(format!("http client build failed: {e}")))?;

        let store = Arc::new(StoreClient::new(
            http.clone(),
            config.store_base_url.clone(),
            config.store_max_retries,
        ));

        let station = StationLocation {
            latitude: config.station_lat,
            longitude: config.station_lng,
            name: config.station_name.clone(),
        };

        Ok(Self {
            reports: Arc::new(ReportService::new(
                Arc::clone(&store),
                config.reports_collection.clone(),
            )),
            sensors: Arc::new(SensorService::new(
                store,
                config.readings_collection.clone(),
                station,
            )),
            geocode: Arc::new(GeocodeService::new(http, config.geocode_base_url.clone())),
        })
    }
}
