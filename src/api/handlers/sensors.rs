//! Sensor data handlers: latest reading and historical range.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{DateTime, Utc};

use crate::api::dto::RangeParams;
use crate::app_state::AppState;
use crate::domain::reading::SensorReading;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /sensor-data` — Latest sensor reading.
///
/// # Errors
///
/// Returns [`GatewayError::NotFound`] when the store holds no readings
/// and [`GatewayError::Upstream`] when it stays unreachable after
/// retries.
#[utoipa::path(
    get,
    path = "/api/v1/sensor-data",
    tag = "Sensors",
    summary = "Latest sensor reading",
    description = "Returns the most recent reading with the station location attached. Aborts after the configured timeout and retries with backoff when the store is rate-limited.",
    responses(
        (status = 200, description = "Latest reading", body = SensorReading),
        (status = 404, description = "No sensor data available", body = ErrorResponse),
        (status = 500, description = "Store unreachable after retries", body = ErrorResponse),
    )
)]
pub async fn latest_reading(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, GatewayError> {
    let reading = state.sensors.latest().await?;
    Ok(Json(reading))
}

/// `GET /sensor-data-range?start=&end=` — Readings within a time range.
///
/// # Errors
///
/// Returns [`GatewayError::Validation`] on missing or malformed dates
/// and [`GatewayError::Upstream`] when the store is unreachable.
#[utoipa::path(
    get,
    path = "/api/v1/sensor-data-range",
    tag = "Sensors",
    summary = "Readings within a time range",
    description = "Returns readings with start <= timestamp <= end, sorted by ascending timestamp.",
    params(RangeParams),
    responses(
        (status = 200, description = "Ordered readings", body = Vec<SensorReading>),
        (status = 400, description = "Missing or malformed dates", body = ErrorResponse),
        (status = 500, description = "Store unreachable", body = ErrorResponse),
    )
)]
pub async fn reading_range(
    State(state): State<AppState>,
    Query(params): Query<RangeParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let (Some(start), Some(end)) = (params.start, params.end) else {
        return Err(GatewayError::Validation(
            "start and end dates are required".to_string(),
        ));
    };

    let start: DateTime<Utc> = start
        .parse()
        .map_err(|_| GatewayError::Validation("invalid date format".to_string()))?;
    let end: DateTime<Utc> = end
        .parse()
        .map_err(|_| GatewayError::Validation("invalid date format".to_string()))?;

    let readings = state.sensors.range(start, end).await?;
    Ok(Json(readings))
}

/// Sensor data routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/sensor-data", get(latest_reading))
        .route("/sensor-data-range", get(reading_range))
}
