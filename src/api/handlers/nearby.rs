//! Proximity search handler.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::NearbyParams;
use crate::app_state::AppState;
use crate::domain::geo::{NearbyReport, nearby_reports};
use crate::error::{ErrorResponse, GatewayError};

/// Radius applied when the caller does not supply one.
const DEFAULT_RADIUS_KM: f64 = 10.0;

/// `GET /nearby-reports?lat=&lon=&radius=` — Reports near a point.
///
/// # Errors
///
/// Returns [`GatewayError::Validation`] on missing or non-numeric
/// parameters.
#[utoipa::path(
    get,
    path = "/api/v1/nearby-reports",
    tag = "Reports",
    summary = "Reports within a radius of a point",
    description = "Filters reports by great-circle distance from the origin and annotates each survivor with distance_km. Reports without coordinates are excluded. Radius defaults to 10 km.",
    params(NearbyParams),
    responses(
        (status = 200, description = "Nearby reports in input order", body = Vec<NearbyReport>),
        (status = 400, description = "Missing or invalid parameters", body = ErrorResponse),
    )
)]
pub async fn nearby(
    State(state): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let (Some(lat), Some(lon)) = (params.lat, params.lon) else {
        return Err(GatewayError::Validation(
            "latitude and longitude are required".to_string(),
        ));
    };

    let latitude = parse_coordinate(&lat)?;
    let longitude = parse_coordinate(&lon)?;
    let radius_km = match params.radius {
        Some(radius) => parse_coordinate(&radius)?,
        None => DEFAULT_RADIUS_KM,
    };

    let reports = state.reports.list().await;
    Ok(Json(nearby_reports(reports, latitude, longitude, radius_km)))
}

fn parse_coordinate(raw: &str) -> Result<f64, GatewayError> {
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| GatewayError::Validation("invalid parameters".to_string()))
}

/// Proximity search routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/nearby-reports", get(nearby))
}
