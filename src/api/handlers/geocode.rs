//! Reverse-geocoding proxy handler.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::GeocodeParams;
use crate::app_state::AppState;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /geocode?lat=&lng=` — Reverse-geocode a coordinate pair.
///
/// On upstream failure the body carries the raw coordinates so the
/// dashboard can still show something useful.
///
/// # Errors
///
/// Returns [`GatewayError::Validation`] when either coordinate is
/// missing.
#[utoipa::path(
    get,
    path = "/api/v1/geocode",
    tag = "Geocoding",
    summary = "Reverse-geocode a coordinate pair",
    description = "Proxies the lookup to the configured reverse-geocoding service and returns its response verbatim.",
    params(GeocodeParams),
    responses(
        (status = 200, description = "Geocoder response", body = serde_json::Value),
        (status = 400, description = "Missing latitude or longitude", body = ErrorResponse),
        (status = 500, description = "Geocoder unreachable", body = ErrorResponse),
    )
)]
pub async fn reverse_geocode(
    State(state): State<AppState>,
    Query(params): Query<GeocodeParams>,
) -> Result<Response, GatewayError> {
    let (Some(lat), Some(lng)) = (params.lat, params.lng) else {
        return Err(GatewayError::Validation(
            "missing latitude or longitude".to_string(),
        ));
    };

    match state.geocode.reverse(&lat, &lng).await {
        Ok(body) => Ok(Json(body).into_response()),
        Err(err) => {
            tracing::warn!(lat, lng, error = %err, "reverse geocoding failed");
            let body = serde_json::json!({
                "error": "failed to reverse geocode location",
                "coordinates": format!("{lat}, {lng}"),
            });
            Ok((StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response())
        }
    }
}

/// Geocoding routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/geocode", get(reverse_geocode))
}
