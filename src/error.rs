//! Gateway error types with HTTP status code mapping.
//!
//! [`GatewayError`] is the central error type for the gateway. Each
//! variant maps to an HTTP status code, and every failure response
//! carries the JSON body `{"error": "..."}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// JSON error response body.
///
/// All failure responses follow this shape:
/// ```json
/// { "error": "update failed", "details": "store returned status 503" }
/// ```
///
/// Client errors (400/404) carry the whole message in `error`; server
/// errors put a short summary in `error` and the underlying cause in
/// `details`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
    /// Underlying cause, present on server errors.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Server-side error enum with HTTP status code mapping.
///
/// Read paths that feed the dashboard deliberately fail open (see
/// [`crate::service::ReportService::list`]) and never produce one of
/// these; everywhere else errors surface to the client.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request validation failed: missing or invalid required fields.
    #[error("invalid request: {0}")]
    Validation(String),

    /// The referenced record or data set does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The external store is unreachable, rate-limited, or returned a
    /// malformed payload (after retries on read paths).
    #[error("upstream store error: {0}")]
    Upstream(String),

    /// A record patch was rejected by the store.
    #[error("update failed: {0}")]
    Update(String),

    /// A record removal was rejected by the store.
    #[error("delete failed: {0}")]
    Delete(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Update(_) | Self::Delete(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (error, details) = match self {
            Self::Validation(_) | Self::NotFound(_) => (self.to_string(), None),
            Self::Upstream(cause) => ("upstream store error".to_string(), Some(cause)),
            Self::Update(cause) => ("update failed".to_string(), Some(cause)),
            Self::Delete(cause) => ("delete failed".to_string(), Some(cause)),
            Self::Internal(cause) => ("internal error".to_string(), Some(cause)),
        };
        let mut response = axum::Json(ErrorResponse { error, details }).into_response();
        *response.status_mut() = status;
        response
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_400() {
        let err = GatewayError::Validation("missing notes".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        let err = GatewayError::NotFound("report r1".to_string());
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn upstream_failures_map_to_500() {
        for err in [
            GatewayError::Upstream("timeout".to_string()),
            GatewayError::Update("rejected".to_string()),
            GatewayError::Delete("rejected".to_string()),
            GatewayError::Internal("oops".to_string()),
        ] {
            assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn response_body_is_a_flat_error_string() {
        let err = GatewayError::Validation("missing notes".to_string());
        let Ok(body) = serde_json::to_value(ErrorResponse {
            error: err.to_string(),
            details: None,
        }) else {
            panic!("serialization failed");
        };
        assert_eq!(
            body,
            serde_json::json!({ "error": "invalid request: missing notes" })
        );
    }

    #[tokio::test]
    async fn server_errors_carry_the_cause_in_details() {
        let response =
            GatewayError::Update("store returned status 503".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(body) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body is not JSON");
        };
        assert_eq!(body.get("error"), Some(&serde_json::json!("update failed")));
        assert_eq!(
            body.get("details"),
            Some(&serde_json::json!("store returned status 503"))
        );
    }

    #[tokio::test]
    async fn client_errors_have_no_details() {
        let response = GatewayError::Validation("missing notes".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(body) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body is not JSON");
        };
        assert_eq!(
            body,
            serde_json::json!({ "error": "invalid request: missing notes" })
        );
    }
}
