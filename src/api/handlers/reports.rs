//! Citizen report CRUD handlers: list, submit, patch, delete.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};

use crate::api::dto::{
    DeleteReportParams, SubmitReportRequest, SubmitReportResponse, SuccessResponse,
    UpdateReportRequest,
};
use crate::app_state::AppState;
use crate::domain::report::CitizenReport;
use crate::error::{ErrorResponse, GatewayError};

/// `GET /reports` — List all citizen reports.
///
/// Fail-open read path: store failures are logged and an empty list is
/// served so the dashboard keeps rendering.
#[utoipa::path(
    get,
    path = "/api/v1/reports",
    tag = "Reports",
    summary = "List all citizen reports",
    description = "Returns every report in the store, in store iteration order. Serves an empty list when the store is unreachable.",
    responses(
        (status = 200, description = "Report list", body = Vec<CitizenReport>),
    )
)]
pub async fn list_reports(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.reports.list().await)
}

/// `POST /reports` — Submit a new citizen report.
///
/// # Errors
///
/// Returns [`GatewayError::Validation`] when notes, latitude, or
/// longitude are missing.
#[utoipa::path(
    post,
    path = "/api/v1/reports",
    tag = "Reports",
    summary = "Submit a citizen report",
    description = "Validates the submission, assigns pending status and the current timestamp, and appends it to the store.",
    request_body = SubmitReportRequest,
    responses(
        (status = 201, description = "Report created", body = SubmitReportResponse),
        (status = 400, description = "Missing required fields", body = ErrorResponse),
        (status = 500, description = "Store rejected the write", body = ErrorResponse),
    )
)]
pub async fn submit_report(
    State(state): State<AppState>,
    Json(req): Json<SubmitReportRequest>,
) -> Result<impl IntoResponse, GatewayError> {
    let (id, report) = state.reports.submit(req.into()).await?;
    Ok((
        StatusCode::CREATED,
        Json(SubmitReportResponse {
            success: true,
            id,
            report,
        }),
    ))
}

/// `PATCH /reports` — Update status, deployment, or append a message.
///
/// The three patch kinds may be combined in one request; they run in
/// order (status, deployment, message). A message append returns the
/// updated report; the other patches return `{"success": true}`.
///
/// # Errors
///
/// Returns [`GatewayError::Validation`] when `report_id` is missing,
/// [`GatewayError::NotFound`] when the record does not exist, and
/// [`GatewayError::Update`] when the store rejects a write.
#[utoipa::path(
    patch,
    path = "/api/v1/reports",
    tag = "Reports",
    summary = "Patch a citizen report",
    description = "Patches the status attribute, the deployment block, or appends one message to the thread, depending on which request fields are set.",
    request_body = UpdateReportRequest,
    responses(
        (status = 200, description = "Patch applied", body = SuccessResponse),
        (status = 400, description = "Missing report_id", body = ErrorResponse),
        (status = 404, description = "Report not found", body = ErrorResponse),
        (status = 500, description = "Store rejected the write", body = ErrorResponse),
    )
)]
pub async fn update_report(
    State(state): State<AppState>,
    Json(req): Json<UpdateReportRequest>,
) -> Result<Response, GatewayError> {
    let Some(id) = req.report_id else {
        return Err(GatewayError::Validation("report id is required".to_string()));
    };

    if let Some(status) = req.status {
        state.reports.update_status(&id, status).await?;
    }

    if let Some(deployed) = req.deployed {
        state
            .reports
            .update_deployment(&id, deployed, req.deployment_date, req.deployment_notes)
            .await?;
    }

    if let Some(msg) = req.add_message {
        let report = state
            .reports
            .append_message(&id, msg.message, msg.sender, msg.timestamp)
            .await?;
        return Ok(Json(report).into_response());
    }

    Ok(Json(SuccessResponse { success: true }).into_response())
}

/// `DELETE /reports?id=` — Remove a report.
///
/// # Errors
///
/// Returns [`GatewayError::Validation`] when `id` is missing and
/// [`GatewayError::Delete`] when the store rejects the operation.
#[utoipa::path(
    delete,
    path = "/api/v1/reports",
    tag = "Reports",
    summary = "Delete a citizen report",
    description = "Removes the record by identifier.",
    params(DeleteReportParams),
    responses(
        (status = 200, description = "Report deleted", body = SuccessResponse),
        (status = 400, description = "Missing id", body = ErrorResponse),
        (status = 500, description = "Store rejected the delete", body = ErrorResponse),
    )
)]
pub async fn delete_report(
    State(state): State<AppState>,
    Query(params): Query<DeleteReportParams>,
) -> Result<impl IntoResponse, GatewayError> {
    let Some(id) = params.id else {
        return Err(GatewayError::Validation("report id is required".to_string()));
    };

    if state.reports.delete(&id).await {
        Ok(Json(SuccessResponse { success: true }))
    } else {
        Err(GatewayError::Delete("failed to delete report".to_string()))
    }
}

/// Report management routes.
pub fn routes() -> Router<AppState> {
    Router::new().route(
        "/reports",
        get(list_reports)
            .post(submit_report)
            .patch(update_report)
            .delete(delete_report),
    )
}
