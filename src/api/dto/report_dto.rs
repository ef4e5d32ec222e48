//! Report-related DTOs for submit, update, and delete operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::report::{CitizenReport, MessageSender, NewReport, ReportStatus, ReportType};

/// Request body for `POST /reports`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitReportRequest {
    /// Free-text description of the affected area.
    #[serde(default)]
    pub location: Option<String>,
    /// Latitude in decimal degrees. Required.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees. Required.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Reporter-chosen category.
    #[serde(default)]
    pub report_type: ReportType,
    /// Free-text observation notes. Required, non-empty.
    #[serde(default)]
    pub notes: Option<String>,
    /// Optional reporter name.
    #[serde(default)]
    pub reporter_name: Option<String>,
    /// Optional reporter contact.
    #[serde(default)]
    pub reporter_contact: Option<String>,
    /// Optional reporter phone number.
    #[serde(default)]
    pub reporter_phone: Option<String>,
}

impl From<SubmitReportRequest> for NewReport {
    fn from(req: SubmitReportRequest) -> Self {
        Self {
            location: req.location,
            latitude: req.latitude,
            longitude: req.longitude,
            report_type: req.report_type,
            notes: req.notes,
            reporter_name: req.reporter_name,
            reporter_contact: req.reporter_contact,
            reporter_phone: req.reporter_phone,
        }
    }
}

/// Response body for `POST /reports` (201 Created).
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitReportResponse {
    /// Always true on the success path.
    pub success: bool,
    /// Store-assigned record identifier.
    pub id: String,
    /// The record as stored, with defaults applied.
    pub report: CitizenReport,
}

/// One message to append via `PATCH /reports`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddMessageRequest {
    /// Message text.
    pub message: String,
    /// Author tag.
    pub sender: MessageSender,
    /// Message time; defaults to the server clock when omitted.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Request body for `PATCH /reports`.
///
/// Exactly which patch runs depends on which optional fields are set:
/// `status` patches the lifecycle state, `deployed` (with its date and
/// notes) patches the deployment block, and `add_message` appends to
/// the message thread.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateReportRequest {
    /// Identifier of the report to patch. Required.
    #[serde(default)]
    pub report_id: Option<String>,
    /// New lifecycle state.
    #[serde(default)]
    pub status: Option<ReportStatus>,
    /// New deployment flag.
    #[serde(default)]
    pub deployed: Option<bool>,
    /// Deployment date; ignored unless `deployed` is true.
    #[serde(default)]
    pub deployment_date: Option<DateTime<Utc>>,
    /// Deployment notes; ignored unless `deployed` is true.
    #[serde(default)]
    pub deployment_notes: Option<String>,
    /// Message to append to the thread.
    #[serde(default)]
    pub add_message: Option<AddMessageRequest>,
}

/// Query parameters for `DELETE /reports`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DeleteReportParams {
    /// Identifier of the report to delete. Required.
    #[serde(default)]
    pub id: Option<String>,
}

/// Generic `{"success": true}` acknowledgment.
#[derive(Debug, Serialize, ToSchema)]
pub struct SuccessResponse {
    /// Whether the operation succeeded.
    pub success: bool,
}
