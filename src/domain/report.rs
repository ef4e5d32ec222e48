//! Citizen report model: lifecycle status, typed tags, and the
//! append-only message thread.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Lifecycle state of a citizen report.
///
/// `Pending` is the only legal initial state. Any authorized actor may
/// move a report between any two states; the gateway does not restrict
/// transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    /// Newly submitted, not yet looked at.
    #[default]
    Pending,
    /// A stakeholder is actively following up.
    Investigating,
    /// The underlying issue was addressed.
    Resolved,
    /// Closed without action.
    Dismissed,
}

/// Category tag chosen by the reporter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    /// Visible smoke.
    Smoke,
    /// Unusual or strong odor.
    Odor,
    /// Airborne dust or particulates.
    Dust,
    /// Anything else.
    #[default]
    Other,
}

/// Who authored a message on a report thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum MessageSender {
    /// A human stakeholder following up on the report.
    Stakeholder,
    /// An automated notification.
    System,
}

/// One entry in a report's message thread.
///
/// Messages are append-only: no edits, no deletion of individual
/// messages. The `id` is unique within the parent report and assigned at
/// append time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportMessage {
    /// Identifier unique within the parent report.
    pub id: String,
    /// Message text.
    pub message: String,
    /// When the message was written.
    pub timestamp: DateTime<Utc>,
    /// Author tag.
    pub sender: MessageSender,
}

/// A citizen-submitted air-quality observation.
///
/// The store assigns `id` at creation and `timestamp` is immutable after
/// submission. A report without both coordinates can never participate
/// in proximity search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CitizenReport {
    /// Store-assigned record identifier.
    pub id: String,
    /// Free-text description of the affected area.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Latitude in decimal degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Reporter-chosen category.
    #[serde(default)]
    pub report_type: ReportType,
    /// Free-text observation notes. Always non-empty.
    pub notes: String,
    /// Submission time, set by the gateway.
    pub timestamp: DateTime<Utc>,
    /// Current lifecycle state.
    #[serde(default)]
    pub status: ReportStatus,
    /// Optional reporter name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_name: Option<String>,
    /// Optional reporter contact (email or similar).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_contact: Option<String>,
    /// Optional reporter phone number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reporter_phone: Option<String>,
    /// Whether a sensor was deployed in response to this report.
    #[serde(default)]
    pub deployed: bool,
    /// When the sensor was deployed. Non-null exactly when `deployed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_date: Option<DateTime<Utc>>,
    /// Stakeholder notes recorded with the deployment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployment_notes: Option<String>,
    /// Append-only message thread, oldest first.
    #[serde(default)]
    pub messages: Vec<ReportMessage>,
}

impl CitizenReport {
    /// Returns `(latitude, longitude)` when both coordinates are present.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Some((lat, lng)),
            _ => None,
        }
    }
}

/// A report as submitted by a citizen, before the gateway assigns
/// identifier, timestamp, and status.
///
/// `notes`, `latitude`, and `longitude` are required for a submission to
/// be accepted; everything else is optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewReport {
    /// Free-text description of the affected area.
    pub location: Option<String>,
    /// Latitude in decimal degrees.
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    pub longitude: Option<f64>,
    /// Reporter-chosen category.
    pub report_type: ReportType,
    /// Free-text observation notes.
    pub notes: Option<String>,
    /// Optional reporter name.
    pub reporter_name: Option<String>,
    /// Optional reporter contact.
    pub reporter_contact: Option<String>,
    /// Optional reporter phone number.
    pub reporter_phone: Option<String>,
}
