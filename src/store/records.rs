//! Wire-schema adapter between the external store and the internal
//! report model.
//!
//! The store's attribute names predate this service and differ from the
//! internal model: `description` holds the report notes and
//! `location_area` the location text. This module is the only place
//! that mapping exists, in both directions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::report::{
    CitizenReport, NewReport, ReportMessage, ReportStatus, ReportType,
};

/// A citizen report as persisted in the external store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredReport {
    /// Report notes. Internal name: `notes`.
    pub description: String,
    /// Location text. Internal name: `location`.
    #[serde(default)]
    pub location_area: Option<String>,
    /// Latitude in decimal degrees.
    #[serde(default)]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees.
    #[serde(default)]
    pub longitude: Option<f64>,
    /// Reporter-chosen category.
    #[serde(default)]
    pub report_type: ReportType,
    /// Optional reporter name; stored as an explicit null when absent.
    #[serde(default)]
    pub reporter_name: Option<String>,
    /// Optional reporter contact.
    #[serde(default)]
    pub reporter_contact: Option<String>,
    /// Optional reporter phone number.
    #[serde(default)]
    pub reporter_phone: Option<String>,
    /// Submission time.
    pub timestamp: DateTime<Utc>,
    /// Lifecycle state.
    #[serde(default)]
    pub status: ReportStatus,
    /// Deployment flag. Older records may lack it entirely.
    #[serde(default)]
    pub deployed: bool,
    /// Deployment date, non-null exactly when `deployed`.
    #[serde(default)]
    pub deployment_date: Option<DateTime<Utc>>,
    /// Deployment notes.
    #[serde(default)]
    pub deployment_notes: Option<String>,
    /// Message thread, oldest first.
    #[serde(default)]
    pub messages: Vec<ReportMessage>,
}

impl StoredReport {
    /// Builds the record persisted for a fresh submission: status
    /// `pending`, not deployed, empty message thread, timestamp `now`.
    ///
    /// Field validation (notes and coordinates present) is the caller's
    /// job; this only performs the name translation.
    #[must_use]
    pub fn from_submission(report: NewReport, now: DateTime<Utc>) -> Self {
        Self {
            description: report.notes.unwrap_or_default(),
            location_area: report.location,
            latitude: report.latitude,
            longitude: report.longitude,
            report_type: report.report_type,
            reporter_name: report.reporter_name,
            reporter_contact: report.reporter_contact,
            reporter_phone: report.reporter_phone,
            timestamp: now,
            status: ReportStatus::Pending,
            deployed: false,
            deployment_date: None,
            deployment_notes: None,
            messages: Vec::new(),
        }
    }

    /// Converts a stored record into the internal model, attaching the
    /// store-assigned identifier and applying the inverse name mapping.
    #[must_use]
    pub fn into_report(self, id: String) -> CitizenReport {
        CitizenReport {
            id,
            location: self.location_area,
            latitude: self.latitude,
            longitude: self.longitude,
            report_type: self.report_type,
            notes: self.description,
            timestamp: self.timestamp,
            status: self.status,
            reporter_name: self.reporter_name,
            reporter_contact: self.reporter_contact,
            reporter_phone: self.reporter_phone,
            deployed: self.deployed,
            deployment_date: self.deployment_date,
            deployment_notes: self.deployment_notes,
            messages: self.messages,
        }
    }
}
