//! Report store gateway: CRUD semantics over the external key-value
//! store.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::domain::report::{
    CitizenReport, MessageSender, NewReport, ReportMessage, ReportStatus,
};
use crate::error::GatewayError;
use crate::store::{StoreClient, StoredReport};

/// Gateway for all citizen-report operations.
///
/// Every mutation is a field-level patch against the store: read the
/// current record where needed, apply one change, write back. The store
/// provides no transactions, so message appends are serialized through
/// an in-process mutex; concurrent appends from separate processes can
/// still lose updates (last writer wins).
#[derive(Debug)]
pub struct ReportService {
    store: Arc<StoreClient>,
    collection: String,
    append_lock: Mutex<()>,
}

impl ReportService {
    /// Creates a report service over `collection` in the given store.
    #[must_use]
    pub fn new(store: Arc<StoreClient>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
            append_lock: Mutex::new(()),
        }
    }

    fn collection_path(&self) -> String {
        format!("{}.json", self.collection)
    }

    fn record_path(&self, id: &str) -> String {
        format!("{}/{id}.json", self.collection)
    }

    /// Validates and persists a fresh submission.
    ///
    /// Assigns `status = pending`, `deployed = false`, an empty message
    /// thread, and the current time. Returns the store-assigned
    /// identifier together with the stored record.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Validation`] when notes, latitude, or
    /// longitude are missing, and [`GatewayError::Upstream`] when the
    /// store rejects the write.
    pub async fn submit(&self, report: NewReport) -> Result<(String, CitizenReport), GatewayError> {
        let notes = clean(report.notes);
        if notes.is_none() || report.latitude.is_none() || report.longitude.is_none() {
            return Err(GatewayError::Validation(
                "missing required fields: notes, latitude, longitude".to_string(),
            ));
        }

        let report = NewReport {
            notes,
            location: clean(report.location),
            reporter_name: clean(report.reporter_name),
            reporter_contact: clean(report.reporter_contact),
            reporter_phone: clean(report.reporter_phone),
            ..report
        };

        let stored = StoredReport::from_submission(report, Utc::now());
        let body = serde_json::to_value(&stored)
            .map_err(|e| GatewayError::Internal(format!("serialization failed: {e}")))?;
        let result = self.store.post_json(&self.collection_path(), &body).await?;

        let id = result
            .get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                GatewayError::Upstream("store did not return a record identifier".to_string())
            })?
            .to_string();

        tracing::info!(id, "citizen report submitted");
        Ok((id.clone(), stored.into_report(id)))
    }

    /// Fetches the entire report collection.
    ///
    /// The store has no query capability, so this pulls the whole keyed
    /// object and converts it to a sequence in store iteration order
    /// (not guaranteed chronological). Fail-open by design: any fetch or
    /// parse error is logged and an empty sequence returned, so the
    /// dashboard keeps rendering while the store is degraded.
    pub async fn list(&self) -> Vec<CitizenReport> {
        let data = match self.store.get_json(&self.collection_path(), &[]).await {
            Ok(data) => data,
            Err(err) => {
                tracing::warn!(error = %err, "report listing failed, serving empty set");
                return Vec::new();
            }
        };

        let Some(map) = data.as_object() else {
            return Vec::new();
        };

        map.iter()
            .filter_map(|(id, raw)| {
                match serde_json::from_value::<StoredReport>(raw.clone()) {
                    Ok(stored) => Some(stored.into_report(id.clone())),
                    Err(err) => {
                        tracing::warn!(id, error = %err, "skipping malformed report record");
                        None
                    }
                }
            })
            .collect()
    }

    async fn fetch(&self, id: &str) -> Result<StoredReport, GatewayError> {
        let raw = self.store.get_json(&self.record_path(id), &[]).await?;
        if raw.is_null() {
            return Err(GatewayError::NotFound(format!("report {id}")));
        }
        serde_json::from_value(raw)
            .map_err(|e| GatewayError::Upstream(format!("malformed report record {id}: {e}")))
    }

    /// Patches only the status attribute of the named record.
    ///
    /// No validity check on the transition: any-to-any is accepted.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] when the record does not exist
    /// and [`GatewayError::Update`] when the store rejects the write.
    pub async fn update_status(
        &self,
        id: &str,
        status: ReportStatus,
    ) -> Result<(), GatewayError> {
        self.fetch(id).await?;
        self.store
            .patch_json(&self.record_path(id), &serde_json::json!({ "status": status }))
            .await
            .map_err(|e| GatewayError::Update(e.to_string()))?;
        tracing::info!(id, ?status, "report status updated");
        Ok(())
    }

    /// Patches the deployment fields of the named record as one unit.
    ///
    /// When `deployed` is false, date and notes are forced to null even
    /// if supplied; when true and no date is given, the current time is
    /// recorded. This keeps `deployment_date` non-null exactly when
    /// `deployed` is true.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] when the record does not exist
    /// and [`GatewayError::Update`] when the store rejects the write.
    pub async fn update_deployment(
        &self,
        id: &str,
        deployed: bool,
        date: Option<DateTime<Utc>>,
        notes: Option<String>,
    ) -> Result<(), GatewayError> {
        self.fetch(id).await?;
        let patch = deployment_patch(deployed, date, notes, Utc::now());
        self.store
            .patch_json(&self.record_path(id), &patch)
            .await
            .map_err(|e| GatewayError::Update(e.to_string()))?;
        tracing::info!(id, deployed, "report deployment updated");
        Ok(())
    }

    /// Appends one message to the named record's thread and returns the
    /// updated report.
    ///
    /// Read-modify-write: appends within this process are serialized by
    /// a mutex held across the whole cycle, so in-process callers cannot
    /// drop each other's messages. Prior messages are never touched.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::NotFound`] when the record does not exist
    /// and [`GatewayError::Update`] when the store rejects the write.
    pub async fn append_message(
        &self,
        id: &str,
        message: String,
        sender: MessageSender,
        timestamp: Option<DateTime<Utc>>,
    ) -> Result<CitizenReport, GatewayError> {
        let _guard = self.append_lock.lock().await;

        let mut stored = self.fetch(id).await?;
        let now = Utc::now();
        stored.messages.push(ReportMessage {
            id: message_id(now),
            message,
            timestamp: timestamp.unwrap_or(now),
            sender,
        });

        self.store
            .patch_json(
                &self.record_path(id),
                &serde_json::json!({ "messages": stored.messages }),
            )
            .await
            .map_err(|e| GatewayError::Update(e.to_string()))?;

        tracing::info!(id, thread_len = stored.messages.len(), "message appended");
        Ok(stored.into_report(id.to_string()))
    }

    /// Removes the record by identifier.
    ///
    /// Returns a boolean success signal rather than an error so callers
    /// can degrade gracefully; the failure is logged.
    pub async fn delete(&self, id: &str) -> bool {
        match self.store.delete(&self.record_path(id)).await {
            Ok(()) => {
                tracing::info!(id, "citizen report deleted");
                true
            }
            Err(err) => {
                tracing::warn!(id, error = %err, "report delete failed");
                false
            }
        }
    }
}

/// Trims a free-text field, collapsing whitespace-only values to `None`.
fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Message identifiers are millisecond tokens, monotonically increasing
/// for appends spaced more than a millisecond apart.
fn message_id(now: DateTime<Utc>) -> String {
    now.timestamp_millis().to_string()
}

/// Builds the deployment patch, forcing date and notes to null whenever
/// `deployed` is false and defaulting the date to `now` otherwise.
fn deployment_patch(
    deployed: bool,
    date: Option<DateTime<Utc>>,
    notes: Option<String>,
    now: DateTime<Utc>,
) -> serde_json::Value {
    if deployed {
        serde_json::json!({
            "deployed": true,
            "deployment_date": date.unwrap_or(now),
            "deployment_notes": notes,
        })
    } else {
        serde_json::json!({
            "deployed": false,
            "deployment_date": null,
            "deployment_notes": null,
        })
    }
}
