//! HTTP client for the external key-value store.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use crate::error::GatewayError;

/// Client for the flat key-value store.
///
/// Constructed once at startup and shared by reference through
/// [`crate::app_state::AppState`]; the inner [`reqwest::Client`] carries
/// the connection pool and the per-request timeout.
///
/// Read paths retry with exponential backoff (1s, 2s, 4s) when the store
/// answers with a non-JSON payload, the usual symptom of upstream
/// rate-limiting. Write paths never retry: a failed write surfaces
/// immediately rather than being silently repeated.
#[derive(Debug, Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl StoreClient {
    /// Creates a store client against `base_url`.
    #[must_use]
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, max_retries: u32) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http,
            base_url,
            max_retries: max_retries.max(1),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// Fetches JSON from `path`, retrying with exponential backoff on
    /// non-JSON payloads and transport errors.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Upstream`] when the store is unreachable,
    /// answers with a non-success status, or keeps returning non-JSON
    /// after all retries.
    pub async fn get_json(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<serde_json::Value, GatewayError> {
        let mut attempt = 0u32;
        loop {
            let result = self
                .http
                .get(self.url(path))
                .query(query)
                .header(ACCEPT, "application/json")
                .send()
                .await;

            let retriable = match &result {
                Ok(response) => !response.status().is_success() && !is_json(response),
                Err(_) => true,
            };
            if retriable && attempt + 1 < self.max_retries {
                let delay = backoff_delay(attempt);
                tracing::warn!(
                    path,
                    attempt,
                    delay_secs = delay.as_secs(),
                    "store read failed, backing off"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
                continue;
            }

            let response =
                result.map_err(|e| GatewayError::Upstream(format!("store request failed: {e}")))?;
            if !response.status().is_success() {
                return Err(GatewayError::Upstream(format!(
                    "store returned status {}",
                    response.status()
                )));
            }
            if !is_json(&response) {
                return Err(GatewayError::Upstream(
                    "store returned a non-JSON response (likely rate limited)".to_string(),
                ));
            }
            return response
                .json()
                .await
                .map_err(|e| GatewayError::Upstream(format!("malformed store payload: {e}")));
        }
    }

    /// Appends `body` to the collection at `path`; the store answers
    /// with the identifier it assigned.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Upstream`] when the store rejects the
    /// write or the response cannot be parsed.
    pub async fn post_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, GatewayError> {
        let response = self
            .http
            .post(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(format!("store request failed: {e}")))?;
        if !response.status().is_success() {
            return Err(GatewayError::Upstream(format!(
                "store returned status {}",
                response.status()
            )));
        }
        response
            .json()
            .await
            .map_err(|e| GatewayError::Upstream(format!("malformed store payload: {e}")))
    }

    /// Patches the attributes in `body` onto the record at `path`,
    /// leaving other attributes untouched.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Upstream`] when the store rejects the
    /// write.
    pub async fn patch_json(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<(), GatewayError> {
        let response = self
            .http
            .patch(self.url(path))
            .header(CONTENT_TYPE, "application/json")
            .json(body)
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(format!("store request failed: {e}")))?;
        if !response.status().is_success() {
            return Err(GatewayError::Upstream(format!(
                "store returned status {}",
                response.status()
            )));
        }
        Ok(())
    }

    /// Removes the record at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Upstream`] when the store rejects the
    /// operation.
    pub async fn delete(&self, path: &str) -> Result<(), GatewayError> {
        let response = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(format!("store request failed: {e}")))?;
        if !response.status().is_success() {
            return Err(GatewayError::Upstream(format!(
                "store returned status {}",
                response.status()
            )));
        }
        Ok(())
    }
}

/// Exponential backoff starting at 1s, capped at 64s so oversized retry
/// configurations cannot overflow the shift.
fn backoff_delay(attempt: u32) -> Duration {
    Duration::from_secs(1u64 << attempt.min(6))
}

fn is_json(response: &reqwest::Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("application/json"))
}
