//! HTTP client for the Overpass API with mirror failover.
//!
//! The public Overpass mirrors are interchangeable but individually flaky, so
//! one logical search fans out over an ordered mirror list: transient
//! failures are retried in place per [`RetryPolicy`], anything else fails
//! over to the next mirror immediately. The mirror list and policy are
//! injected at construction so tests can point the client at mock servers.

use std::time::Duration;

use cafehop_core::Place;
use reqwest::Client;

use crate::error::OverpassError;
use crate::normalize::normalize_element;
use crate::query::build_query;
use crate::retry::{is_transient, RetryPolicy};
use crate::types::{RawElement, SearchParams};

/// Client for Overpass interpreter endpoints.
pub struct OverpassClient {
    client: Client,
    mirrors: Vec<String>,
    retry: RetryPolicy,
}

impl OverpassClient {
    /// Creates a client over an ordered mirror list.
    ///
    /// `timeout` bounds each individual request; it is independent of the
    /// retry backoff.
    ///
    /// # Errors
    ///
    /// Returns [`OverpassError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`OverpassError::MirrorsExhausted`] if the
    /// mirror list is empty.
    pub fn new(
        mirrors: Vec<String>,
        timeout: Duration,
        retry: RetryPolicy,
    ) -> Result<Self, OverpassError> {
        if mirrors.is_empty() {
            return Err(OverpassError::MirrorsExhausted);
        }
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(5))
            .user_agent("cafehop/0.1 (cafe search)")
            .build()?;
        Ok(Self {
            client,
            mirrors,
            retry,
        })
    }

    /// Runs one search pass, trying each mirror in order.
    ///
    /// Successful responses are mapped through the normalizer. Malformed
    /// payloads count as an empty result, not a failure.
    ///
    /// # Errors
    ///
    /// Returns the last observed [`OverpassError`] once every mirror and
    /// attempt has been exhausted.
    pub async fn search(&self, params: &SearchParams) -> Result<Vec<Place>, OverpassError> {
        let query = build_query(params);
        let mut last_err: Option<OverpassError> = None;

        for mirror in &self.mirrors {
            let mut attempt = 0u32;
            while attempt < self.retry.max_attempts {
                match self.post_query(mirror, &query).await {
                    Ok(elements) => {
                        return Ok(elements.iter().map(normalize_element).collect());
                    }
                    Err(err) => {
                        let transient = is_transient(&err);
                        tracing::warn!(
                            mirror,
                            attempt,
                            transient,
                            error = %err,
                            "Overpass request failed"
                        );
                        last_err = Some(err);
                        if !transient {
                            // Not worth retrying this mirror; fail over.
                            break;
                        }
                        attempt += 1;
                        if attempt < self.retry.max_attempts {
                            tokio::time::sleep(self.retry.delay_after(attempt - 1)).await;
                        }
                    }
                }
            }
        }

        Err(last_err.unwrap_or(OverpassError::MirrorsExhausted))
    }

    /// POSTs the query as a `data` form field and parses the element list.
    async fn post_query(
        &self,
        mirror: &str,
        query: &str,
    ) -> Result<Vec<RawElement>, OverpassError> {
        let response = self
            .client
            .post(mirror)
            .form(&[("data", query)])
            .send()
            .await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        Ok(parse_elements(&body))
    }
}

/// Extracts elements from a response body, degrading malformed payloads to
/// an empty (or partial) list. Individually malformed elements are skipped.
fn parse_elements(body: &str) -> Vec<RawElement> {
    let Ok(payload) = serde_json::from_str::<serde_json::Value>(body) else {
        tracing::warn!("Overpass returned a non-JSON payload, treating as empty");
        return Vec::new();
    };
    let Some(elements) = payload.get("elements").and_then(serde_json::Value::as_array) else {
        tracing::warn!("Overpass payload has no element list, treating as empty");
        return Vec::new();
    };
    elements
        .iter()
        .filter_map(|value| serde_json::from_value::<RawElement>(value.clone()).ok())
        .collect()
}
