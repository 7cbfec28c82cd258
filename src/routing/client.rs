//! HTTP client for the routing service.
//!
//! Thin wrapper over `GET /building` and `GET /path`. Decoding lives in
//! `types` so it can be tested without a server.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and 429/5xx answers are retried with linear backoff up
//! to `RetryPolicy::attempts`. Everything else fails on the first attempt.

use std::time::Duration;

use tracing::{debug, warn};

use super::types::{BuildingDirectory, decode_path};
use super::{RouteError, RouteSource};
use crate::config::{RetryPolicy, RoutingConfig};
use crate::model::{CanvasBounds, SegmentSet};

// =============================================================================
// CLIENT
// =============================================================================

pub struct RoutingClient {
    http: reqwest::Client,
    base_url: String,
    route_color: String,
    bounds: CanvasBounds,
    retry: RetryPolicy,
}

impl RoutingClient {
    /// Build a client from routing config.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::HttpClientBuild` if the reqwest client fails to build.
    pub fn new(config: &RoutingConfig, bounds: CanvasBounds) -> Result<Self, RouteError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| RouteError::HttpClientBuild(e.to_string()))?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            route_color: config.route_color.clone(),
            bounds,
            retry: config.retry,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_with_retry(&self, path: &str, query: &[(&str, &str)]) -> Result<String, RouteError> {
        let attempts = self.retry.attempts.max(1);
        let mut attempt = 1;
        loop {
            match self.get_once(path, query).await {
                Ok(body) => return Ok(body),
                Err(e) if e.retryable() && attempt < attempts => {
                    warn!(error = %e, attempt, total = attempts, path, "routing request failed; retrying");
                    tokio::time::sleep(Duration::from_millis(u64::from(attempt) * self.retry.base_ms)).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_once(&self, path: &str, query: &[(&str, &str)]) -> Result<String, RouteError> {
        let url = format!("{}{path}", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| RouteError::Request(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RouteError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(RouteError::Status { status: status.as_u16(), body });
        }
        debug!(%url, bytes = body.len(), "routing response received");
        Ok(body)
    }
}

#[async_trait::async_trait]
impl RouteSource for RoutingClient {
    async fn buildings(&self) -> Result<BuildingDirectory, RouteError> {
        let body = self.get_with_retry("/building", &[]).await?;
        BuildingDirectory::from_json(&body)
    }

    async fn shortest_path(&self, start: &str, end: &str) -> Result<SegmentSet, RouteError> {
        let body = self
            .get_with_retry("/path", &[("start", start), ("end", end)])
            .await?;
        decode_path(&body, &self.route_color, self.bounds)
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
