//! Routing collaborator: building directory and shortest-path lookups.
//!
//! DESIGN
//! ======
//! `RouteSource` is the seam the session talks to. `RoutingClient` is the
//! HTTP implementation; tests substitute scripted fakes. Responses are decoded
//! into typed records at this boundary so nothing downstream sees raw JSON.

pub mod client;
pub mod types;

pub use client::RoutingClient;
pub use types::{BuildingDirectory, decode_path};

use crate::model::SegmentSet;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while talking to the routing service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request never produced a response (connect, timeout, transport).
    #[error("routing request failed: {0}")]
    Request(String),

    /// The service answered with a non-success status.
    #[error("routing service returned status {status}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("routing response decode failed: {0}")]
    Decode(String),

    /// The building code is not in the loaded directory.
    #[error("unknown building code `{0}`")]
    UnknownBuilding(String),
}

impl RouteError {
    /// Whether a retry may succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Status { status: 429 | 500..=599, .. })
    }
}

// =============================================================================
// SOURCE TRAIT
// =============================================================================

/// Anything that can answer directory and shortest-path queries.
#[async_trait::async_trait]
pub trait RouteSource: Send + Sync {
    async fn buildings(&self) -> Result<BuildingDirectory, RouteError>;

    /// Shortest path between two building codes, already colored for display.
    async fn shortest_path(&self, start: &str, end: &str) -> Result<SegmentSet, RouteError>;
}
