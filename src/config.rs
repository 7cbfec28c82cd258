//! Application configuration parsed from environment variables.
//!
//! All keys are optional. Values that define behavior (center coordinate,
//! route color, building code) fail loudly when malformed; tuning knobs
//! (timeouts, retries, zoom) fall back to their defaults.

use crate::model::{CanvasBounds, MapCenter};
use crate::view::ViewConfig;

pub const DEFAULT_ROUTING_URL: &str = "http://localhost:4567";
pub const DEFAULT_CENTER_LAT: f64 = 47.659_790;
pub const DEFAULT_CENTER_LNG: f64 = -122.304_640;
pub const DEFAULT_ROUTE_COLOR: &str = "red";
pub const DEFAULT_BUILDING: &str = "PAR";
pub const DEFAULT_ZOOM: u8 = 15;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
pub const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_BASE_MS: u64 = 200;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {key}: `{value}` is not a finite number")]
    InvalidNumber { key: &'static str, value: String },
    #[error("{key} must not be empty")]
    Empty { key: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first.
    pub attempts: u32,
    /// Backoff step; attempt `n` waits `n * base_ms` before the next try.
    pub base_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingConfig {
    pub base_url: String,
    pub route_color: String,
    pub timeouts: RequestTimeouts,
    pub retry: RetryPolicy,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub routing: RoutingConfig,
    pub view: ViewConfig,
    pub bounds: CanvasBounds,
    pub default_building: String,
}

impl AppConfig {
    /// Build config from the process environment.
    ///
    /// - `CAMPUSLINES_ROUTING_URL`: routing service base URL
    /// - `CAMPUSLINES_CENTER_LAT` / `CAMPUSLINES_CENTER_LNG`: default map center
    /// - `CAMPUSLINES_ROUTE_COLOR`: color used for fetched routes
    /// - `CAMPUSLINES_DEFAULT_BUILDING`: initial start/end building code
    /// - `CAMPUSLINES_ZOOM`: map zoom level, default 15
    /// - `CAMPUSLINES_REQUEST_TIMEOUT_SECS` / `CAMPUSLINES_CONNECT_TIMEOUT_SECS`
    /// - `CAMPUSLINES_RETRIES` / `CAMPUSLINES_RETRY_BASE_MS`
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` for a malformed center or an empty color/building.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let base_url = lookup("CAMPUSLINES_ROUTING_URL")
            .unwrap_or_else(|| DEFAULT_ROUTING_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();
        let route_color = non_empty(&lookup, "CAMPUSLINES_ROUTE_COLOR", DEFAULT_ROUTE_COLOR)?;
        let default_building = non_empty(&lookup, "CAMPUSLINES_DEFAULT_BUILDING", DEFAULT_BUILDING)?;
        let default_center = MapCenter::new(
            finite(&lookup, "CAMPUSLINES_CENTER_LAT", DEFAULT_CENTER_LAT)?,
            finite(&lookup, "CAMPUSLINES_CENTER_LNG", DEFAULT_CENTER_LNG)?,
        );

        let timeouts = RequestTimeouts {
            request_secs: parse_or(&lookup, "CAMPUSLINES_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: parse_or(&lookup, "CAMPUSLINES_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let retry = RetryPolicy {
            attempts: parse_or(&lookup, "CAMPUSLINES_RETRIES", DEFAULT_RETRY_ATTEMPTS).max(1),
            base_ms: parse_or(&lookup, "CAMPUSLINES_RETRY_BASE_MS", DEFAULT_RETRY_BASE_MS),
        };

        Ok(Self {
            routing: RoutingConfig { base_url, route_color, timeouts, retry },
            view: ViewConfig { default_center, zoom: parse_or(&lookup, "CAMPUSLINES_ZOOM", DEFAULT_ZOOM) },
            bounds: CanvasBounds::default(),
            default_building,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

fn finite(lookup: &impl Fn(&str) -> Option<String>, key: &'static str, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(default);
    };
    let parsed = raw.trim().parse::<f64>().ok().filter(|v| v.is_finite());
    parsed.ok_or(ConfigError::InvalidNumber { key, value: raw })
}

fn non_empty(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: &str,
) -> Result<String, ConfigError> {
    match lookup(key) {
        None => Ok(default.to_owned()),
        Some(v) if v.trim().is_empty() => Err(ConfigError::Empty { key }),
        Some(v) => Ok(v.trim().to_owned()),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
