//! Wire types for the routing service and their typed decode step.
//!
//! The service sends coordinates as numeric strings (`"StartX": "1234.5"`).
//! Decoding parses them explicitly and fails with `RouteError::Decode` on
//! anything that is not a finite, in-bounds number, instead of coercing.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::RouteError;
use crate::model::{CanvasBounds, ColoredSegment, SegmentSet};

// =============================================================================
// BUILDING DIRECTORY
// =============================================================================

/// Building short code -> display name. Iterates in code order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildingDirectory(BTreeMap<String, String>);

impl BuildingDirectory {
    /// Decode a `GET /building` body.
    ///
    /// # Errors
    ///
    /// Returns `RouteError::Decode` if the body is not a JSON object of strings.
    pub fn from_json(body: &str) -> Result<Self, RouteError> {
        let map: BTreeMap<String, String> =
            serde_json::from_str(body).map_err(|e| RouteError::Decode(format!("building directory: {e}")))?;
        Ok(Self(map))
    }

    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.0.contains_key(code)
    }

    #[must_use]
    pub fn name(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(code, name)| (code.as_str(), name.as_str()))
    }
}

impl FromIterator<(String, String)> for BuildingDirectory {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// =============================================================================
// PATH RESPONSE
// =============================================================================

/// Coordinate as sent by the service. Strings are the normal case; plain JSON
/// numbers are accepted too.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WireNumber {
    Number(f64),
    Text(String),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PathSegmentWire {
    start_x: WireNumber,
    start_y: WireNumber,
    end_x: WireNumber,
    end_y: WireNumber,
}

/// Decode a `GET /path` body into segments drawn in `color`.
///
/// # Errors
///
/// Returns `RouteError::Decode` if the body is not a JSON array of segment
/// records, or any coordinate is non-numeric or outside `bounds`.
pub fn decode_path(body: &str, color: &str, bounds: CanvasBounds) -> Result<SegmentSet, RouteError> {
    let wire: Vec<PathSegmentWire> =
        serde_json::from_str(body).map_err(|e| RouteError::Decode(format!("path response: {e}")))?;

    let segments = wire
        .into_iter()
        .enumerate()
        .map(|(index, seg)| {
            Ok(ColoredSegment::new(
                coordinate(index, "StartX", seg.start_x, bounds)?,
                coordinate(index, "StartY", seg.start_y, bounds)?,
                coordinate(index, "EndX", seg.end_x, bounds)?,
                coordinate(index, "EndY", seg.end_y, bounds)?,
                color,
            ))
        })
        .collect::<Result<Vec<_>, RouteError>>()?;

    Ok(SegmentSet::from(segments))
}

fn coordinate(index: usize, field: &str, raw: WireNumber, bounds: CanvasBounds) -> Result<f64, RouteError> {
    let value = match raw {
        WireNumber::Number(v) => v,
        WireNumber::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| RouteError::Decode(format!("segment {index} {field}: `{text}` is not a number")))?,
    };
    if !bounds.contains(value) {
        return Err(RouteError::Decode(format!(
            "segment {index} {field}: {value} is outside [{}, {}]",
            bounds.min, bounds.max
        )));
    }
    Ok(value)
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
