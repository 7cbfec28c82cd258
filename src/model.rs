//! Geometric records shared by the parsers, the routing client and the view.
//!
//! DESIGN
//! ======
//! `SegmentSet` wraps an `Arc<[ColoredSegment]>` so a published set is frozen:
//! the coordinator replaces it wholesale and snapshots handed to the renderer
//! are cheap clones of the same allocation.

use std::fmt;
use std::sync::Arc;

// =============================================================================
// CANVAS BOUNDS
// =============================================================================

pub const CANVAS_MIN: f64 = 0.0;
pub const CANVAS_MAX: f64 = 4000.0;

/// Inclusive coordinate range accepted for segment endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasBounds {
    pub min: f64,
    pub max: f64,
}

impl CanvasBounds {
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }
}

impl Default for CanvasBounds {
    fn default() -> Self {
        Self { min: CANVAS_MIN, max: CANVAS_MAX }
    }
}

// =============================================================================
// SEGMENTS
// =============================================================================

/// A line segment with two endpoints and a display color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColoredSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub color: String,
}

impl ColoredSegment {
    #[must_use]
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64, color: impl Into<String>) -> Self {
        Self { x1, y1, x2, y2, color: color.into() }
    }
}

impl fmt::Display for ColoredSegment {
    /// Edge-list line form: `x1 y1 x2 y2 color`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {} {}", self.x1, self.y1, self.x2, self.y2, self.color)
    }
}

/// Ordered, immutable collection of segments currently on display.
#[derive(Debug, Clone, PartialEq)]
pub struct SegmentSet(Arc<[ColoredSegment]>);

impl SegmentSet {
    #[must_use]
    pub fn empty() -> Self {
        Self(Arc::from(Vec::new()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ColoredSegment] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColoredSegment> {
        self.0.iter()
    }

    /// Serialize back into the edge-list text the editor accepts, one segment per line.
    #[must_use]
    pub fn to_edge_text(&self) -> String {
        self.0
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for SegmentSet {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<ColoredSegment>> for SegmentSet {
    fn from(segments: Vec<ColoredSegment>) -> Self {
        Self(Arc::from(segments))
    }
}

impl<'a> IntoIterator for &'a SegmentSet {
    type Item = &'a ColoredSegment;
    type IntoIter = std::slice::Iter<'a, ColoredSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// MAP CENTER
// =============================================================================

/// Geographic coordinate the map view is centered on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapCenter {
    pub lat: f64,
    pub lng: f64,
}

impl MapCenter {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for MapCenter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.lat, self.lng)
    }
}

#[cfg(test)]
#[path = "model_test.rs"]
mod tests;
