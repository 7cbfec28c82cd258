//! Single owner of the displayed segment set and map center.
//!
//! DESIGN
//! ======
//! Every event replaces one piece of state wholesale; there is no merging of
//! segments from different sources. The newest event wins. After applying an
//! event the coordinator renders synchronously, once.
//!
//! ERROR HANDLING
//! ==============
//! Parse rejections reset state (empty set or default center) and raise an
//! alert. A failed route fetch leaves the previous state on screen, raises an
//! alert, and records the reason in `last_error` until the next successful
//! event.

use tracing::{debug, warn};

use super::render::OverlayRenderer;
use crate::model::{MapCenter, SegmentSet};
use crate::parse::ParseError;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewConfig {
    /// Center restored when recenter input is rejected.
    pub default_center: MapCenter,
    pub zoom: u8,
}

/// Everything that can change what the view shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEvent {
    EdgesParsed(SegmentSet),
    EdgesRejected(ParseError),
    EdgesCleared,
    CenterParsed(MapCenter),
    CenterRejected(ParseError),
    RouteFetched(SegmentSet),
    RouteCleared,
    RouteFailed(String),
}

impl ViewEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::EdgesParsed(_) => "edges_parsed",
            Self::EdgesRejected(_) => "edges_rejected",
            Self::EdgesCleared => "edges_cleared",
            Self::CenterParsed(_) => "center_parsed",
            Self::CenterRejected(_) => "center_rejected",
            Self::RouteFetched(_) => "route_fetched",
            Self::RouteCleared => "route_cleared",
            Self::RouteFailed(_) => "route_failed",
        }
    }
}

/// What the renderer gets: the full current state.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    /// Increments once per applied event.
    pub revision: u64,
    pub segments: SegmentSet,
    pub center: MapCenter,
    pub zoom: u8,
    pub last_error: Option<String>,
}

// =============================================================================
// COORDINATOR
// =============================================================================

pub struct ViewCoordinator<R> {
    config: ViewConfig,
    segments: SegmentSet,
    center: MapCenter,
    last_error: Option<String>,
    revision: u64,
    renderer: R,
}

impl<R: OverlayRenderer> ViewCoordinator<R> {
    /// Start with no segments, centered on the configured default.
    pub fn new(config: ViewConfig, renderer: R) -> Self {
        Self {
            config,
            segments: SegmentSet::empty(),
            center: config.default_center,
            last_error: None,
            revision: 0,
            renderer,
        }
    }

    /// Apply one event and render the result.
    pub fn dispatch(&mut self, event: ViewEvent) {
        let name = event.name();
        match event {
            ViewEvent::EdgesParsed(set) | ViewEvent::RouteFetched(set) => {
                self.segments = set;
                self.last_error = None;
            }
            ViewEvent::EdgesCleared | ViewEvent::RouteCleared => {
                self.segments = SegmentSet::empty();
                self.last_error = None;
            }
            ViewEvent::EdgesRejected(err) => {
                warn!(error = %err, "edge list rejected");
                self.segments = SegmentSet::empty();
                self.last_error = None;
                self.renderer.alert(&err.to_string());
            }
            ViewEvent::CenterParsed(center) => {
                self.center = center;
                self.last_error = None;
            }
            ViewEvent::CenterRejected(err) => {
                warn!(error = %err, "recenter input rejected");
                self.center = self.config.default_center;
                self.last_error = None;
                self.renderer.alert(&err.to_string());
            }
            ViewEvent::RouteFailed(reason) => {
                warn!(%reason, "route fetch failed; keeping current view");
                self.renderer.alert(&reason);
                self.last_error = Some(reason);
            }
        }
        self.revision += 1;
        debug!(
            event = name,
            revision = self.revision,
            segments = self.segments.len(),
            lat = self.center.lat,
            lng = self.center.lng,
            "view updated"
        );
        self.publish();
    }

    /// Render the current state without changing it.
    pub fn publish(&mut self) {
        let snapshot = self.snapshot();
        self.renderer.render(&snapshot);
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot {
            revision: self.revision,
            segments: self.segments.clone(),
            center: self.center,
            zoom: self.config.zoom,
            last_error: self.last_error.clone(),
        }
    }

    #[must_use]
    pub fn segments(&self) -> &SegmentSet {
        &self.segments
    }

    #[must_use]
    pub fn center(&self) -> MapCenter {
        self.center
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }
}

#[cfg(test)]
#[path = "coordinator_test.rs"]
mod tests;
