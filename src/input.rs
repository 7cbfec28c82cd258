//! Input controls: the edge editor, the recenter box, and the route selector.
//!
//! Each control owns its own text/selection and turns a user action into a
//! `ViewEvent`. On rejection the control discards its text so the user starts
//! over from an empty field.

use crate::model::CanvasBounds;
use crate::parse::{parse_center, parse_edges};
use crate::view::ViewEvent;

// =============================================================================
// EDGE EDITOR
// =============================================================================

#[derive(Debug, Default)]
pub struct EdgeEditor {
    text: String,
    bounds: CanvasBounds,
}

impl EdgeEditor {
    #[must_use]
    pub fn new(bounds: CanvasBounds) -> Self {
        Self { text: String::new(), bounds }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append one line to the buffer.
    pub fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    /// Parse the buffer. A rejected buffer is discarded.
    pub fn draw(&mut self) -> ViewEvent {
        match parse_edges(&self.text, self.bounds) {
            Ok(set) => ViewEvent::EdgesParsed(set),
            Err(err) => {
                self.text.clear();
                ViewEvent::EdgesRejected(err)
            }
        }
    }

    pub fn clear(&mut self) -> ViewEvent {
        self.text.clear();
        ViewEvent::EdgesCleared
    }
}

// =============================================================================
// CENTER INPUT
// =============================================================================

#[derive(Debug, Default)]
pub struct CenterInput {
    text: String,
}

impl CenterInput {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Parse the field and clear it, whatever the outcome.
    pub fn recenter(&mut self) -> ViewEvent {
        let text = std::mem::take(&mut self.text);
        match parse_center(&text) {
            Ok(center) => ViewEvent::CenterParsed(center),
            Err(err) => ViewEvent::CenterRejected(err),
        }
    }
}

// =============================================================================
// ROUTE SELECTOR
// =============================================================================

/// Start/end building codes, both starting at the default building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSelector {
    start: String,
    end: String,
    default_code: String,
}

impl RouteSelector {
    #[must_use]
    pub fn new(default_code: impl Into<String>) -> Self {
        let default_code = default_code.into();
        Self { start: default_code.clone(), end: default_code.clone(), default_code }
    }

    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    #[must_use]
    pub fn end(&self) -> &str {
        &self.end
    }

    pub fn select_start(&mut self, code: impl Into<String>) {
        self.start = code.into();
    }

    pub fn select_end(&mut self, code: impl Into<String>) {
        self.end = code.into();
    }

    /// Reset both codes to the default building and drop the drawn route.
    pub fn clear(&mut self) -> ViewEvent {
        self.start.clone_from(&self.default_code);
        self.end.clone_from(&self.default_code);
        ViewEvent::RouteCleared
    }
}

#[cfg(test)]
#[path = "input_test.rs"]
mod tests;
