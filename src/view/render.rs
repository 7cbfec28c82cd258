//! Overlay renderer seam and the JSON-lines implementation used by the CLI.
//!
//! The renderer owns presentation details: stable line keys come from set
//! order and colors are lowercased here, not in the parser.

use std::io::Write;

use serde::Serialize;
use tracing::warn;

use super::coordinator::ViewSnapshot;
use crate::routing::BuildingDirectory;

/// Draws the current view and surfaces user-facing messages.
pub trait OverlayRenderer {
    fn render(&mut self, view: &ViewSnapshot);

    /// Blocking, user-visible notice about a rejected input or failed request.
    fn alert(&mut self, message: &str);

    /// Show the building choices available to the route selector.
    fn directory(&mut self, _directory: &BuildingDirectory) {}

    /// Informational text (help, status) that is neither a frame nor an alert.
    fn notice(&mut self, _text: &str) {}
}

// =============================================================================
// WIRE FRAME
// =============================================================================

#[derive(Debug, Serialize)]
struct RenderFrame<'a> {
    revision: u64,
    center: [f64; 2],
    zoom: u8,
    lines: Vec<RenderLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct RenderLine {
    key: usize,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: String,
}

/// Serialize a snapshot into one JSON frame.
///
/// # Errors
///
/// Returns a serde error if serialization fails.
pub fn render_frame_json(view: &ViewSnapshot) -> Result<String, serde_json::Error> {
    let frame = RenderFrame {
        revision: view.revision,
        center: [view.center.lat, view.center.lng],
        zoom: view.zoom,
        lines: view
            .segments
            .iter()
            .enumerate()
            .map(|(key, seg)| RenderLine {
                key,
                x1: seg.x1,
                y1: seg.y1,
                x2: seg.x2,
                y2: seg.y2,
                color: seg.color.to_lowercase(),
            })
            .collect(),
        error: view.last_error.as_deref(),
    };
    serde_json::to_string(&frame)
}

// =============================================================================
// JSON LINES RENDERER
// =============================================================================

/// Writes one JSON frame per render to `frames`; alerts and notices go to
/// `messages`.
pub struct JsonLinesRenderer<F, M> {
    frames: F,
    messages: M,
}

impl<F: Write, M: Write> JsonLinesRenderer<F, M> {
    pub fn new(frames: F, messages: M) -> Self {
        Self { frames, messages }
    }

    pub fn into_parts(self) -> (F, M) {
        (self.frames, self.messages)
    }

    fn write_message(&mut self, text: &str) {
        if let Err(e) = writeln!(self.messages, "{text}") {
            warn!(error = %e, "failed to write message");
        }
    }
}

impl JsonLinesRenderer<std::io::Stdout, std::io::Stderr> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<F: Write, M: Write> OverlayRenderer for JsonLinesRenderer<F, M> {
    fn render(&mut self, view: &ViewSnapshot) {
        let json = match render_frame_json(view) {
            Ok(json) => json,
            Err(e) => {
                warn!(error = %e, revision = view.revision, "failed to serialize frame");
                return;
            }
        };
        if let Err(e) = writeln!(self.frames, "{json}").and_then(|()| self.frames.flush()) {
            warn!(error = %e, revision = view.revision, "failed to write frame");
        }
    }

    fn alert(&mut self, message: &str) {
        self.write_message(&format!("alert: {message}"));
    }

    fn directory(&mut self, directory: &BuildingDirectory) {
        for (code, name) in directory.iter() {
            self.write_message(&format!("{code:<6} {name}"));
        }
    }

    fn notice(&mut self, text: &str) {
        self.write_message(text);
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================


#[cfg(test)]
#[path = "render_test.rs"]
mod tests;
