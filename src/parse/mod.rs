//! Text parsers for the edge editor and the recenter control.
//!
//! ERROR HANDLING
//! ==============
//! Rejection is a value, not a fault: both parsers return `ParseError` and
//! never panic. Edge parsing is all-or-nothing, so the first bad line rejects
//! the whole input and no partial segment set is produced.

pub mod center;
pub mod edges;

use std::fmt;

pub use center::parse_center;
pub use edges::parse_edges;

// =============================================================================
// ERROR
// =============================================================================

/// What a rejected token should have been.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Number,
    Color,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number => f.write_str("expected a number"),
            Self::Color => f.write_str("expected a color name, not a number"),
        }
    }
}

/// Why a piece of user text was rejected. `line` is 1-based and only set for
/// multi-line edge input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// Wrong token count on an edge line or coordinate input.
    #[error("{}expected {expected} values, found {found}", at_line(.line))]
    Format { line: Option<usize>, expected: usize, found: usize },

    /// Segment coordinate outside the canvas bounds.
    #[error("{}coordinate {value} is outside [{min}, {max}]", at_line(.line))]
    Range { line: Option<usize>, value: f64, min: f64, max: f64 },

    /// A numeric token that isn't numeric, or a color token that is.
    #[error("{}{expected}, found `{token}`", at_line(.line))]
    Type { line: Option<usize>, token: String, expected: Expected },
}

impl ParseError {
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Format { line, .. } | Self::Range { line, .. } | Self::Type { line, .. } => *line,
        }
    }
}

#[allow(clippy::ref_option)]
fn at_line(line: &Option<usize>) -> String {
    line.map(|n| format!("line {n}: ")).unwrap_or_default()
}

/// Parse a token as a finite number. `NaN` and infinities count as non-numeric.
pub(crate) fn parse_number(token: &str) -> Option<f64> {
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whether a token reads as a number for the color check. Infinities count;
/// `NaN` does not.
pub(crate) fn is_numeric(token: &str) -> bool {
    token.parse::<f64>().is_ok_and(|v| !v.is_nan())
}
