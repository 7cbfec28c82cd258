//! Edge-list parser: `x1 y1 x2 y2 color` per line.

use super::{Expected, ParseError, is_numeric, parse_number};
use crate::model::{CanvasBounds, ColoredSegment, SegmentSet};

pub const EDGE_TOKENS: usize = 5;

/// Parse multi-line edge text into a segment set.
///
/// Blank lines are skipped, so all-blank input yields an empty set. Line
/// numbers in errors refer to the raw input, blank lines included.
///
/// # Errors
///
/// Returns the first `ParseError` found; no segments are returned in that case.
pub fn parse_edges(input: &str, bounds: CanvasBounds) -> Result<SegmentSet, ParseError> {
    let mut segments = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        segments.push(parse_line(index + 1, line, bounds)?);
    }
    Ok(SegmentSet::from(segments))
}

fn parse_line(line_no: usize, line: &str, bounds: CanvasBounds) -> Result<ColoredSegment, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [x1, y1, x2, y2, color] = tokens.as_slice() else {
        return Err(ParseError::Format { line: Some(line_no), expected: EDGE_TOKENS, found: tokens.len() });
    };

    let x1 = coordinate(line_no, x1, bounds)?;
    let y1 = coordinate(line_no, y1, bounds)?;
    let x2 = coordinate(line_no, x2, bounds)?;
    let y2 = coordinate(line_no, y2, bounds)?;

    if is_numeric(color) {
        return Err(ParseError::Type { line: Some(line_no), token: (*color).to_owned(), expected: Expected::Color });
    }

    Ok(ColoredSegment::new(x1, y1, x2, y2, *color))
}

fn coordinate(line_no: usize, token: &str, bounds: CanvasBounds) -> Result<f64, ParseError> {
    let Some(value) = parse_number(token) else {
        return Err(ParseError::Type { line: Some(line_no), token: token.to_owned(), expected: Expected::Number });
    };
    if !bounds.contains(value) {
        return Err(ParseError::Range { line: Some(line_no), value, min: bounds.min, max: bounds.max });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "edges_test.rs"]
mod tests;
