//! Recenter input parser: `lat lng`.
//!
//! Unlike segment endpoints these are geographic values, so no canvas range
//! applies.

use super::{Expected, ParseError, parse_number};
use crate::model::MapCenter;

pub const CENTER_TOKENS: usize = 2;

/// Parse a two-token coordinate.
///
/// # Errors
///
/// `Format` on a token count other than two, `Type` if either token is not a
/// finite number.
pub fn parse_center(input: &str) -> Result<MapCenter, ParseError> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    let [lat, lng] = tokens.as_slice() else {
        return Err(ParseError::Format { line: None, expected: CENTER_TOKENS, found: tokens.len() });
    };
    Ok(MapCenter::new(number(lat)?, number(lng)?))
}

fn number(token: &str) -> Result<f64, ParseError> {
    parse_number(token).ok_or_else(|| ParseError::Type { line: None, token: token.to_owned(), expected: Expected::Number })
}

#[cfg(test)]
#[path = "center_test.rs"]
mod tests;
