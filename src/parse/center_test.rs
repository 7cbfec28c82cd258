use super::*;

#[test]
fn parses_lat_lng_pair() {
    assert_eq!(parse_center("47.65 -122.3").unwrap(), MapCenter::new(47.65, -122.3));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse_center("  1\t 2 \n").unwrap(), MapCenter::new(1.0, 2.0));
}

#[test]
fn no_range_restriction_applies() {
    assert_eq!(parse_center("5000 -9000").unwrap(), MapCenter::new(5000.0, -9000.0));
}

#[test]
fn non_numeric_token_is_a_type_error() {
    let err = parse_center("abc 1").unwrap_err();
    assert_eq!(err, ParseError::Type { line: None, token: "abc".into(), expected: Expected::Number });
}

#[test]
fn wrong_token_count_is_a_format_error() {
    assert_eq!(parse_center("").unwrap_err(), ParseError::Format { line: None, expected: 2, found: 0 });
    assert_eq!(parse_center("1").unwrap_err(), ParseError::Format { line: None, expected: 2, found: 1 });
    assert_eq!(parse_center("1 2 3").unwrap_err(), ParseError::Format { line: None, expected: 2, found: 3 });
}

#[test]
fn message_has_no_line_prefix() {
    assert_eq!(parse_center("1").unwrap_err().to_string(), "expected 2 values, found 1");
}
