use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_nothing_is_set() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.routing.base_url, DEFAULT_ROUTING_URL);
    assert_eq!(cfg.routing.route_color, "red");
    assert_eq!(
        cfg.routing.timeouts,
        RequestTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.routing.retry, RetryPolicy { attempts: DEFAULT_RETRY_ATTEMPTS, base_ms: DEFAULT_RETRY_BASE_MS });
    assert_eq!(cfg.view.default_center, MapCenter::new(DEFAULT_CENTER_LAT, DEFAULT_CENTER_LNG));
    assert_eq!(cfg.view.zoom, DEFAULT_ZOOM);
    assert_eq!(cfg.default_building, "PAR");
    assert_eq!(cfg.bounds, CanvasBounds::default());
}

#[test]
fn overrides_are_applied() {
    let cfg = config_from(&[
        ("CAMPUSLINES_ROUTING_URL", "http://routes.test:8080/"),
        ("CAMPUSLINES_CENTER_LAT", "1.5"),
        ("CAMPUSLINES_CENTER_LNG", " -2.25 "),
        ("CAMPUSLINES_ROUTE_COLOR", "Blue"),
        ("CAMPUSLINES_DEFAULT_BUILDING", "CSE"),
        ("CAMPUSLINES_ZOOM", "12"),
        ("CAMPUSLINES_REQUEST_TIMEOUT_SECS", "42"),
        ("CAMPUSLINES_CONNECT_TIMEOUT_SECS", "7"),
        ("CAMPUSLINES_RETRIES", "5"),
        ("CAMPUSLINES_RETRY_BASE_MS", "50"),
    ])
    .unwrap();

    assert_eq!(cfg.routing.base_url, "http://routes.test:8080");
    assert_eq!(cfg.view.default_center, MapCenter::new(1.5, -2.25));
    assert_eq!(cfg.routing.route_color, "Blue");
    assert_eq!(cfg.default_building, "CSE");
    assert_eq!(cfg.view.zoom, 12);
    assert_eq!(cfg.routing.timeouts, RequestTimeouts { request_secs: 42, connect_secs: 7 });
    assert_eq!(cfg.routing.retry, RetryPolicy { attempts: 5, base_ms: 50 });
}

#[test]
fn malformed_center_is_an_error() {
    let err = config_from(&[("CAMPUSLINES_CENTER_LAT", "north")]).unwrap_err();
    assert!(err.to_string().contains("CAMPUSLINES_CENTER_LAT"));

    let err = config_from(&[("CAMPUSLINES_CENTER_LNG", "NaN")]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidNumber { key: "CAMPUSLINES_CENTER_LNG", .. }));
}

#[test]
fn empty_color_is_an_error() {
    let err = config_from(&[("CAMPUSLINES_ROUTE_COLOR", "  ")]).unwrap_err();
    assert!(matches!(err, ConfigError::Empty { key: "CAMPUSLINES_ROUTE_COLOR" }));
}

#[test]
fn bad_tuning_knobs_fall_back_to_defaults() {
    let cfg = config_from(&[
        ("CAMPUSLINES_REQUEST_TIMEOUT_SECS", "soon"),
        ("CAMPUSLINES_ZOOM", "999"),
        ("CAMPUSLINES_RETRIES", "0"),
    ])
    .unwrap();
    assert_eq!(cfg.routing.timeouts.request_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    assert_eq!(cfg.view.zoom, DEFAULT_ZOOM);
    assert_eq!(cfg.routing.retry.attempts, 1);
}
