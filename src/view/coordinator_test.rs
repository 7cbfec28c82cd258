use super::*;
use crate::model::{CanvasBounds, ColoredSegment};
use crate::parse::{parse_center, parse_edges};
use crate::view::render::test_helpers::RecordingRenderer;

const DEFAULT_CENTER: MapCenter = MapCenter::new(47.659_79, -122.304_64);

fn coordinator() -> ViewCoordinator<RecordingRenderer> {
    ViewCoordinator::new(ViewConfig { default_center: DEFAULT_CENTER, zoom: 15 }, RecordingRenderer::default())
}

fn set(color: &str, n: usize) -> SegmentSet {
    #[allow(clippy::cast_precision_loss)]
    let segments = (0..n)
        .map(|i| ColoredSegment::new(i as f64, 0.0, i as f64, 10.0, color))
        .collect::<Vec<_>>();
    SegmentSet::from(segments)
}

#[test]
fn starts_empty_at_default_center_without_rendering() {
    let view = coordinator();
    assert!(view.segments().is_empty());
    assert_eq!(view.center(), DEFAULT_CENTER);
    assert!(view.renderer().frames.is_empty());
}

#[test]
fn publish_renders_current_state_without_new_revision() {
    let mut view = coordinator();
    view.publish();
    view.publish();
    assert_eq!(view.renderer().frames.len(), 2);
    assert_eq!(view.renderer().last_frame().revision, 0);
}

#[test]
fn each_event_renders_exactly_once() {
    let mut view = coordinator();
    view.dispatch(ViewEvent::EdgesParsed(set("red", 2)));
    view.dispatch(ViewEvent::CenterParsed(MapCenter::new(1.0, 2.0)));
    view.dispatch(ViewEvent::RouteCleared);
    let revisions: Vec<u64> = view.renderer().frames.iter().map(|f| f.revision).collect();
    assert_eq!(revisions, vec![1, 2, 3]);
}

#[test]
fn parsed_edges_replace_segments_and_keep_center() {
    let mut view = coordinator();
    view.dispatch(ViewEvent::CenterParsed(MapCenter::new(1.0, 2.0)));
    let parsed = parse_edges("0 0 10 10 red", CanvasBounds::default()).unwrap();
    view.dispatch(ViewEvent::EdgesParsed(parsed.clone()));

    let frame = view.renderer().last_frame();
    assert_eq!(frame.segments, parsed);
    assert_eq!(frame.center, MapCenter::new(1.0, 2.0));
}

#[test]
fn rejected_edges_clear_segments_and_alert() {
    let mut view = coordinator();
    view.dispatch(ViewEvent::EdgesParsed(set("red", 3)));
    let err = parse_edges("0 0 10 10 red\n1 1", CanvasBounds::default()).unwrap_err();
    view.dispatch(ViewEvent::EdgesRejected(err));

    assert!(view.segments().is_empty());
    assert_eq!(view.renderer().alerts, vec!["line 2: expected 5 values, found 2".to_owned()]);
    assert!(view.renderer().last_frame().segments.is_empty());
}

#[test]
fn cleared_edges_empty_the_set_without_alert() {
    let mut view = coordinator();
    view.dispatch(ViewEvent::EdgesParsed(set("red", 3)));
    view.dispatch(ViewEvent::EdgesCleared);
    assert!(view.segments().is_empty());
    assert!(view.renderer().alerts.is_empty());
}

#[test]
fn parsed_center_replaces_center_and_keeps_segments() {
    let mut view = coordinator();
    view.dispatch(ViewEvent::EdgesParsed(set("red", 2)));
    view.dispatch(ViewEvent::CenterParsed(parse_center("47.65 -122.3").unwrap()));

    assert_eq!(view.center(), MapCenter::new(47.65, -122.3));
    assert_eq!(view.segments().len(), 2);
}

#[test]
fn rejected_center_resets_to_default() {
    let mut view = coordinator();
    view.dispatch(ViewEvent::CenterParsed(MapCenter::new(1.0, 2.0)));
    view.dispatch(ViewEvent::EdgesParsed(set("red", 2)));
    view.dispatch(ViewEvent::CenterRejected(parse_center("abc 1").unwrap_err()));

    assert_eq!(view.center(), DEFAULT_CENTER);
    assert_eq!(view.segments().len(), 2);
    assert_eq!(view.renderer().alerts.len(), 1);
}

#[test]
fn route_supersedes_typed_edges() {
    let mut view = coordinator();
    view.dispatch(ViewEvent::EdgesParsed(set("blue", 4)));
    view.dispatch(ViewEvent::RouteFetched(set("red", 2)));

    assert_eq!(view.segments(), &set("red", 2));
}

#[test]
fn typed_edges_supersede_route() {
    let mut view = coordinator();
    view.dispatch(ViewEvent::RouteFetched(set("red", 2)));
    view.dispatch(ViewEvent::EdgesParsed(set("blue", 1)));

    assert_eq!(view.segments(), &set("blue", 1));
}

#[test]
fn cleared_route_empties_the_set() {
    let mut view = coordinator();
    view.dispatch(ViewEvent::RouteFetched(set("red", 2)));
    view.dispatch(ViewEvent::RouteCleared);
    assert!(view.segments().is_empty());
}

#[test]
fn failed_route_keeps_previous_state_and_surfaces_error() {
    let mut view = coordinator();
    view.dispatch(ViewEvent::RouteFetched(set("red", 2)));
    view.dispatch(ViewEvent::RouteFailed("routing service returned status 503".into()));

    assert_eq!(view.segments(), &set("red", 2));
    assert_eq!(view.last_error(), Some("routing service returned status 503"));
    assert_eq!(view.renderer().alerts, vec!["routing service returned status 503".to_owned()]);

    let frame = view.renderer().last_frame();
    assert_eq!(frame.segments, set("red", 2));
    assert_eq!(frame.last_error.as_deref(), Some("routing service returned status 503"));
}

#[test]
fn next_successful_event_clears_last_error() {
    let mut view = coordinator();
    view.dispatch(ViewEvent::RouteFailed("boom".into()));
    view.dispatch(ViewEvent::RouteFetched(set("red", 1)));
    assert_eq!(view.last_error(), None);
    assert!(view.renderer().last_frame().last_error.is_none());
}
