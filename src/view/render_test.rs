use serde_json::{Value, json};

use super::*;
use crate::model::{ColoredSegment, MapCenter, SegmentSet};

fn snapshot(segments: Vec<ColoredSegment>, last_error: Option<&str>) -> ViewSnapshot {
    ViewSnapshot {
        revision: 3,
        segments: SegmentSet::from(segments),
        center: MapCenter::new(47.65, -122.3),
        zoom: 15,
        last_error: last_error.map(str::to_owned),
    }
}

#[test]
fn frame_lists_lines_with_index_keys_and_lowercase_colors() {
    let view = snapshot(
        vec![
            ColoredSegment::new(0.0, 0.0, 10.0, 10.0, "RED"),
            ColoredSegment::new(1.0, 2.0, 3.0, 4.0, "Blue"),
        ],
        None,
    );
    let frame: Value = serde_json::from_str(&render_frame_json(&view).unwrap()).unwrap();
    assert_eq!(
        frame,
        json!({
            "revision": 3,
            "center": [47.65, -122.3],
            "zoom": 15,
            "lines": [
                {"key": 0, "x1": 0.0, "y1": 0.0, "x2": 10.0, "y2": 10.0, "color": "red"},
                {"key": 1, "x1": 1.0, "y1": 2.0, "x2": 3.0, "y2": 4.0, "color": "blue"}
            ]
        })
    );
}

#[test]
fn frame_includes_error_when_present() {
    let view = snapshot(vec![], Some("routing service returned status 503"));
    let frame: Value = serde_json::from_str(&render_frame_json(&view).unwrap()).unwrap();
    assert_eq!(frame["error"], "routing service returned status 503");
    assert_eq!(frame["lines"], json!([]));
}

#[test]
fn renderer_writes_one_line_per_frame() {
    let mut renderer = JsonLinesRenderer::new(Vec::new(), Vec::new());
    renderer.render(&snapshot(vec![], None));
    renderer.render(&snapshot(vec![ColoredSegment::new(1.0, 1.0, 2.0, 2.0, "red")], None));

    let (frames, messages) = renderer.into_parts();
    let frames = String::from_utf8(frames).unwrap();
    assert_eq!(frames.lines().count(), 2);
    assert!(messages.is_empty());
}

#[test]
fn alerts_and_directory_go_to_message_stream() {
    let mut renderer = JsonLinesRenderer::new(Vec::new(), Vec::new());
    renderer.alert("line 1: expected 5 values, found 2");
    let dir: BuildingDirectory = [("PAR".to_owned(), "Parrington Hall".to_owned())]
        .into_iter()
        .collect();
    renderer.directory(&dir);

    let (frames, messages) = renderer.into_parts();
    assert!(frames.is_empty());
    let messages = String::from_utf8(messages).unwrap();
    assert_eq!(messages, "alert: line 1: expected 5 values, found 2\nPAR    Parrington Hall\n");
}
