use plotkit_core::{PathTags, SegmentError};
use plotkit_segment::{FlattenConfig, PathDataConverter, Segmenter, Shape};

fn segmenter() -> Segmenter {
    Segmenter::new(FlattenConfig::default()).unwrap()
}

#[test]
fn test_single_square_shape() {
    let shapes = vec![Shape::path("M0,0 L10,0 L10,10 Z")];
    let lines = segmenter()
        .segment_shapes(&shapes, &PathDataConverter)
        .unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(
        lines[0].to_flat(),
        vec![0.0, 0.0, 10.0, 0.0, 10.0, 10.0, 0.0, 0.0]
    );
}

#[test]
fn test_shapes_keep_input_order_and_tags() {
    let shapes = vec![
        Shape::path("M0 0 L1 0").with_tags(PathTags::default().with_layer("one")),
        Shape::path("M9 9"),
        Shape::path("M5 5 L6 5 M7 7 L8 8").with_tags(PathTags::default().with_stroke("red")),
    ];
    let lines = segmenter()
        .segment_shapes(&shapes, &PathDataConverter)
        .unwrap();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].tags.layer_id.as_deref(), Some("one"));
    assert_eq!(lines[1].tags.stroke.as_deref(), Some("red"));
    assert_eq!(lines[2].tags.stroke.as_deref(), Some("red"));
    assert_eq!(lines[2].start().x, 7.0);
}

#[test]
fn test_unsupported_shape_aborts() {
    let shapes = vec![
        Shape::path("M0 0 L1 0"),
        Shape {
            tag: "ellipse".to_string(),
            ..Default::default()
        },
    ];
    let err = segmenter()
        .segment_shapes(&shapes, &PathDataConverter)
        .unwrap_err();
    assert_eq!(
        err,
        SegmentError::UnsupportedShape {
            tag: "ellipse".to_string()
        }
    );
}

#[test]
fn test_unsupported_command_aborts() {
    let shapes = vec![Shape::path("M0 0 A5 5 0 0 1 10 10")];
    let err = segmenter()
        .segment_shapes(&shapes, &PathDataConverter)
        .unwrap_err();
    assert_eq!(err, SegmentError::UnsupportedCommand { command: 'A' });
}

#[test]
fn test_shapes_from_json() {
    let shapes: Vec<Shape> = serde_json::from_str(
        r#"[{"tag":"path","d":"M0 0 C0 10 10 10 10 0","fill":"none"}]"#,
    )
    .unwrap();
    let lines = segmenter()
        .segment_shapes(&shapes, &PathDataConverter)
        .unwrap();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].len() > 2);
    assert_eq!(lines[0].end().x, 10.0);
    assert_eq!(lines[0].tags.fill.as_deref(), Some("none"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let err = Segmenter::new(FlattenConfig {
        epsilon: -1.0,
        ..Default::default()
    })
    .unwrap_err();
    assert!(matches!(err, SegmentError::InvalidParameter { .. }));
}
