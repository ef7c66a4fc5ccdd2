use plotkit_core::{GeometryError, PathTags, Point, Polyline};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -1000.0..1000.0f64
}

fn points(min: usize) -> impl Strategy<Value = Vec<Point>> {
    prop::collection::vec((coord(), coord()).prop_map(Point::from), min..24)
}

proptest! {
    #[test]
    fn reverse_keeps_length_and_swaps_ends(points in points(2)) {
        let path = Polyline::untagged(points).unwrap();
        let reversed = path.reversed();
        prop_assert_eq!(reversed.start(), path.end());
        prop_assert_eq!(reversed.end(), path.start());
        prop_assert!((reversed.length() - path.length()).abs() <= 1e-9 * (1.0 + path.length()));

        let mut twice = reversed;
        twice.reverse();
        prop_assert_eq!(twice, path);
    }
}

#[test]
fn test_replace_points_keeps_old_on_failure() {
    let mut path = Polyline::from_flat(&[0.0, 0.0, 1.0, 1.0], PathTags::default()).unwrap();
    let err = path
        .replace_points(vec![Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0)])
        .unwrap_err();
    assert!(matches!(err, GeometryError::NonFinite { index: 1, .. }));
    assert_eq!(path.to_flat(), vec![0.0, 0.0, 1.0, 1.0]);
}

#[test]
fn test_json_shape() {
    let path = Polyline::from_flat(
        &[0.0, 0.0, 2.0, 0.5],
        PathTags::default().with_layer("l1").with_fill("none"),
    )
    .unwrap();
    let json = serde_json::to_value(&path).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "points": [0.0, 0.0, 2.0, 0.5], "fill": "none", "layerId": "l1" })
    );

    let short = serde_json::from_str::<Polyline>(r#"{ "points": [1.0, 2.0] }"#);
    assert!(short.is_err());
    let odd = serde_json::from_str::<Polyline>(r#"{ "points": [1.0, 2.0, 3.0] }"#);
    assert!(odd.is_err());
}
