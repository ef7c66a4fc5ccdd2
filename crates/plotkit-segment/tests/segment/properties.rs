use plotkit_core::{PathTags, Point};
use plotkit_segment::{CurveFlattener, FlattenConfig, Segmenter};
use proptest::prelude::*;

fn coord() -> impl Strategy<Value = f64> {
    -500.0..500.0f64
}

fn point() -> impl Strategy<Value = Point> {
    (coord(), coord()).prop_map(|(x, y)| Point::new(x, y))
}

proptest! {
    #[test]
    fn flattened_cubic_ends_exactly_at_target(
        from in point(),
        c1 in point(),
        c2 in point(),
        to in point(),
        recursion in 0u32..=10,
    ) {
        let flattener = CurveFlattener::new(FlattenConfig {
            recursion,
            ..Default::default()
        })
        .unwrap();
        let points = flattener.flatten(from, c1, c2, to);
        prop_assert_eq!(points[0], from);
        prop_assert_eq!(*points.last().unwrap(), to);
        prop_assert!(points.iter().all(|p| p.is_finite()));
        // One point per leaf at most, plus both endpoints.
        prop_assert!(points.len() <= (1usize << (recursion + 1)) + 2);
    }

    #[test]
    fn line_paths_keep_their_vertices(points in prop::collection::vec(point(), 2..12)) {
        let mut data = format!("M{} {}", points[0].x, points[0].y);
        for p in &points[1..] {
            data.push_str(&format!(" L{} {}", p.x, p.y));
        }
        let segmenter = Segmenter::new(FlattenConfig::default()).unwrap();
        let lines = segmenter.segment_path(&data, &PathTags::default()).unwrap();
        prop_assert_eq!(lines.len(), 1);
        prop_assert_eq!(lines[0].points(), points.as_slice());
    }
}
