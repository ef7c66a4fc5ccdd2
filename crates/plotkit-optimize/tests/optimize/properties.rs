use std::collections::HashSet;

use plotkit_core::{PathTags, Point, Polyline};
use plotkit_optimize::{
    endpoint_records, quantize, round_paths, simplify_polyline, sort_order, IndexKind,
    SimplifyConfig, SortConfig, MAX_PRECISION,
};
use proptest::prelude::*;

fn polyline() -> impl Strategy<Value = Polyline> {
    prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 2..8).prop_map(|pts| {
        Polyline::new(
            pts.into_iter().map(Point::from).collect(),
            PathTags::default(),
        )
        .unwrap()
    })
}

/// Polylines spanning a plotter-sized coordinate range.
fn wide_polyline() -> impl Strategy<Value = Polyline> {
    prop::collection::vec((-1e6..1e6f64, -1e6..1e6f64), 2..8).prop_map(|pts| {
        Polyline::new(
            pts.into_iter().map(Point::from).collect(),
            PathTags::default(),
        )
        .unwrap()
    })
}

/// Polylines on a coarse integer grid, so shared endpoints and distance
/// ties are common.
fn grid_polyline() -> impl Strategy<Value = Polyline> {
    prop::collection::vec((0..6i32, 0..6i32), 2..4).prop_map(|pts| {
        Polyline::new(
            pts.into_iter()
                .map(|(x, y)| Point::new(x as f64, y as f64))
                .collect(),
            PathTags::default(),
        )
        .unwrap()
    })
}

proptest! {
    #[test]
    fn round_is_idempotent(
        paths in prop::collection::vec(wide_polyline(), 0..6),
        precision in 0u32..=MAX_PRECISION,
    ) {
        let mut once = paths;
        round_paths(&mut once, precision);
        let mut twice = once.clone();
        round_paths(&mut twice, precision);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn quantize_is_idempotent(value in -1e6..1e6f64, precision in 0u32..=MAX_PRECISION) {
        let once = quantize(value, precision);
        prop_assert_eq!(quantize(once, precision), once);
    }

    #[test]
    fn quantize_stays_close(value in -1e6..1e6f64, precision in 0u32..=6) {
        let q = quantize(value, precision);
        prop_assert!((q - value).abs() <= 0.5 * 10f64.powi(-(precision as i32)) + 1e-9);
    }

    #[test]
    fn simplify_keeps_endpoints(
        path in polyline(),
        merge_distance in 0.0..20.0f64,
        min_path_size in 0.0..20.0f64,
    ) {
        let config = SimplifyConfig { enabled: true, merge_distance, min_path_size };
        let original = path.clone();
        let mut simplified = path;
        if simplify_polyline(&mut simplified, &config) {
            prop_assert!(simplified.len() >= 2);
            prop_assert!(simplified.len() <= original.len());
            prop_assert_eq!(simplified.start(), original.start());
            // The end is kept, or snapped onto the start to close a loop.
            let end = simplified.end();
            prop_assert!(end == original.end() || end == original.start());
        } else {
            let first = original.start();
            prop_assert!(original.points().iter().all(|p| first.distance_to(p) <= min_path_size));
        }
    }

    #[test]
    fn sort_visits_each_path_once(
        paths in prop::collection::vec(grid_polyline(), 0..12),
        allow_reversal in any::<bool>(),
    ) {
        for index in [IndexKind::RTree, IndexKind::KdTree] {
            let config = SortConfig { enabled: true, allow_reversal, index };
            let steps = sort_order(&paths, &config).unwrap();
            prop_assert_eq!(steps.len(), paths.len());
            let unique: HashSet<usize> = steps.iter().map(|s| s.index).collect();
            prop_assert_eq!(unique.len(), paths.len());
            if !allow_reversal {
                prop_assert!(steps.iter().all(|s| !s.reversed));
            }
        }
    }

    #[test]
    fn sort_picks_nearest_endpoint(
        paths in prop::collection::vec(polyline(), 1..10),
        allow_reversal in any::<bool>(),
    ) {
        let config = SortConfig { enabled: true, allow_reversal, index: IndexKind::RTree };
        let steps = sort_order(&paths, &config).unwrap();
        let records = endpoint_records(&paths, allow_reversal);

        let mut visited = HashSet::new();
        let mut pen = Point::ORIGIN;
        for step in &steps {
            let path = &paths[step.index];
            let entry = if step.reversed { path.end() } else { path.start() };
            let chosen = pen.distance_squared_to(&entry);
            for record in records.iter().filter(|r| !visited.contains(&r.polyline)) {
                prop_assert!(pen.distance_squared_to(&record.point) >= chosen);
            }
            visited.insert(step.index);
            pen = if step.reversed { path.start() } else { path.end() };
        }
    }

    #[test]
    fn index_kinds_agree(
        paths in prop::collection::vec(grid_polyline(), 0..15),
        allow_reversal in any::<bool>(),
    ) {
        let rtree = sort_order(&paths, &SortConfig { enabled: true, allow_reversal, index: IndexKind::RTree }).unwrap();
        let kdtree = sort_order(&paths, &SortConfig { enabled: true, allow_reversal, index: IndexKind::KdTree }).unwrap();
        prop_assert_eq!(rtree, kdtree);
    }
}
