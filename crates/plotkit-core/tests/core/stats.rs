use plotkit_core::{PlotStats, Point, Polyline};
use proptest::prelude::*;

fn polyline() -> impl Strategy<Value = Polyline> {
    prop::collection::vec((-100.0..100.0f64, -100.0..100.0f64), 2..8).prop_map(|coords| {
        Polyline::untagged(coords.into_iter().map(Point::from).collect()).unwrap()
    })
}

proptest! {
    #[test]
    fn pen_down_is_order_independent(paths in prop::collection::vec(polyline(), 0..10)) {
        let stats = PlotStats::from_paths(&paths);
        let expected: f64 = paths.iter().map(Polyline::length).sum();
        prop_assert!((stats.pen_down_distance - expected).abs() <= 1e-9 * (1.0 + expected));

        let mut shuffled: Vec<Polyline> = paths.iter().rev().map(Polyline::reversed).collect();
        shuffled.rotate_left(paths.len() / 2);
        let other = PlotStats::from_paths(&shuffled);
        prop_assert!((other.pen_down_distance - stats.pen_down_distance).abs() <= 1e-6);
        prop_assert_eq!(other.point_count, stats.point_count);
    }

    #[test]
    fn pen_up_covers_origin_round_trip(paths in prop::collection::vec(polyline(), 1..10)) {
        let stats = PlotStats::from_paths(&paths);
        let first = paths[0].start().distance_to(&Point::ORIGIN);
        let last = paths[paths.len() - 1].end().distance_to(&Point::ORIGIN);
        prop_assert!(stats.pen_up_distance + 1e-9 >= first.max(last));
    }
}

#[test]
fn test_empty_collection() {
    assert_eq!(PlotStats::from_paths(&[]), PlotStats::default());
}
