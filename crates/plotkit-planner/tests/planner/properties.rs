use plotkit_core::{PathTags, Point, Polyline};
use plotkit_planner::{corner_velocity, Planner, PlannerConfig};
use proptest::prelude::*;

use glam::DVec2;

fn polyline() -> impl Strategy<Value = Polyline> {
    prop::collection::vec((-50.0..50.0f64, -50.0..50.0f64), 2..10).prop_map(|pts| {
        Polyline::new(pts.into_iter().map(Point::from).collect(), PathTags::default()).unwrap()
    })
}

proptest! {
    #[test]
    fn blocks_respect_kinematic_limits(
        paths in prop::collection::vec(polyline(), 1..4),
        max_velocity in 0.5..10.0f64,
        acceleration in 1.0..50.0f64,
    ) {
        let config = PlannerConfig { max_velocity, acceleration, ..Default::default() };
        let plan = Planner::new(config).unwrap().plan(&paths).unwrap();

        for block in plan.blocks() {
            prop_assert!(block.v_initial >= 0.0);
            prop_assert!(block.v_final >= 0.0);
            prop_assert!(block.v_peak <= max_velocity + 1e-9);
            let legs = block.accel_distance + block.cruise_distance + block.decel_distance;
            prop_assert!((legs - block.distance).abs() <= 1e-6 * block.distance.max(1.0));
            prop_assert!(block.duration().is_finite());
        }
    }

    #[test]
    fn plan_returns_to_origin(paths in prop::collection::vec(polyline(), 1..4)) {
        let plan = Planner::new(PlannerConfig::default()).unwrap().plan(&paths).unwrap();
        let end = plan.instant(plan.duration() + 1.0);
        prop_assert_eq!(end.position, Point::ORIGIN);
    }

    #[test]
    fn corner_velocity_is_bounded(angle in 0.0..std::f64::consts::TAU) {
        let incoming = DVec2::X;
        let outgoing = DVec2::new(angle.cos(), angle.sin());
        let v = corner_velocity(incoming, outgoing, 4.0, 16.0, 0.001);
        prop_assert!((0.0..=4.0).contains(&v));
    }
}
