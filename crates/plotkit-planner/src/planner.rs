//! Motion planner: polylines in plot order to a timed motion plan.

use glam::DVec2;
use plotkit_core::{PlanError, Point, Polyline};
use tracing::{debug, info};

use crate::config::PlannerConfig;
use crate::plan::{MotionPlan, PlanEvent};
use crate::profile::{to_vec, MotionBlock};
use crate::segment::{build_segments, lookahead};
use crate::throttle::Throttler;

/// Waypoints closer than this are treated as one.
pub const DUPLICATE_EPSILON: f64 = 1e-9;

/// Plans acceleration-limited motion for an ordered path collection.
#[derive(Debug, Clone, Copy)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    /// Creates a planner, validating the configuration.
    pub fn new(config: PlannerConfig) -> Result<Self, PlanError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans `paths` in the given order.
    ///
    /// The pen starts at the origin, travels to each polyline, draws it
    /// between pen-down and pen-up markers, and finally returns to the
    /// origin. Zero-length travel moves are left out.
    pub fn plan(&self, paths: &[Polyline]) -> Result<MotionPlan, PlanError> {
        let mut events = Vec::new();
        let mut pen = DVec2::ZERO;

        for (index, path) in paths.iter().enumerate() {
            let waypoints = waypoints(path.points());
            let first = waypoints[0];
            let last = waypoints[waypoints.len() - 1];

            self.push_travel(&mut events, pen, first);
            events.push(PlanEvent::PenDown { path: index });
            for block in self.plan_waypoints(&waypoints)? {
                events.push(PlanEvent::Draw { path: index, block });
            }
            events.push(PlanEvent::PenUp { path: index });
            pen = last;
        }
        self.push_travel(&mut events, pen, DVec2::ZERO);

        let plan = MotionPlan { events };
        info!(
            "Planned {} paths: {} events, {:.3} s, {:.3} units ({:.3} drawing)",
            paths.len(),
            plan.events.len(),
            plan.duration(),
            plan.distance(),
            plan.draw_distance()
        );
        Ok(plan)
    }

    /// Plans the pen-down blocks along one polyline, starting and ending at
    /// rest. A single waypoint yields no blocks.
    pub fn plan_polyline(&self, path: &Polyline) -> Result<Vec<MotionBlock>, PlanError> {
        self.plan_waypoints(&waypoints(path.points()))
    }

    fn plan_waypoints(&self, waypoints: &[DVec2]) -> Result<Vec<MotionBlock>, PlanError> {
        if waypoints.len() < 2 {
            return Ok(Vec::new());
        }

        let PlannerConfig {
            acceleration,
            max_velocity,
            corner_factor,
            delta_t,
            deviation_threshold,
        } = self.config;

        let caps = Throttler::new(waypoints, max_velocity, delta_t, deviation_threshold)
            .max_velocities()?;
        let mut segments =
            build_segments(waypoints, &caps, max_velocity, acceleration, corner_factor);
        lookahead(&mut segments, acceleration);

        let blocks: Vec<MotionBlock> = segments
            .iter()
            .enumerate()
            .map(|(i, segment)| {
                let v_final = segments.get(i + 1).map_or(0.0, |next| next.entry_velocity);
                MotionBlock::plan(
                    segment.start,
                    segment.end,
                    segment.entry_velocity,
                    v_final,
                    segment.cruise_velocity,
                    acceleration,
                )
            })
            .collect();

        debug!(
            "Planned {} blocks over {} waypoints",
            blocks.len(),
            waypoints.len()
        );
        Ok(blocks)
    }

    fn push_travel(&self, events: &mut Vec<PlanEvent>, from: DVec2, to: DVec2) {
        if from.distance(to) <= DUPLICATE_EPSILON {
            return;
        }
        let block = MotionBlock::plan(
            from,
            to,
            0.0,
            0.0,
            self.config.max_velocity,
            self.config.acceleration,
        );
        events.push(PlanEvent::Travel { block });
    }
}

/// Converts points to waypoints, dropping consecutive duplicates.
fn waypoints(points: &[Point]) -> Vec<DVec2> {
    let mut out: Vec<DVec2> = Vec::with_capacity(points.len());
    for &p in points {
        let v = to_vec(p);
        match out.last() {
            Some(last) if last.distance(v) <= DUPLICATE_EPSILON => {}
            _ => out.push(v),
        }
    }
    out
}
