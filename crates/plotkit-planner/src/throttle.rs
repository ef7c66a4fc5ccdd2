//! Feasibility throttle.
//!
//! For each waypoint, finds the highest speed at which one time step of
//! travel along the path, replaced by a straight chord, stays within the
//! deviation threshold of every waypoint it cuts past.

use glam::DVec2;
use plotkit_core::PlanError;

/// Fixed number of bisection steps per waypoint.
const SEARCH_ITERATIONS: usize = 16;

/// Distance from `p` to the closed segment `a..b`.
pub fn segment_distance(p: DVec2, a: DVec2, b: DVec2) -> f64 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

/// Per-waypoint velocity caps for one polyline.
pub struct Throttler<'a> {
    waypoints: &'a [DVec2],
    /// Arc length from the first waypoint to each waypoint.
    cumulative: Vec<f64>,
    max_velocity: f64,
    delta_t: f64,
    threshold: f64,
}

impl<'a> Throttler<'a> {
    /// `waypoints` must not contain consecutive duplicates.
    pub fn new(waypoints: &'a [DVec2], max_velocity: f64, delta_t: f64, threshold: f64) -> Self {
        let mut cumulative = Vec::with_capacity(waypoints.len());
        let mut total = 0.0;
        cumulative.push(total);
        for pair in waypoints.windows(2) {
            total += pair[0].distance(pair[1]);
            cumulative.push(total);
        }
        Self {
            waypoints,
            cumulative,
            max_velocity,
            delta_t,
            threshold,
        }
    }

    /// Whether moving at `velocity` from waypoint `index` stays on the path.
    pub fn is_feasible(&self, index: usize, velocity: f64) -> bool {
        let last = self.waypoints.len() - 1;
        let reach = self.cumulative[index] + velocity * self.delta_t;

        let (next, target) = if reach >= self.cumulative[last] {
            (last, self.waypoints[last])
        } else {
            // Largest waypoint at or before `reach`; the target lies on
            // the segment leaving it.
            let next = self.cumulative.partition_point(|&s| s <= reach) - 1;
            let from = self.waypoints[next];
            let direction = (self.waypoints[next + 1] - from).normalize_or_zero();
            (next, from + direction * (reach - self.cumulative[next]))
        };

        if next == index {
            return true;
        }

        let origin = self.waypoints[index];
        self.waypoints[index + 1..=next]
            .iter()
            .all(|&w| segment_distance(w, origin, target) <= self.threshold)
    }

    /// Velocity caps for every waypoint that starts a segment.
    pub fn max_velocities(&self) -> Result<Vec<f64>, PlanError> {
        let count = self.waypoints.len().saturating_sub(1);
        let mut caps = Vec::with_capacity(count);

        for index in 0..count {
            if self.is_feasible(index, self.max_velocity) {
                caps.push(self.max_velocity);
                continue;
            }

            let mut low = 0.0;
            let mut high = self.max_velocity;
            for _ in 0..SEARCH_ITERATIONS {
                let velocity = (low + high) * 0.5;
                if self.is_feasible(index, velocity) {
                    low = velocity;
                } else {
                    high = velocity;
                }
            }

            if low <= 0.0 {
                return Err(PlanError::DegenerateGeometry {
                    reason: format!("no feasible velocity at waypoint {}", index),
                });
            }
            caps.push(low);
        }

        Ok(caps)
    }
}
