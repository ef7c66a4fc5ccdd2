//! Trapezoid and triangle velocity profiles.

use glam::DVec2;
use plotkit_core::Point;
use serde::{Deserialize, Serialize};

/// Slack allowed when comparing a triangle peak with the cruise cap.
const PEAK_EPSILON: f64 = 1e-9;

/// Shape of a block's velocity profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Accelerate then decelerate, no cruise.
    Triangle,
    /// Accelerate, cruise, decelerate.
    Trapezoid,
}

/// Motion state at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotionPhase {
    Idle,
    Accelerating,
    Cruising,
    Decelerating,
}

/// Straight move with a constant-acceleration velocity profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionBlock {
    pub start: Point,
    pub end: Point,
    pub distance: f64,
    pub kind: ProfileKind,
    pub acceleration: f64,
    pub v_initial: f64,
    pub v_peak: f64,
    pub v_final: f64,
    pub accel_distance: f64,
    pub cruise_distance: f64,
    pub decel_distance: f64,
    pub accel_time: f64,
    pub cruise_time: f64,
    pub decel_time: f64,
}

/// Sampled state inside one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockInstant {
    pub position: Point,
    pub velocity: f64,
    pub phase: MotionPhase,
}

impl MotionBlock {
    /// Plans the move `start -> end` from `v_initial` to `v_final`, never
    /// exceeding `cruise_velocity`.
    ///
    /// Callers keep `v_initial` and `v_final` at or below `cruise_velocity`
    /// and reachable from each other under `acceleration`.
    pub fn plan(
        start: DVec2,
        end: DVec2,
        v_initial: f64,
        v_final: f64,
        cruise_velocity: f64,
        acceleration: f64,
    ) -> Self {
        let distance = start.distance(end);
        let a = acceleration;
        let (vi, vf) = (v_initial, v_final);

        let accel_distance =
            ((2.0 * a * distance + vf * vf - vi * vi) / (4.0 * a)).clamp(0.0, distance);
        let triangle_peak = (vi * vi + 2.0 * a * accel_distance).sqrt();

        let (kind, v_peak, accel_distance, cruise_distance, decel_distance) =
            if triangle_peak <= cruise_velocity + PEAK_EPSILON {
                (
                    ProfileKind::Triangle,
                    triangle_peak,
                    accel_distance,
                    0.0,
                    distance - accel_distance,
                )
            } else {
                let c = cruise_velocity;
                let accel = ((c * c - vi * vi) / (2.0 * a)).max(0.0);
                let decel = ((c * c - vf * vf) / (2.0 * a)).max(0.0);
                let cruise = (distance - accel - decel).max(0.0);
                (ProfileKind::Trapezoid, c, accel, cruise, decel)
            };

        let accel_time = (v_peak - vi).max(0.0) / a;
        let decel_time = (v_peak - vf).max(0.0) / a;
        let cruise_time = if v_peak > 0.0 {
            cruise_distance / v_peak
        } else {
            0.0
        };

        Self {
            start: to_point(start),
            end: to_point(end),
            distance,
            kind,
            acceleration: a,
            v_initial: vi,
            v_peak,
            v_final: vf,
            accel_distance,
            cruise_distance,
            decel_distance,
            accel_time,
            cruise_time,
            decel_time,
        }
    }

    /// Total time to execute the block.
    pub fn duration(&self) -> f64 {
        self.accel_time + self.cruise_time + self.decel_time
    }

    /// State `t` seconds after the block starts, clamped to the block.
    pub fn instant(&self, t: f64) -> BlockInstant {
        let a = self.acceleration;
        let t = t.max(0.0);

        let (travelled, velocity, phase) = if t < self.accel_time {
            (
                self.v_initial * t + 0.5 * a * t * t,
                self.v_initial + a * t,
                MotionPhase::Accelerating,
            )
        } else if t < self.accel_time + self.cruise_time {
            let tc = t - self.accel_time;
            (
                self.accel_distance + self.v_peak * tc,
                self.v_peak,
                MotionPhase::Cruising,
            )
        } else if t < self.duration() {
            let td = t - self.accel_time - self.cruise_time;
            (
                self.accel_distance + self.cruise_distance + self.v_peak * td - 0.5 * a * td * td,
                self.v_peak - a * td,
                MotionPhase::Decelerating,
            )
        } else {
            let phase = if self.v_final > 0.0 {
                MotionPhase::Cruising
            } else {
                MotionPhase::Idle
            };
            (self.distance, self.v_final, phase)
        };

        BlockInstant {
            position: self.position_at(travelled),
            velocity: velocity.max(0.0),
            phase,
        }
    }

    fn position_at(&self, travelled: f64) -> Point {
        if self.distance <= 0.0 {
            return self.start;
        }
        self.start
            .lerp(&self.end, (travelled / self.distance).clamp(0.0, 1.0))
    }
}

pub(crate) fn to_point(v: DVec2) -> Point {
    Point::new(v.x, v.y)
}

pub(crate) fn to_vec(p: Point) -> DVec2 {
    DVec2::new(p.x, p.y)
}
