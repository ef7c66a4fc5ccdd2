//! # PlotKit Planner
//!
//! Turns polylines in plot order into a timed motion plan for a pen
//! plotter with constant acceleration.
//!
//! Per polyline the planner:
//! 1. drops consecutive duplicate waypoints,
//! 2. throttles each waypoint so one look-ahead step stays on the path,
//! 3. limits corner speeds from the joint angle,
//! 4. runs a backward and forward lookahead pass so the move starts and
//!    ends at rest,
//! 5. emits a triangle or trapezoid velocity profile per segment.
//!
//! Pen-up travel moves connect the polylines, starting and ending at the
//! origin.

pub mod config;
pub mod plan;
pub mod planner;
pub mod profile;
pub mod segment;
pub mod throttle;

pub use config::PlannerConfig;
pub use plan::{MotionPlan, PlanEvent, PlanInstant};
pub use planner::{Planner, DUPLICATE_EPSILON};
pub use profile::{BlockInstant, MotionBlock, MotionPhase, ProfileKind};
pub use segment::{corner_velocity, KinematicSegment};
pub use throttle::Throttler;
