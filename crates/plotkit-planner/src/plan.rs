//! Motion plan timeline.

use plotkit_core::Point;
use serde::{Deserialize, Serialize};

use crate::profile::{MotionBlock, MotionPhase};

/// One entry of the plan, in execution order.
///
/// Pen markers are instantaneous; the device driver decides how to turn
/// them into hardware signals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanEvent {
    /// Pen-up move between polylines or back to the origin.
    Travel { block: MotionBlock },
    /// Lower the pen before drawing polyline `path`.
    PenDown { path: usize },
    /// Pen-down move along polyline `path`.
    Draw { path: usize, block: MotionBlock },
    /// Raise the pen after polyline `path`.
    PenUp { path: usize },
}

impl PlanEvent {
    pub fn block(&self) -> Option<&MotionBlock> {
        match self {
            PlanEvent::Travel { block } | PlanEvent::Draw { block, .. } => Some(block),
            PlanEvent::PenDown { .. } | PlanEvent::PenUp { .. } => None,
        }
    }
}

/// Sampled machine state at a point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanInstant {
    pub time: f64,
    pub position: Point,
    pub velocity: f64,
    pub phase: MotionPhase,
    pub pen_down: bool,
}

/// A complete plan: travel and draw blocks bracketed by pen markers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionPlan {
    pub events: Vec<PlanEvent>,
}

impl MotionPlan {
    pub fn blocks(&self) -> impl Iterator<Item = &MotionBlock> {
        self.events.iter().filter_map(PlanEvent::block)
    }

    /// Total execution time in seconds.
    pub fn duration(&self) -> f64 {
        self.blocks().map(MotionBlock::duration).sum()
    }

    /// Total distance, pen up and down.
    pub fn distance(&self) -> f64 {
        self.blocks().map(|b| b.distance).sum()
    }

    pub fn draw_distance(&self) -> f64 {
        self.events
            .iter()
            .filter_map(|e| match e {
                PlanEvent::Draw { block, .. } => Some(block.distance),
                _ => None,
            })
            .sum()
    }

    pub fn travel_distance(&self) -> f64 {
        self.events
            .iter()
            .filter_map(|e| match e {
                PlanEvent::Travel { block } => Some(block.distance),
                _ => None,
            })
            .sum()
    }

    /// Samples the plan `time` seconds after the start.
    ///
    /// Before the start and after the end the machine is idle with the pen
    /// up, at the first block's start and the last block's end respectively.
    pub fn instant(&self, time: f64) -> PlanInstant {
        let mut elapsed = 0.0;
        let mut position = self
            .blocks()
            .next()
            .map_or(Point::ORIGIN, |b| b.start);

        if time >= 0.0 {
            for event in &self.events {
                let (block, pen_down) = match event {
                    PlanEvent::Travel { block } => (block, false),
                    PlanEvent::Draw { block, .. } => (block, true),
                    PlanEvent::PenDown { .. } | PlanEvent::PenUp { .. } => continue,
                };

                let duration = block.duration();
                if time < elapsed + duration {
                    let sample = block.instant(time - elapsed);
                    return PlanInstant {
                        time,
                        position: sample.position,
                        velocity: sample.velocity,
                        phase: sample.phase,
                        pen_down,
                    };
                }
                elapsed += duration;
                position = block.end;
            }
        }

        PlanInstant {
            time,
            position,
            velocity: 0.0,
            phase: MotionPhase::Idle,
            pen_down: false,
        }
    }
}
