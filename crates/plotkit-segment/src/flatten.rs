//! Adaptive cubic Bézier flattening.
//!
//! Subdivides a cubic at its parameter midpoint until each piece passes a
//! flatness test (control point deviation from the chord), optionally
//! refined by an angle test and a cusp limit. Subdivision is driven by an
//! explicit work stack, so depth is bounded by `recursion` and never by the
//! call stack.

use std::f64::consts::PI;

use lyon::geom::{point, CubicBezierSegment};
use plotkit_core::{Point, SegmentError};
use serde::{Deserialize, Serialize};

/// Upper bound accepted for [`FlattenConfig::recursion`].
pub const MAX_RECURSION: u32 = 16;

type Cubic = CubicBezierSegment<f64>;

/// Flattening tolerances.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlattenConfig {
    /// Maximum subdivision depth.
    pub recursion: u32,
    /// Threshold below which a control point counts as lying on the chord.
    pub epsilon: f64,
    /// Distance tolerance; squared before use.
    pub path_epsilon: f64,
    /// Angle tolerance below which the angle test is disabled.
    pub angle_epsilon: f64,
    /// Angle tolerance in radians; `0` disables angle refinement.
    pub angle_tolerance: f64,
    /// Cusp limit in radians; `0` disables cusp handling.
    pub cusp_limit: f64,
}

impl Default for FlattenConfig {
    fn default() -> Self {
        Self {
            recursion: 8,
            epsilon: 1.192_092_90e-7,
            path_epsilon: 1.0,
            angle_epsilon: 0.01,
            angle_tolerance: 0.0,
            cusp_limit: 0.0,
        }
    }
}

impl FlattenConfig {
    /// Checks every tolerance is finite and in range.
    pub fn validate(&self) -> Result<(), SegmentError> {
        if self.recursion > MAX_RECURSION {
            return Err(invalid(
                "recursion",
                format!("must be at most {}, got {}", MAX_RECURSION, self.recursion),
            ));
        }
        if !(self.epsilon.is_finite() && self.epsilon > 0.0) {
            return Err(invalid("epsilon", format!("must be > 0, got {}", self.epsilon)));
        }
        for (name, value) in [
            ("path_epsilon", self.path_epsilon),
            ("angle_epsilon", self.angle_epsilon),
            ("angle_tolerance", self.angle_tolerance),
            ("cusp_limit", self.cusp_limit),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(invalid(name, format!("must be >= 0, got {}", value)));
            }
        }
        Ok(())
    }
}

fn invalid(name: &str, reason: String) -> SegmentError {
    SegmentError::InvalidParameter {
        name: name.to_string(),
        reason,
    }
}

/// What a piece that passed the flatness test contributes to the output.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Emit {
    Midpoint,
    Ctrl1,
    Ctrl2,
    BothCtrls,
}

/// Flattens cubic curves with a fixed set of tolerances.
#[derive(Debug, Clone, Copy)]
pub struct CurveFlattener {
    config: FlattenConfig,
    distance_tolerance: f64,
}

impl CurveFlattener {
    pub fn new(config: FlattenConfig) -> Result<Self, SegmentError> {
        config.validate()?;
        Ok(Self {
            config,
            distance_tolerance: config.path_epsilon * config.path_epsilon,
        })
    }

    pub fn config(&self) -> &FlattenConfig {
        &self.config
    }

    /// Appends the flattened points of the cubic `from -> to` to `out`.
    ///
    /// `from` itself is not appended; `to` always is, exactly.
    pub fn flatten_into(
        &self,
        from: Point,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
        out: &mut Vec<Point>,
    ) {
        let curve = Cubic {
            from: point(from.x, from.y),
            ctrl1: point(ctrl1.x, ctrl1.y),
            ctrl2: point(ctrl2.x, ctrl2.y),
            to: point(to.x, to.y),
        };

        let mut stack: Vec<(Cubic, u32)> = vec![(curve, 0)];
        while let Some((piece, level)) = stack.pop() {
            if level > self.config.recursion {
                continue;
            }

            // The whole curve is always split at least once.
            let emit = if level > 0 { self.flat_enough(&piece) } else { None };

            match emit {
                Some(Emit::Midpoint) => out.push(to_point(piece.sample(0.5))),
                Some(Emit::Ctrl1) => out.push(to_point(piece.ctrl1)),
                Some(Emit::Ctrl2) => out.push(to_point(piece.ctrl2)),
                Some(Emit::BothCtrls) => {
                    out.push(to_point(piece.ctrl1));
                    out.push(to_point(piece.ctrl2));
                }
                None => {
                    let (first, second) = piece.split(0.5);
                    stack.push((second, level + 1));
                    stack.push((first, level + 1));
                }
            }
        }

        out.push(to);
    }

    /// Flattens one cubic into a fresh vector, starting with `from`.
    pub fn flatten(&self, from: Point, ctrl1: Point, ctrl2: Point, to: Point) -> Vec<Point> {
        let mut out = vec![from];
        self.flatten_into(from, ctrl1, ctrl2, to, &mut out);
        out
    }

    fn flat_enough(&self, c: &Cubic) -> Option<Emit> {
        let FlattenConfig {
            epsilon,
            angle_epsilon,
            angle_tolerance,
            cusp_limit,
            ..
        } = self.config;
        let (x1, y1) = (c.from.x, c.from.y);
        let (x2, y2) = (c.ctrl1.x, c.ctrl1.y);
        let (x3, y3) = (c.ctrl2.x, c.ctrl2.y);
        let (x4, y4) = (c.to.x, c.to.y);

        let dx = x4 - x1;
        let dy = y4 - y1;
        let chord_sq = dx * dx + dy * dy;
        let d2 = ((x2 - x4) * dy - (y2 - y4) * dx).abs();
        let d3 = ((x3 - x4) * dy - (y3 - y4) * dx).abs();
        let angle_off = angle_tolerance < angle_epsilon;

        if d2 > epsilon && d3 > epsilon {
            if (d2 + d3) * (d2 + d3) <= self.distance_tolerance * chord_sq {
                if angle_off {
                    return Some(Emit::Midpoint);
                }
                let a23 = (y3 - y2).atan2(x3 - x2);
                let da1 = wrap_angle((a23 - (y2 - y1).atan2(x2 - x1)).abs());
                let da2 = wrap_angle(((y4 - y3).atan2(x4 - x3) - a23).abs());
                if da1 + da2 < angle_tolerance {
                    return Some(Emit::Midpoint);
                }
                if cusp_limit != 0.0 {
                    if da1 > cusp_limit {
                        return Some(Emit::Ctrl1);
                    }
                    if da2 > cusp_limit {
                        return Some(Emit::Ctrl2);
                    }
                }
            }
        } else if d2 > epsilon {
            if d2 * d2 <= self.distance_tolerance * chord_sq {
                if angle_off {
                    return Some(Emit::Midpoint);
                }
                let da1 = wrap_angle(((y3 - y2).atan2(x3 - x2) - (y2 - y1).atan2(x2 - x1)).abs());
                if da1 < angle_tolerance {
                    return Some(Emit::BothCtrls);
                }
                if cusp_limit != 0.0 && da1 > cusp_limit {
                    return Some(Emit::Ctrl1);
                }
            }
        } else if d3 > epsilon {
            if d3 * d3 <= self.distance_tolerance * chord_sq {
                if angle_off {
                    return Some(Emit::Midpoint);
                }
                let da1 = wrap_angle(((y4 - y3).atan2(x4 - x3) - (y3 - y2).atan2(x3 - x2)).abs());
                if da1 < angle_tolerance {
                    return Some(Emit::BothCtrls);
                }
                if cusp_limit != 0.0 && da1 > cusp_limit {
                    return Some(Emit::Ctrl2);
                }
            }
        } else {
            // All control points on the chord: compare the curve midpoint
            // with the chord midpoint.
            let mid = c.sample(0.5);
            let ddx = mid.x - (x1 + x4) / 2.0;
            let ddy = mid.y - (y1 + y4) / 2.0;
            if ddx * ddx + ddy * ddy <= self.distance_tolerance {
                return Some(Emit::Midpoint);
            }
        }

        None
    }
}

fn wrap_angle(angle: f64) -> f64 {
    if angle >= PI {
        2.0 * PI - angle
    } else {
        angle
    }
}

fn to_point(p: lyon::geom::Point<f64>) -> Point {
    Point::new(p.x, p.y)
}
