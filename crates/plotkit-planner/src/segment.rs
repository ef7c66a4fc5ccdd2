//! Kinematic segments, cornering limits and lookahead.

use glam::DVec2;

/// Tolerance for the degenerate corner cases.
const EPSILON: f64 = 1e-9;

/// A straight move between two consecutive waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicSegment {
    pub start: DVec2,
    pub end: DVec2,
    pub length: f64,
    /// Unit direction from `start` to `end`.
    pub direction: DVec2,
    /// Throttled velocity cap for the whole segment.
    pub cruise_velocity: f64,
    /// Upper bound on the speed when entering the segment.
    pub max_entry_velocity: f64,
    /// Entry speed after lookahead.
    pub entry_velocity: f64,
}

impl KinematicSegment {
    /// `start` and `end` must differ.
    pub fn new(start: DVec2, end: DVec2, cruise_velocity: f64) -> Self {
        Self {
            start,
            end,
            length: start.distance(end),
            direction: (end - start).normalize_or_zero(),
            cruise_velocity,
            max_entry_velocity: cruise_velocity,
            entry_velocity: 0.0,
        }
    }
}

/// Highest speed at the joint between two unit directions.
///
/// A full reversal must stop; a straight continuation is only bounded by
/// `max_velocity`.
pub fn corner_velocity(
    incoming: DVec2,
    outgoing: DVec2,
    max_velocity: f64,
    acceleration: f64,
    corner_factor: f64,
) -> f64 {
    let cosine = -incoming.dot(outgoing);
    if (cosine - 1.0).abs() < EPSILON {
        return 0.0;
    }

    let sine = ((1.0 - cosine) / 2.0).max(0.0).sqrt();
    if (sine - 1.0).abs() < EPSILON {
        return max_velocity;
    }

    (acceleration * corner_factor * sine / (1.0 - sine))
        .sqrt()
        .min(max_velocity)
}

/// Builds segments between consecutive waypoints with their entry limits.
///
/// `caps[i]` is the throttled velocity at waypoint `i`.
pub fn build_segments(
    waypoints: &[DVec2],
    caps: &[f64],
    max_velocity: f64,
    acceleration: f64,
    corner_factor: f64,
) -> Vec<KinematicSegment> {
    let mut segments: Vec<KinematicSegment> = waypoints
        .windows(2)
        .zip(caps)
        .map(|(pair, &cap)| KinematicSegment::new(pair[0], pair[1], cap))
        .collect();

    for i in 1..segments.len() {
        let previous = segments[i - 1];
        let corner = corner_velocity(
            previous.direction,
            segments[i].direction,
            max_velocity,
            acceleration,
            corner_factor,
        );
        let segment = &mut segments[i];
        segment.max_entry_velocity = segment
            .max_entry_velocity
            .min(corner)
            .min(previous.cruise_velocity);
    }

    segments
}

/// Resolves entry velocities so every segment is reachable under
/// `acceleration`, starting and ending at rest.
pub fn lookahead(segments: &mut [KinematicSegment], acceleration: f64) {
    if segments.is_empty() {
        return;
    }

    // Backward: each entry must allow braking to the next entry.
    let mut exit = 0.0;
    for segment in segments.iter_mut().rev() {
        let reachable = (exit * exit + 2.0 * acceleration * segment.length).sqrt();
        segment.entry_velocity = segment.max_entry_velocity.min(reachable);
        exit = segment.entry_velocity;
    }

    // Forward: each entry must be reachable from the previous one.
    segments[0].entry_velocity = 0.0;
    for i in 1..segments.len() {
        let previous = segments[i - 1];
        let reachable = (previous.entry_velocity * previous.entry_velocity
            + 2.0 * acceleration * previous.length)
            .sqrt();
        let segment = &mut segments[i];
        segment.entry_velocity = segment.entry_velocity.min(reachable);
    }
}
