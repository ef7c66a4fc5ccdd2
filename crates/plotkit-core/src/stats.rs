//! Plot statistics
//!
//! Summarises a path collection in plot order: how far the pen travels
//! while drawing and while lifted. The pen starts and ends at the origin.

use serde::{Deserialize, Serialize};

use crate::geometry::Point;
use crate::polyline::Polyline;

/// Distance totals for a path collection in plot order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotStats {
    /// Number of polylines.
    pub path_count: usize,
    /// Total number of points across all polylines.
    pub point_count: usize,
    /// Distance travelled with the pen down.
    pub pen_down_distance: f64,
    /// Distance travelled with the pen up, including the return to origin.
    pub pen_up_distance: f64,
}

impl PlotStats {
    /// Computes statistics for `paths` in the given order.
    pub fn from_paths(paths: &[Polyline]) -> Self {
        let mut stats = PlotStats::default();
        let mut pen = Point::ORIGIN;

        for path in paths {
            stats.path_count += 1;
            stats.point_count += path.len();
            stats.pen_up_distance += pen.distance_to(&path.start());
            stats.pen_down_distance += path.length();
            pen = path.end();
        }

        if stats.path_count > 0 {
            stats.pen_up_distance += pen.distance_to(&Point::ORIGIN);
        }

        stats
    }

    /// Total pen travel, up and down.
    pub fn total_distance(&self) -> f64 {
        self.pen_down_distance + self.pen_up_distance
    }
}
