//! Near-duplicate point merging and degenerate polyline removal.

use plotkit_core::{Point, Polyline};
use tracing::debug;

use crate::config::SimplifyConfig;

/// Simplifies one polyline in place.
///
/// Returns `false` when the polyline never leaves `min_path_size` of its
/// first point and should be dropped.
pub fn simplify_polyline(path: &mut Polyline, config: &SimplifyConfig) -> bool {
    let points = path.points();
    let first = points[0];
    if points[1..]
        .iter()
        .all(|p| first.distance_to(p) <= config.min_path_size)
    {
        return false;
    }

    let merged = merge_points(points, config.merge_distance);
    // merge_points keeps both endpoints, so the replacement always holds
    // at least two finite points.
    path.replace_points(merged).is_ok()
}

fn merge_points(points: &[Point], merge_distance: f64) -> Vec<Point> {
    let n = points.len();
    let mut kept = Vec::with_capacity(n);
    let mut index = 0;

    while index < n {
        let anchor = points[index];
        kept.push(anchor);

        let mut step = 1;
        while index + step < n - 1 && anchor.distance_to(&points[index + step]) < merge_distance {
            step += 1;
        }
        index += step;
    }

    // Snap a nearly closed loop shut.
    if kept.len() >= 3 {
        let last = kept.len() - 1;
        if kept[0].distance_to(&kept[last]) < merge_distance {
            kept[last] = kept[0];
        }
    }

    kept
}

/// Simplifies every polyline, removing the degenerate ones.
pub fn simplify_paths(paths: &mut Vec<Polyline>, config: &SimplifyConfig) {
    let before = paths.len();
    paths.retain_mut(|path| simplify_polyline(path, config));
    if paths.len() < before {
        debug!("Simplify dropped {} degenerate polylines", before - paths.len());
    }
}
