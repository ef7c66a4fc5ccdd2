//! Greedy nearest-endpoint ordering.
//!
//! Starting at the origin, repeatedly draws the polyline whose routable
//! endpoint is closest to the pen. With reversal allowed a polyline may be
//! entered at its end, in which case it is emitted reversed.

use std::borrow::Cow;

use plotkit_core::{OptimizeError, Point, Polyline};
use tracing::debug;

use crate::config::SortConfig;
use crate::spatial::{endpoint_records, EndpointIndex, EndpointRecord};

/// One pick of the greedy sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortStep {
    /// Index into the input collection.
    pub index: usize,
    /// Whether the polyline is drawn end to start.
    pub reversed: bool,
}

/// Computes the plot order for `paths` without touching them.
pub fn sort_order(paths: &[Polyline], config: &SortConfig) -> Result<Vec<SortStep>, OptimizeError> {
    let records = endpoint_records(paths, config.allow_reversal);
    debug!(
        "Sorting {} polylines over {} endpoints ({} index)",
        paths.len(),
        records.len(),
        config.index
    );
    let mut index = config.index.build(records);
    greedy_order(paths, index.as_mut())
}

fn greedy_order(
    paths: &[Polyline],
    index: &mut dyn EndpointIndex,
) -> Result<Vec<SortStep>, OptimizeError> {
    let mut visited = vec![false; paths.len()];
    let mut steps = Vec::with_capacity(paths.len());
    let mut pen = Point::ORIGIN;

    while steps.len() < paths.len() {
        let remaining = paths.len() - steps.len();
        let Some(nearest) = index.nearest(pen) else {
            return Err(OptimizeError::SortConsistency { remaining });
        };
        if visited[nearest.polyline] {
            return Err(OptimizeError::SortConsistency { remaining });
        }
        visited[nearest.polyline] = true;

        let path = &paths[nearest.polyline];
        let same_polyline = |r: &EndpointRecord| r.polyline == nearest.polyline;
        index.remove_where(path.start(), &same_polyline);
        index.remove_where(path.end(), &same_polyline);

        pen = if nearest.reversed {
            path.start()
        } else {
            path.end()
        };
        steps.push(SortStep {
            index: nearest.polyline,
            reversed: nearest.reversed,
        });
    }

    Ok(steps)
}

/// Sorts borrowed paths. Reversed picks are fresh copies; the rest borrow.
pub fn sort_paths<'a>(
    paths: &'a [Polyline],
    config: &SortConfig,
) -> Result<Vec<Cow<'a, Polyline>>, OptimizeError> {
    let steps = sort_order(paths, config)?;
    Ok(steps
        .into_iter()
        .map(|step| {
            let path = &paths[step.index];
            if step.reversed {
                Cow::Owned(path.reversed())
            } else {
                Cow::Borrowed(path)
            }
        })
        .collect())
}

/// Sorts owned paths, reversing the picked ones in place.
pub fn sort_owned(paths: Vec<Polyline>, config: &SortConfig) -> Result<Vec<Polyline>, OptimizeError> {
    let steps = sort_order(&paths, config)?;
    let mut slots: Vec<Option<Polyline>> = paths.into_iter().map(Some).collect();
    let total = slots.len();

    let mut sorted = Vec::with_capacity(total);
    for step in steps {
        let mut path = slots[step.index]
            .take()
            .ok_or(OptimizeError::SortConsistency {
                remaining: total - sorted.len(),
            })?;
        if step.reversed {
            path.reverse();
        }
        sorted.push(path);
    }
    Ok(sorted)
}
