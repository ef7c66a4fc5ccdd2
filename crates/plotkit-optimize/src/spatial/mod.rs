//! Spatial indices over polyline endpoints.
//!
//! Two interchangeable implementations back the greedy sort:
//!
//! - [`RTreeIndex`] - bulk-loaded R-tree with removal by predicate
//! - [`KdTreeIndex`] - static 2D tree with lazy deletion
//!
//! Both answer nearest queries with the same tie-break (smallest squared
//! distance, then smallest record order), so they yield the same sequence.

mod kdtree;
mod rtree;

use std::fmt;

use plotkit_core::{Point, Polyline};
use serde::{Deserialize, Serialize};

pub use kdtree::KdTreeIndex;
pub use rtree::RTreeIndex;

/// One routable endpoint of a polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EndpointRecord {
    /// Where the pen would put down to draw from this endpoint.
    pub point: Point,
    /// Index of the polyline in the input collection.
    pub polyline: usize,
    /// True when entering here means drawing the polyline backwards.
    pub reversed: bool,
    /// Position in the record list; breaks distance ties.
    pub order: usize,
}

impl EndpointRecord {
    /// Returns true if `self` wins over `other` for a query at `from`.
    pub(crate) fn closer_than(&self, other: &EndpointRecord, from: &Point) -> bool {
        let a = self.point.distance_squared_to(from);
        let b = other.point.distance_squared_to(from);
        a < b || (a == b && self.order < other.order)
    }
}

/// Builds the endpoint records for `paths`.
///
/// Every polyline contributes its start. With `allow_reversal` it also
/// contributes its end, unless the end coincides with the start.
pub fn endpoint_records(paths: &[Polyline], allow_reversal: bool) -> Vec<EndpointRecord> {
    let mut records = Vec::with_capacity(paths.len() * if allow_reversal { 2 } else { 1 });
    for (polyline, path) in paths.iter().enumerate() {
        records.push(EndpointRecord {
            point: path.start(),
            polyline,
            reversed: false,
            order: records.len(),
        });
        if allow_reversal && path.end() != path.start() {
            records.push(EndpointRecord {
                point: path.end(),
                polyline,
                reversed: true,
                order: records.len(),
            });
        }
    }
    records
}

/// A nearest-neighbour index over endpoint records.
pub trait EndpointIndex {
    fn kind(&self) -> IndexKind;

    /// Number of records still present.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The closest remaining record to `from`.
    fn nearest(&self, from: Point) -> Option<EndpointRecord>;

    /// Removes every record located exactly at `at` for which `matches`
    /// holds, returning how many were removed.
    fn remove_where(&mut self, at: Point, matches: &dyn Fn(&EndpointRecord) -> bool) -> usize;
}

/// Which index implementation the sort uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    #[default]
    RTree,
    KdTree,
}

impl IndexKind {
    /// Bulk-loads `records` into a fresh index of this kind.
    pub fn build(self, records: Vec<EndpointRecord>) -> Box<dyn EndpointIndex> {
        match self {
            IndexKind::RTree => Box::new(RTreeIndex::new(records)),
            IndexKind::KdTree => Box::new(KdTreeIndex::new(records)),
        }
    }
}

impl fmt::Display for IndexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKind::RTree => write!(f, "rtree"),
            IndexKind::KdTree => write!(f, "kdtree"),
        }
    }
}
