use plotkit_core::Point;
use rstar::{Envelope, PointDistance, RTree, RTreeObject, SelectionFunction, AABB};

use super::{EndpointIndex, EndpointRecord, IndexKind};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Entry(EndpointRecord);

impl RTreeObject for Entry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.0.point.into())
    }
}

impl PointDistance for Entry {
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        self.0.point.distance_squared_to(&Point::from(*point))
    }
}

/// Selects entries at one location that satisfy a predicate.
struct AtPoint<'a> {
    at: [f64; 2],
    matches: &'a dyn Fn(&EndpointRecord) -> bool,
}

impl SelectionFunction<Entry> for AtPoint<'_> {
    fn should_unpack_parent(&self, envelope: &AABB<[f64; 2]>) -> bool {
        envelope.contains_point(&self.at)
    }

    fn should_unpack_leaf(&self, leaf: &Entry) -> bool {
        leaf.0.point == Point::from(self.at) && (self.matches)(&leaf.0)
    }
}

/// Endpoint index backed by a bulk-loaded R-tree.
pub struct RTreeIndex {
    tree: RTree<Entry>,
}

impl RTreeIndex {
    pub fn new(records: Vec<EndpointRecord>) -> Self {
        let entries = records.into_iter().map(Entry).collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }
}

impl EndpointIndex for RTreeIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::RTree
    }

    fn len(&self) -> usize {
        self.tree.size()
    }

    fn nearest(&self, from: Point) -> Option<EndpointRecord> {
        let mut hits = self
            .tree
            .nearest_neighbor_iter_with_distance_2(&from.into());
        let (first, best_d2) = hits.next()?;
        let mut best = first.0;
        // Equidistant candidates come next; keep the lowest order.
        for (entry, d2) in hits {
            if d2 != best_d2 {
                break;
            }
            if entry.0.order < best.order {
                best = entry.0;
            }
        }
        Some(best)
    }

    fn remove_where(&mut self, at: Point, matches: &dyn Fn(&EndpointRecord) -> bool) -> usize {
        let mut removed = 0;
        loop {
            let selection = AtPoint {
                at: at.into(),
                matches,
            };
            if self.tree.remove_with_selection_function(selection).is_none() {
                break;
            }
            removed += 1;
        }
        removed
    }
}
