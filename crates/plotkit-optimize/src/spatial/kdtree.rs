use plotkit_core::Point;

use super::{EndpointIndex, EndpointRecord, IndexKind};

#[derive(Debug, Clone)]
struct Node {
    record: EndpointRecord,
    axis: usize,
    left: Option<usize>,
    right: Option<usize>,
    active: bool,
    /// Active records in this subtree, including the node itself.
    live: usize,
}

/// Static balanced 2D tree with lazy deletion.
///
/// Built once by alternating-axis median split. Removal only clears the
/// node's active flag; per-subtree live counts let searches skip fully
/// removed branches.
#[derive(Debug, Clone, Default)]
pub struct KdTreeIndex {
    nodes: Vec<Node>,
    root: Option<usize>,
}

fn coord(p: &Point, axis: usize) -> f64 {
    if axis == 0 {
        p.x
    } else {
        p.y
    }
}

impl KdTreeIndex {
    pub fn new(mut records: Vec<EndpointRecord>) -> Self {
        let mut index = Self {
            nodes: Vec::with_capacity(records.len()),
            root: None,
        };
        index.root = index.build(&mut records, 0);
        index
    }

    fn build(&mut self, records: &mut [EndpointRecord], depth: usize) -> Option<usize> {
        if records.is_empty() {
            return None;
        }

        let axis = depth % 2;
        records.sort_by(|a, b| {
            coord(&a.point, axis)
                .total_cmp(&coord(&b.point, axis))
                .then(a.order.cmp(&b.order))
        });
        let median = records.len() / 2;

        let id = self.nodes.len();
        self.nodes.push(Node {
            record: records[median],
            axis,
            left: None,
            right: None,
            active: true,
            live: records.len(),
        });

        let (lower, rest) = records.split_at_mut(median);
        let left = self.build(lower, depth + 1);
        let right = self.build(&mut rest[1..], depth + 1);
        self.nodes[id].left = left;
        self.nodes[id].right = right;

        Some(id)
    }

    fn search(&self, id: Option<usize>, from: &Point, best: &mut Option<EndpointRecord>) {
        let Some(id) = id else { return };
        let node = &self.nodes[id];
        if node.live == 0 {
            return;
        }

        if node.active && best.map_or(true, |b| node.record.closer_than(&b, from)) {
            *best = Some(node.record);
        }

        let diff = coord(from, node.axis) - coord(&node.record.point, node.axis);
        let (near, far) = if diff < 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };

        self.search(near, from, best);

        // A far-side record at equal distance can still win on order.
        let bound = best.map_or(f64::INFINITY, |b| b.point.distance_squared_to(from));
        if diff * diff <= bound {
            self.search(far, from, best);
        }
    }

    fn remove(
        &mut self,
        id: Option<usize>,
        at: &Point,
        matches: &dyn Fn(&EndpointRecord) -> bool,
    ) -> usize {
        let Some(id) = id else { return 0 };
        if self.nodes[id].live == 0 {
            return 0;
        }

        let mut removed = 0;
        let node = &mut self.nodes[id];
        if node.active && node.record.point == *at && matches(&node.record) {
            node.active = false;
            removed += 1;
        }

        let (axis, left, right) = (node.axis, node.left, node.right);
        let target = coord(at, axis);
        let split = coord(&self.nodes[id].record.point, axis);
        if target <= split {
            removed += self.remove(left, at, matches);
        }
        if target >= split {
            removed += self.remove(right, at, matches);
        }

        self.nodes[id].live -= removed;
        removed
    }
}

impl EndpointIndex for KdTreeIndex {
    fn kind(&self) -> IndexKind {
        IndexKind::KdTree
    }

    fn len(&self) -> usize {
        self.root.map_or(0, |root| self.nodes[root].live)
    }

    fn nearest(&self, from: Point) -> Option<EndpointRecord> {
        let mut best = None;
        self.search(self.root, &from, &mut best);
        best
    }

    fn remove_where(&mut self, at: Point, matches: &dyn Fn(&EndpointRecord) -> bool) -> usize {
        self.remove(self.root, &at, matches)
    }
}
