use crate::distance::squared_euclidean;
use crate::error::Error;
use crate::node::{Node, NIL};
use crate::select::select_median;
use tracing::trace;

/// Result of a nearest-neighbor query: the winning point, its squared
/// distance to the query, and how many tree nodes the search evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<const D: usize> {
    pub point: [f64; D],
    pub distance_squared: f64,
    pub visited: usize,
}

impl<const D: usize> Nearest<D> {
    /// Euclidean distance to the query. The search itself works on squared
    /// distances; the square root is taken only here.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.distance_squared.sqrt()
    }
}

// Search state threaded through the recursion, so the tree itself stays
// immutable and can serve concurrent queries.
struct Search {
    best: usize,
    best_distance: f64,
    visited: usize,
}

/// A static k-d tree over `[f64; D]` points.
///
/// Nodes live in one contiguous arena; `left`/`right` are slot ids into it,
/// with `usize::MAX` marking an absent child. The tree is balanced by
/// construction: each level selects the median of its subrange on a
/// round-robin axis, so both children hold half of the parent's points
/// regardless of the value distribution.
pub struct KdTree<const D: usize> {
    nodes: Vec<Node<D>>,
    root: usize,
}

impl<const D: usize> KdTree<D> {
    /// Builds an index over the given points. An empty input produces an
    /// empty index, which is valid but cannot answer queries.
    #[must_use]
    pub fn build(points: Vec<[f64; D]>) -> Self {
        let mut nodes: Vec<Node<D>> = points.into_iter().map(Node::new).collect();
        let count = nodes.len();
        let root = build_recursive(&mut nodes, 0, count, 0);
        KdTree { nodes, root }
    }

    /// Builds an index from a point generator invoked exactly `count` times.
    #[must_use]
    pub fn build_with<F>(mut generator: F, count: usize) -> Self
    where
        F: FnMut() -> [f64; D],
    {
        let points = (0..count).map(|_| generator()).collect();
        Self::build(points)
    }

    /// Builds an index from rows of coordinates whose length is only known
    /// at runtime, e.g. parsed from CSV.
    ///
    /// # Errors
    /// `Error::InvalidDimension` if any row does not have exactly `D`
    /// coordinates.
    pub fn try_build(rows: &[Vec<f64>]) -> Result<Self, Error> {
        let mut points = Vec::with_capacity(rows.len());
        for row in rows {
            if row.len() != D {
                return Err(Error::InvalidDimension {
                    expected: D,
                    actual: row.len(),
                });
            }
            let mut point = [0.0; D];
            point.copy_from_slice(row);
            points.push(point);
        }
        Ok(Self::build(points))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Finds the stored point closest to `query`.
    ///
    /// Ties on squared distance go to whichever candidate the traversal
    /// reaches first. Repeated calls with the same query return the same
    /// result; the returned [`Nearest`] is the only query state, so shared
    /// references to the tree may query concurrently.
    ///
    /// # Errors
    /// `Error::EmptyIndex` if the index holds no points.
    pub fn nearest(&self, query: &[f64; D]) -> Result<Nearest<D>, Error> {
        if self.root == NIL {
            return Err(Error::EmptyIndex);
        }
        let mut search = Search {
            best: NIL,
            best_distance: f64::INFINITY,
            visited: 0,
        };
        self.nearest_recursive(self.root, query, 0, &mut search);
        Ok(Nearest {
            point: self.nodes[search.best].point,
            distance_squared: search.best_distance,
            visited: search.visited,
        })
    }

    fn nearest_recursive(&self, slot_id: usize, query: &[f64; D], axis: usize, search: &mut Search) {
        if slot_id == NIL {
            return;
        }
        let node = &self.nodes[slot_id];
        search.visited += 1;

        let distance = squared_euclidean(&node.point, query);
        if distance < search.best_distance {
            search.best = slot_id;
            search.best_distance = distance;
        }

        // Exact match: no point can be closer, unwind the whole search.
        // Ancestor frames stop too, since their far-side bound
        // `delta^2 < 0` can never hold.
        if search.best_distance == 0.0 {
            return;
        }

        let delta = node.point[axis] - query[axis];
        let axis = (axis + 1) % D;

        // Descend into the half containing the query first to tighten the
        // bound before deciding on the far half.
        let (near, far) = if delta > 0.0 {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        };
        self.nearest_recursive(near, query, axis, search);

        // The far half can only win if the splitting hyperplane is closer
        // than the best candidate found so far.
        if delta * delta < search.best_distance {
            self.nearest_recursive(far, query, axis, search);
        }
    }
}

// Partitions `[begin, end)` around the lower median on `axis`, roots the
// subtree there and recurses on both halves with the next axis. Returns the
// subtree's slot id, or NIL for an empty range.
fn build_recursive<const D: usize>(
    nodes: &mut [Node<D>],
    begin: usize,
    end: usize,
    axis: usize,
) -> usize {
    if end <= begin {
        return NIL;
    }
    let mid = begin + (end - begin) / 2;
    select_median(nodes, begin, end, mid, axis);
    trace!(begin, end, axis, mid, "partitioned subrange");

    let axis = (axis + 1) % D;
    nodes[mid].left = build_recursive(nodes, begin, mid, axis);
    nodes[mid].right = build_recursive(nodes, mid + 1, end, axis);
    mid
}
