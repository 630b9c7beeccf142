//! Two-nearest-edge lower bound.
//!
//! Every tour uses exactly two edges at each node, so half the sum over all
//! nodes of their two cheapest incident edges bounds any tour from below.
//! The search starts from that global bound and subtracts an edge-reduction
//! term for every edge it fixes, which keeps the bound of a partial path
//! equal to
//!
//! ```text
//! (nearest(p0) + nearest(pk) + sum over unvisited v of (nearest(v) + second(v))) / 2
//! ```
//!
//! for a path `p0 .. pk`. The remaining cost of closing the tour is never
//! below this value, so pruning on `bound + weight >= incumbent` is safe.
//!
//! On asymmetric matrices a node's two remaining edges are one outgoing and
//! one incoming edge, so the bound charges the cheapest weight of its row
//! and of its column instead.

use super::config::NeighborLookup;
use crate::matrix::DistanceMatrix;

/// Weight at sort-rank `rank` of `node`'s row.
///
/// The row includes the zero self weight, so rank 1 is the nearest
/// neighbor's distance and rank 2 the second-nearest. Ranks past the end
/// clamp to the last entry (on two nodes the second-nearest is the only
/// neighbor).
///
/// The row is copied and sorted on every call.
pub fn nearest_weight(matrix: &DistanceMatrix, node: usize, rank: usize) -> f64 {
    let mut row = matrix.row(node).to_vec();
    row.sort_unstable_by(f64::total_cmp);
    ranked(&row, rank)
}

/// Weight at sort-rank `rank` of the edges entering `node` (its column).
pub fn nearest_incoming_weight(matrix: &DistanceMatrix, node: usize, rank: usize) -> f64 {
    let mut column: Vec<f64> = matrix.column(node).collect();
    column.sort_unstable_by(f64::total_cmp);
    ranked(&column, rank)
}

fn ranked(sorted: &[f64], rank: usize) -> f64 {
    sorted
        .get(rank.min(sorted.len().saturating_sub(1)))
        .copied()
        .unwrap_or(0.0)
}

/// Per-node neighbor weights, sorted once.
#[derive(Debug, Clone, PartialEq)]
pub struct NeighborTable {
    nearest: Vec<f64>,
    second: Vec<f64>,
    nearest_in: Vec<f64>,
}

impl NeighborTable {
    pub fn build(matrix: &DistanceMatrix) -> Self {
        let n = matrix.len();
        let mut nearest = Vec::with_capacity(n);
        let mut second = Vec::with_capacity(n);
        let mut nearest_in = Vec::with_capacity(n);
        let mut buf = Vec::with_capacity(n);

        for node in 0..n {
            buf.clear();
            buf.extend_from_slice(matrix.row(node));
            buf.sort_unstable_by(f64::total_cmp);
            nearest.push(ranked(&buf, 1));
            second.push(ranked(&buf, 2));

            buf.clear();
            buf.extend(matrix.column(node));
            buf.sort_unstable_by(f64::total_cmp);
            nearest_in.push(ranked(&buf, 1));
        }

        Self {
            nearest,
            second,
            nearest_in,
        }
    }

    /// Cheapest edge leaving `node`.
    #[inline]
    pub fn nearest(&self, node: usize) -> f64 {
        self.nearest[node]
    }

    /// Second-cheapest edge leaving `node`.
    #[inline]
    pub fn second_nearest(&self, node: usize) -> f64 {
        self.second[node]
    }

    /// Cheapest edge entering `node`.
    #[inline]
    pub fn nearest_incoming(&self, node: usize) -> f64 {
        self.nearest_in[node]
    }
}

/// The bound evaluator used by the search.
///
/// Wraps a matrix and, depending on [`NeighborLookup`], either a
/// [`NeighborTable`] or direct row sorting.
#[derive(Debug, Clone)]
pub struct TwoNearestBound<'a> {
    matrix: &'a DistanceMatrix,
    table: Option<NeighborTable>,
    symmetric: bool,
}

impl<'a> TwoNearestBound<'a> {
    pub fn new(matrix: &'a DistanceMatrix, lookup: NeighborLookup) -> Self {
        let table = match lookup {
            NeighborLookup::Precomputed => Some(NeighborTable::build(matrix)),
            NeighborLookup::RowSort => None,
        };
        Self {
            matrix,
            table,
            symmetric: matrix.is_symmetric(),
        }
    }

    /// Whether the symmetric (two cheapest edges per node) form is in use.
    pub fn is_symmetric(&self) -> bool {
        self.symmetric
    }

    fn nearest(&self, node: usize) -> f64 {
        match &self.table {
            Some(table) => table.nearest(node),
            None => nearest_weight(self.matrix, node, 1),
        }
    }

    fn second_nearest(&self, node: usize) -> f64 {
        match &self.table {
            Some(table) => table.second_nearest(node),
            None => nearest_weight(self.matrix, node, 2),
        }
    }

    fn nearest_incoming(&self, node: usize) -> f64 {
        match &self.table {
            Some(table) => table.nearest_incoming(node),
            None => nearest_incoming_weight(self.matrix, node, 1),
        }
    }

    /// Bound on the weight of every tour of the matrix: half the sum of
    /// each node's two cheapest incident edges.
    pub fn global_lower_bound(&self) -> f64 {
        let n = self.matrix.len();
        let total: f64 = if self.symmetric {
            (0..n)
                .map(|v| self.nearest(v) + self.second_nearest(v))
                .sum()
        } else {
            (0..n)
                .map(|v| self.nearest(v) + self.nearest_incoming(v))
                .sum()
        };
        total / 2.0
    }

    /// Amount by which fixing `edge = (u, v)` lowers the bound of a partial
    /// path of length `level` ending in `u`.
    ///
    /// At `level == 1` the edge leaves the start node, whose two incident
    /// edges are both still open; fixing its first edge releases its
    /// second-nearest allowance. Deeper in the tree `u` already has its
    /// incoming edge fixed, so the outgoing edge releases the nearest
    /// allowance. The new end node `v` always releases its second-nearest
    /// allowance and keeps the nearest for its still-open edge.
    ///
    /// Both open ends of the path keep their nearest allowance. Releasing
    /// the nearest at `v` (or at the start on depth 1) instead would leave
    /// second-nearest weights in the bound and let it exceed the optimum.
    pub fn edge_reduction_bound(&self, edge: (usize, usize), level: usize) -> f64 {
        let (u, v) = edge;
        if !self.symmetric {
            return (self.nearest(u) + self.nearest_incoming(v)) / 2.0;
        }
        let tail = if level == 1 {
            self.second_nearest(u)
        } else {
            self.nearest(u)
        };
        (tail + self.second_nearest(v)) / 2.0
    }
}
