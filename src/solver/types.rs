//! Tour representation and the solver trait.

use crate::error::Result;
use crate::matrix::DistanceMatrix;

/// A Hamiltonian cycle.
///
/// `path` lists every node exactly once, starting at the requested start
/// node; the cycle implicitly returns from the last node to `path[0]`.
/// `weight` includes that closing edge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Visiting order.
    pub path: Vec<usize>,
    /// Total weight of the closed cycle.
    pub weight: f64,
}

impl Tour {
    /// The placeholder incumbent: no path, infinite weight. Any complete
    /// tour beats it.
    pub fn unbounded() -> Self {
        Self {
            path: Vec::new(),
            weight: f64::INFINITY,
        }
    }

    /// Whether the tour holds a path.
    pub fn is_complete(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of nodes on the tour.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Checks the tour against a matrix: every node visited once, starting
    /// at `start`, with `weight` equal to the recomputed cycle weight
    /// (up to `1e-9` relative tolerance).
    pub fn is_valid_for(&self, matrix: &DistanceMatrix, start: usize) -> bool {
        let n = matrix.len();
        if self.path.len() != n || self.path.first() != Some(&start) {
            return false;
        }
        let mut seen = vec![false; n];
        for &node in &self.path {
            if node >= n || seen[node] {
                return false;
            }
            seen[node] = true;
        }
        let expected = matrix.tour_weight(&self.path);
        (self.weight - expected).abs() <= 1e-9 * expected.abs().max(1.0)
    }
}

/// An algorithm that produces a tour from a given start node.
///
/// Implementors own (or borrow) their [`DistanceMatrix`] and are built by
/// their own constructors, which reject matrices they cannot handle.
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::BnbSolver;
/// use u_tsp::exhaustive::ExhaustiveSolver;
/// use u_tsp::matrix::DistanceMatrix;
/// use u_tsp::solver::TspSolver;
///
/// fn weight_of<S: TspSolver>(solver: &S) -> f64 {
///     solver.solve(0).unwrap().weight
/// }
///
/// let m = DistanceMatrix::random_symmetric(6, 100, 1);
/// let bnb = BnbSolver::new(m.clone()).unwrap();
/// let brute = ExhaustiveSolver::new(m).unwrap();
/// assert_eq!(weight_of(&bnb), weight_of(&brute));
/// ```
pub trait TspSolver {
    /// Short algorithm name for logs and reports.
    fn name(&self) -> &'static str;

    /// Finds a tour starting at `start`.
    ///
    /// Fails with [`crate::TspError::OutOfRange`] if `start` is not a node.
    fn solve(&self, start: usize) -> Result<Tour>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]).unwrap()
    }

    #[test]
    fn test_unbounded() {
        let tour = Tour::unbounded();
        assert!(!tour.is_complete());
        assert!(tour.is_empty());
        assert!(tour.weight.is_infinite());
    }

    #[test]
    fn test_is_valid_for() {
        let m = square();
        let tour = Tour {
            path: vec![2, 3, 0, 1],
            weight: 4.0,
        };
        assert!(tour.is_valid_for(&m, 2));
        assert!(!tour.is_valid_for(&m, 0));
    }

    #[test]
    fn test_is_valid_for_rejects_bad_tours() {
        let m = square();
        let duplicate = Tour {
            path: vec![0, 1, 1, 3],
            weight: m.tour_weight(&[0, 1, 1, 3]),
        };
        assert!(!duplicate.is_valid_for(&m, 0));

        let short = Tour {
            path: vec![0, 1, 2],
            weight: m.tour_weight(&[0, 1, 2]),
        };
        assert!(!short.is_valid_for(&m, 0));

        let wrong_weight = Tour {
            path: vec![0, 1, 2, 3],
            weight: 3.0,
        };
        assert!(!wrong_weight.is_valid_for(&m, 0));
    }
}
