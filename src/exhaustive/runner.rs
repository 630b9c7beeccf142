//! Enumeration loop.

use crate::error::{Result, TspError};
use crate::matrix::DistanceMatrix;
use crate::solver::{Tour, TspSolver};
use log::debug;

/// Exact solver that enumerates every tour.
///
/// Orderings are visited in lexicographic order of the non-start nodes and
/// a tour replaces the incumbent only when strictly cheaper, so among ties
/// the lexicographically first tour is reported.
#[derive(Debug, Clone)]
pub struct ExhaustiveSolver {
    matrix: DistanceMatrix,
}

impl ExhaustiveSolver {
    /// Fails with [`TspError::InvalidArgument`] if the matrix has no nodes.
    pub fn new(matrix: DistanceMatrix) -> Result<Self> {
        if matrix.is_empty() {
            return Err(TspError::invalid_argument(
                "exhaustive search needs at least one node",
            ));
        }
        Ok(Self { matrix })
    }

    /// Number of complete tours enumerated from any start node, `(N-1)!`,
    /// or `None` if it overflows `u64`.
    pub fn tour_count(&self) -> Option<u64> {
        (1..self.matrix.len() as u64).try_fold(1u64, |acc, k| acc.checked_mul(k))
    }

    fn enumerate(&self, path: &mut Vec<usize>, visited: &mut [bool], weight: f64, best: &mut Tour) {
        let n = self.matrix.len();
        let last = path[path.len() - 1];

        if path.len() == n {
            let total = weight + self.matrix.get(last, path[0]);
            if total < best.weight {
                best.path.clear();
                best.path.extend_from_slice(path);
                best.weight = total;
            }
            return;
        }

        for next in 0..n {
            if visited[next] {
                continue;
            }
            visited[next] = true;
            path.push(next);
            self.enumerate(path, visited, weight + self.matrix.get(last, next), best);
            path.pop();
            visited[next] = false;
        }
    }
}

impl TspSolver for ExhaustiveSolver {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn solve(&self, start: usize) -> Result<Tour> {
        let n = self.matrix.len();
        TspError::check_index(start, n)?;

        debug!(
            "exhaustive start: n={n} start={start} tours={:?}",
            self.tour_count()
        );

        let mut best = Tour::unbounded();
        let mut visited = vec![false; n];
        visited[start] = true;
        let mut path = Vec::with_capacity(n);
        path.push(start);
        self.enumerate(&mut path, &mut visited, 0.0, &mut best);

        Ok(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_node_example() {
        let m = DistanceMatrix::from_rows(&[
            [0u32, 10, 15, 20],
            [10, 0, 35, 25],
            [15, 35, 0, 30],
            [20, 25, 30, 0],
        ])
        .unwrap();
        let tour = ExhaustiveSolver::new(m).unwrap().solve(0).unwrap();
        assert_eq!(tour.weight, 80.0);
        // 0-1-3-2 and its reverse 0-2-3-1 tie; the first is kept.
        assert_eq!(tour.path, vec![0, 1, 3, 2]);
    }

    #[test]
    fn test_single_node() {
        let m = DistanceMatrix::from_rows(&[[0u32]]).unwrap();
        let tour = ExhaustiveSolver::new(m).unwrap().solve(0).unwrap();
        assert_eq!(tour.path, vec![0]);
        assert_eq!(tour.weight, 0.0);
    }

    #[test]
    fn test_asymmetric() {
        let m = DistanceMatrix::from_rows(&[[0u32, 1, 9], [4, 0, 2], [3, 8, 0]]).unwrap();
        let tour = ExhaustiveSolver::new(m).unwrap().solve(2).unwrap();
        assert_eq!(tour.path, vec![2, 0, 1]);
        assert_eq!(tour.weight, 6.0);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            ExhaustiveSolver::new(DistanceMatrix::new(Vec::new()).unwrap()),
            Err(TspError::InvalidArgument(_))
        ));

        let solver = ExhaustiveSolver::new(DistanceMatrix::random_symmetric(3, 10, 1)).unwrap();
        assert_eq!(
            solver.solve(3),
            Err(TspError::OutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_tour_count() {
        let solver = ExhaustiveSolver::new(DistanceMatrix::random_symmetric(6, 10, 1)).unwrap();
        assert_eq!(solver.tour_count(), Some(120));
        let single = ExhaustiveSolver::new(DistanceMatrix::random_symmetric(1, 10, 1)).unwrap();
        assert_eq!(single.tour_count(), Some(1));
        assert_eq!(solver.name(), "exhaustive");
    }
}
