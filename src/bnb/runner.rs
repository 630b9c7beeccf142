//! Depth-first branch-and-bound search.

use super::bound::TwoNearestBound;
use super::config::BnbConfig;
use crate::error::{Result, TspError};
use crate::matrix::DistanceMatrix;
use crate::solver::{Tour, TspSolver};
use log::{debug, trace};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// How often (in expanded nodes) the wall clock is read.
const CLOCK_CHECK_INTERVAL: u64 = 256;

/// Why the search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchStatus {
    /// The tree was fully explored or pruned; the tour is optimal.
    Optimal,
    /// `max_nodes` was reached.
    NodeLimit,
    /// `time_limit_ms` was reached.
    TimeLimit,
    /// The cancellation flag was raised.
    Cancelled,
}

impl SearchStatus {
    pub fn is_optimal(self) -> bool {
        self == SearchStatus::Optimal
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Children that passed the bound test.
    pub nodes_explored: u64,
    /// Children discarded by the bound test.
    pub prunings: u64,
    /// Complete tours installed as incumbent (ties included).
    pub solutions_found: u64,
    /// Longest partial path expanded.
    pub max_depth: usize,
}

impl SearchStats {
    #[inline]
    fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    fn on_pruning(&mut self) {
        self.prunings = self.prunings.saturating_add(1);
    }

    #[inline]
    fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    fn on_depth(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth);
    }
}

/// Outcome of [`BnbSolver::solve_detailed`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbResult {
    /// Best tour found. `None` only if a limit or cancellation stopped the
    /// search before the first complete tour.
    pub tour: Option<Tour>,

    /// Why the search stopped.
    pub status: SearchStatus,

    /// Global lower bound computed at the root.
    pub root_lower_bound: f64,

    /// Search counters.
    pub stats: SearchStats,

    /// Solve time in milliseconds.
    pub solve_time_ms: u64,
}

impl BnbResult {
    /// Relative gap between the tour weight and the root bound,
    /// `(weight - bound) / weight`. `None` without a tour; 0 for a
    /// zero-weight tour.
    pub fn root_gap(&self) -> Option<f64> {
        let weight = self.tour.as_ref()?.weight;
        if weight <= 0.0 {
            return Some(0.0);
        }
        Some(((weight - self.root_lower_bound) / weight).max(0.0))
    }
}

/// Exact TSP solver using depth-first branch-and-bound.
///
/// Candidates are tried in ascending node order. A child is pruned when its
/// bound plus its path weight reaches the incumbent weight; a complete path
/// replaces the incumbent when its closed weight is not larger (ties
/// overwrite, so among equally good tours the last one explored is
/// reported).
///
/// The solver holds only the matrix and configuration; each call keeps its
/// incumbent locally, so one solver can serve concurrent calls.
///
/// # Examples
///
/// ```
/// use u_tsp::bnb::BnbSolver;
/// use u_tsp::matrix::DistanceMatrix;
///
/// let m = DistanceMatrix::from_rows(&[
///     [0u32, 10, 15, 20],
///     [10, 0, 35, 25],
///     [15, 35, 0, 30],
///     [20, 25, 30, 0],
/// ])
/// .unwrap();
///
/// let solver = BnbSolver::new(m).unwrap();
/// let result = solver.solve_detailed(0).unwrap();
/// let tour = result.tour.unwrap();
/// assert_eq!(tour.weight, 80.0);
/// assert_eq!(tour.path, vec![0, 1, 3, 2]);
/// assert!(result.status.is_optimal());
/// ```
#[derive(Debug, Clone)]
pub struct BnbSolver {
    matrix: DistanceMatrix,
    config: BnbConfig,
}

impl BnbSolver {
    /// Creates a solver with the default (exhaustive) configuration.
    ///
    /// Fails with [`TspError::InvalidArgument`] if the matrix has no nodes.
    pub fn new(matrix: DistanceMatrix) -> Result<Self> {
        Self::with_config(matrix, BnbConfig::default())
    }

    pub fn with_config(matrix: DistanceMatrix, config: BnbConfig) -> Result<Self> {
        if matrix.is_empty() {
            return Err(TspError::invalid_argument(
                "branch-and-bound needs at least one node",
            ));
        }
        Ok(Self { matrix, config })
    }

    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn config(&self) -> &BnbConfig {
        &self.config
    }

    /// Runs the search from `start` and reports the tour with statistics.
    pub fn solve_detailed(&self, start: usize) -> Result<BnbResult> {
        self.solve_with_cancel(start, None)
    }

    /// Runs the search with an optional cancellation token.
    ///
    /// The flag is polled once per expanded node. When it is raised the
    /// search unwinds and returns the incumbent found so far with status
    /// [`SearchStatus::Cancelled`].
    pub fn solve_with_cancel(
        &self,
        start: usize,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<BnbResult> {
        let n = self.matrix.len();
        TspError::check_index(start, n)?;

        let started = Instant::now();
        let bound = TwoNearestBound::new(&self.matrix, self.config.neighbor_lookup);
        let root_lower_bound = bound.global_lower_bound();

        debug!(
            "bnb start: n={n} start={start} root_bound={root_lower_bound} symmetric={} lookup={:?}",
            bound.is_symmetric(),
            self.config.neighbor_lookup
        );

        if n == 1 {
            return Ok(BnbResult {
                tour: Some(Tour {
                    path: vec![start],
                    weight: 0.0,
                }),
                status: SearchStatus::Optimal,
                root_lower_bound,
                stats: SearchStats {
                    max_depth: 1,
                    ..SearchStats::default()
                },
                solve_time_ms: 0,
            });
        }

        let mut search = Search {
            matrix: &self.matrix,
            bound,
            config: &self.config,
            cancel,
            started,
            visited: vec![false; n],
            best: Tour::unbounded(),
            stats: SearchStats::default(),
            stop: None,
        };

        let mut path = Vec::with_capacity(n);
        path.push(start);
        search.visited[start] = true;
        search.expand(&mut path, root_lower_bound, 0.0);

        let status = search.stop.unwrap_or(SearchStatus::Optimal);
        let tour = search.best.is_complete().then_some(search.best);
        let solve_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            "bnb done: status={status:?} weight={:?} nodes={} prunings={} solutions={} time_ms={solve_time_ms}",
            tour.as_ref().map(|t| t.weight),
            search.stats.nodes_explored,
            search.stats.prunings,
            search.stats.solutions_found,
        );

        Ok(BnbResult {
            tour,
            status,
            root_lower_bound,
            stats: search.stats,
            solve_time_ms,
        })
    }
}

impl TspSolver for BnbSolver {
    fn name(&self) -> &'static str {
        "branch-and-bound"
    }

    fn solve(&self, start: usize) -> Result<Tour> {
        self.solve_detailed(start)?
            .tour
            .ok_or(TspError::NoTourFound)
    }
}

/// State of one search: the incumbent accumulator and the counters.
struct Search<'a> {
    matrix: &'a DistanceMatrix,
    bound: TwoNearestBound<'a>,
    config: &'a BnbConfig,
    cancel: Option<Arc<AtomicBool>>,
    started: Instant,
    visited: Vec<bool>,
    best: Tour,
    stats: SearchStats,
    stop: Option<SearchStatus>,
}

impl Search<'_> {
    /// Extends `path` by every unvisited node whose child survives the
    /// bound test. `path` is restored before returning.
    fn expand(&mut self, path: &mut Vec<usize>, bound: f64, weight: f64) {
        if self.should_stop() {
            return;
        }

        let n = self.matrix.len();
        let level = path.len();
        let last = path[level - 1];
        self.stats.on_depth(level);

        for next in 0..n {
            if self.visited[next] {
                continue;
            }

            let child_bound = bound - self.bound.edge_reduction_bound((last, next), level);
            let child_weight = weight + self.matrix.get(last, next);
            if child_bound + child_weight >= self.best.weight {
                self.stats.on_pruning();
                continue;
            }

            if self.node_budget_spent() {
                self.stop = Some(SearchStatus::NodeLimit);
                return;
            }

            self.stats.on_node_explored();
            path.push(next);
            if path.len() == n {
                if !self.accept(path, child_weight) {
                    trace!("bnb leaf rejected: path={path:?}");
                }
            } else {
                self.visited[next] = true;
                self.expand(path, child_bound, child_weight);
                self.visited[next] = false;
            }
            path.pop();

            if self.stop.is_some() {
                return;
            }
        }
    }

    /// Installs the complete `path` as incumbent unless its closed weight
    /// is larger than the current one.
    fn accept(&mut self, path: &[usize], weight: f64) -> bool {
        let (first, last) = match (path.first(), path.last()) {
            (Some(&first), Some(&last)) => (first, last),
            _ => return false,
        };
        let total = weight + self.matrix.get(last, first);
        if total > self.best.weight {
            return false;
        }

        trace!("bnb incumbent: weight={total} path={path:?}");
        self.best.path.clear();
        self.best.path.extend_from_slice(path);
        self.best.weight = total;
        self.stats.on_solution_found();
        true
    }

    fn should_stop(&mut self) -> bool {
        if self.stop.is_some() {
            return true;
        }

        if let Some(ref flag) = self.cancel {
            if flag.load(Ordering::Relaxed) {
                self.stop = Some(SearchStatus::Cancelled);
                return true;
            }
        }

        if self.node_budget_spent() {
            self.stop = Some(SearchStatus::NodeLimit);
            return true;
        }

        if self.config.time_limit_ms > 0
            && self.stats.nodes_explored.is_multiple_of(CLOCK_CHECK_INTERVAL)
            && self.started.elapsed() >= Duration::from_millis(self.config.time_limit_ms)
        {
            self.stop = Some(SearchStatus::TimeLimit);
            return true;
        }

        false
    }

    /// Whether `max_nodes` children have been explored already. Checked
    /// before each child, so `nodes_explored` never exceeds the limit.
    #[inline]
    fn node_budget_spent(&self) -> bool {
        self.config.max_nodes > 0 && self.stats.nodes_explored >= self.config.max_nodes
    }
}
