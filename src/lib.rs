//! Exact Traveling Salesman Problem solving over dense distance matrices.
//!
//! - **Distance matrix** ([`matrix`]): validated `N x N` table of
//!   non-negative weights with a zero diagonal, plus seeded random and
//!   Euclidean instance builders.
//! - **Solver contract** ([`solver`]): the [`solver::TspSolver`] trait and
//!   the [`solver::Tour`] it returns.
//! - **Branch-and-Bound** ([`bnb`]): depth-first search pruned by a
//!   two-nearest-edge lower bound. Proves optimality when run to exhaustion.
//! - **Exhaustive search** ([`exhaustive`]): enumerates all `(N-1)!` tours;
//!   ground truth for small instances.
//!
//! # Example
//!
//! ```
//! use u_tsp::bnb::BnbSolver;
//! use u_tsp::matrix::DistanceMatrix;
//! use u_tsp::solver::TspSolver;
//!
//! let m = DistanceMatrix::random_symmetric(10, 100, 42);
//! let tour = BnbSolver::new(m.clone())?.solve(0)?;
//! assert_eq!(tour.path.len(), 10);
//! assert_eq!(tour.weight, m.tour_weight(&tour.path));
//! # Ok::<(), u_tsp::TspError>(())
//! ```
//!
//! Diagnostics go through the `log` facade; no logger is installed here.

pub mod bnb;
pub mod error;
pub mod exhaustive;
pub mod matrix;
pub mod solver;

pub use error::{Result, TspError};
