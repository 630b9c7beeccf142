//! Solver contract shared by every TSP algorithm in this crate.
//!
//! - [`Tour`]: a closed tour (node order plus total weight).
//! - [`TspSolver`]: the `solve(start) -> Tour` capability.
//!
//! Implementations are distinct types chosen by the caller
//! ([`crate::bnb::BnbSolver`], [`crate::exhaustive::ExhaustiveSolver`]);
//! generic code takes `S: TspSolver`.

mod types;

pub use types::{Tour, TspSolver};
