//! Exhaustive enumeration.
//!
//! Tries every ordering of the non-start nodes, `(N-1)!` tours in total.
//! Only practical for small instances; it serves as ground truth when
//! checking the branch-and-bound solver.

mod runner;

pub use runner::ExhaustiveSolver;
