//! Branch-and-Bound (B&B) for the Traveling Salesman Problem.
//!
//! Depth-first search over partial tours starting at a fixed node. Each
//! partial path carries an admissible lower bound derived from the two
//! cheapest edges at every node; a child whose bound plus path weight
//! cannot beat the incumbent tour is pruned. With the default
//! configuration the search runs to exhaustion and the reported tour is
//! optimal.
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//!   Salesman Problem"
//! - Held & Karp (1970), "The Traveling-Salesman Problem and Minimum
//!   Spanning Trees"

mod bound;
mod config;
mod runner;

pub use bound::{nearest_incoming_weight, nearest_weight, NeighborTable, TwoNearestBound};
pub use config::{BnbConfig, NeighborLookup};
pub use runner::{BnbResult, BnbSolver, SearchStats, SearchStatus};
