//! Dense distance matrices.
//!
//! [`DistanceMatrix`] is the read-only input of every solver in this crate:
//! a square table of non-negative, finite edge weights with a zero diagonal.
//! Construction validates these invariants once, so the solvers can index
//! rows without further checks.
//!
//! Besides explicit construction, the module provides seeded random
//! instances (symmetric and asymmetric) and Euclidean instances built from
//! planar points.

mod distance;
mod generate;

pub use distance::DistanceMatrix;
