//! Instance generators: seeded random matrices and Euclidean instances.

use super::distance::DistanceMatrix;
use crate::error::Result;
use rand::Rng;
use u_numflow::random::create_rng;

impl DistanceMatrix {
    /// Random symmetric instance with integer weights in `[1, max_weight]`.
    ///
    /// The same `(n, max_weight, seed)` always yields the same matrix.
    /// A `max_weight` of 0 is treated as 1.
    pub fn random_symmetric(n: usize, max_weight: u32, seed: u64) -> Self {
        let mut rng = create_rng(seed);
        let hi = max_weight.max(1);
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let w = f64::from(rng.random_range(1..=hi));
                data[i * n + j] = w;
                data[j * n + i] = w;
            }
        }
        Self::from_validated(n, data)
    }

    /// Random asymmetric instance with integer weights in `[1, max_weight]`.
    ///
    /// `d(i, j)` and `d(j, i)` are drawn independently.
    pub fn random_asymmetric(n: usize, max_weight: u32, seed: u64) -> Self {
        let mut rng = create_rng(seed);
        let hi = max_weight.max(1);
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i != j {
                    data[i * n + j] = f64::from(rng.random_range(1..=hi));
                }
            }
        }
        Self::from_validated(n, data)
    }

    /// Euclidean instance: `d(i, j)` is the straight-line distance between
    /// `points[i]` and `points[j]`.
    ///
    /// Fails with [`crate::TspError::InvalidArgument`] if a coordinate is
    /// not finite.
    ///
    /// ```
    /// use u_tsp::matrix::DistanceMatrix;
    ///
    /// let m = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0)]).unwrap();
    /// assert_eq!(m.get(0, 1), 5.0);
    /// ```
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        let n = points.len();
        let data = points
            .iter()
            .flat_map(|&(xa, ya)| points.iter().map(move |&(xb, yb)| (xa - xb).hypot(ya - yb)))
            .collect();
        Self::from_flat(n, data)
    }
}
