//! The distance matrix container.

use crate::error::{Result, TspError};

/// Square table of edge weights, stored row-major.
///
/// Invariants (checked at construction):
/// - the table is `n x n`;
/// - every entry is finite and `>= 0`;
/// - `d(i, i) == 0` for every node.
///
/// # Examples
///
/// ```
/// use u_tsp::matrix::DistanceMatrix;
///
/// let m = DistanceMatrix::new(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 6.0],
///     vec![9.0, 6.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(m.len(), 3);
/// assert_eq!(m.get(1, 2), 6.0);
/// assert_eq!(m.tour_weight(&[0, 1, 2]), 17.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct DistanceMatrix {
    n: usize,
    data: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from its rows.
    ///
    /// Fails with [`TspError::InvalidArgument`] if the rows do not form a
    /// square table or an entry violates the weight invariants.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != n) {
            return Err(TspError::invalid_argument(format!(
                "matrix is not square: row {i} has {} entries, expected {n}",
                row.len()
            )));
        }
        Self::from_flat(n, rows.into_iter().flatten().collect())
    }

    /// Builds a matrix from rows of any numeric type convertible to `f64`.
    ///
    /// ```
    /// use u_tsp::matrix::DistanceMatrix;
    ///
    /// let m = DistanceMatrix::from_rows(&[[0u32, 4], [4, 0]]).unwrap();
    /// assert_eq!(m.get(0, 1), 4.0);
    /// ```
    pub fn from_rows<R, T>(rows: &[R]) -> Result<Self>
    where
        R: AsRef<[T]>,
        T: Copy + Into<f64>,
    {
        Self::new(
            rows.iter()
                .map(|row| row.as_ref().iter().map(|&w| w.into()).collect())
                .collect(),
        )
    }

    /// Builds an `n x n` matrix from row-major data.
    pub fn from_flat(n: usize, data: Vec<f64>) -> Result<Self> {
        if n.checked_mul(n) != Some(data.len()) {
            return Err(TspError::invalid_argument(format!(
                "matrix is not square: {} entries cannot form a {n}x{n} table",
                data.len()
            )));
        }

        for (k, &w) in data.iter().enumerate() {
            let (i, j) = (k / n, k % n);
            if !w.is_finite() || w < 0.0 {
                return Err(TspError::invalid_argument(format!(
                    "weight d({i}, {j}) = {w} must be finite and non-negative"
                )));
            }
            if i == j && w != 0.0 {
                return Err(TspError::invalid_argument(format!(
                    "diagonal weight d({i}, {i}) = {w} must be zero"
                )));
            }
        }

        Ok(Self { n, data })
    }

    /// Wraps data that is valid by construction.
    pub(super) fn from_validated(n: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(data.len(), n * n);
        Self { n, data }
    }

    /// Number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Weight of the edge `i -> j`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is not a node index.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(j < self.n, "column {j} out of range for {} nodes", self.n);
        self.data[i * self.n + j]
    }

    /// All weights leaving `node`, including the zero self weight.
    ///
    /// # Panics
    /// Panics if `node` is not a node index.
    #[inline]
    pub fn row(&self, node: usize) -> &[f64] {
        &self.data[node * self.n..(node + 1) * self.n]
    }

    /// Iterates over the weights entering `node`.
    pub fn column(&self, node: usize) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().skip(node).step_by(self.n.max(1)).copied()
    }

    /// Whether `d(i, j) == d(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Weight of the closed cycle visiting `path` in order and returning to
    /// `path[0]`. An empty or single-node path weighs 0.
    pub fn tour_weight(&self, path: &[usize]) -> f64 {
        match path {
            [] | [_] => 0.0,
            [first, .., last] => {
                let open: f64 = path.windows(2).map(|w| self.get(w[0], w[1])).sum();
                open + self.get(*last, *first)
            }
        }
    }

    /// Copies the matrix back into nested rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.n).map(|i| self.row(i).to_vec()).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for DistanceMatrix {
    type Error = TspError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<DistanceMatrix> for Vec<Vec<f64>> {
    fn from(matrix: DistanceMatrix) -> Self {
        matrix.to_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_nodes() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            [0u32, 10, 15, 20],
            [10, 0, 35, 25],
            [15, 35, 0, 30],
            [20, 25, 30, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_accessors() {
        let m = four_nodes();
        assert_eq!(m.len(), 4);
        assert!(!m.is_empty());
        assert_eq!(m.get(1, 3), 25.0);
        assert_eq!(m.row(2), &[15.0, 35.0, 0.0, 30.0]);
        assert_eq!(m.column(3).collect::<Vec<_>>(), vec![20.0, 25.0, 30.0, 0.0]);
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_non_square_rejected() {
        let rows = vec![vec![0.0; 4]; 3];
        let err = DistanceMatrix::new(rows).unwrap_err();
        assert!(matches!(err, TspError::InvalidArgument(_)));

        let ragged = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(matches!(
            DistanceMatrix::new(ragged),
            Err(TspError::InvalidArgument(_))
        ));

        assert!(DistanceMatrix::from_flat(3, vec![0.0; 8]).is_err());
    }

    #[test]
    fn test_invalid_weights_rejected() {
        assert!(DistanceMatrix::new(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).is_err());
        assert!(DistanceMatrix::new(vec![vec![0.0, f64::INFINITY], vec![1.0, 0.0]]).is_err());
        assert!(DistanceMatrix::new(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]).is_err());
        assert!(DistanceMatrix::new(vec![vec![5.0, 1.0], vec![1.0, 0.0]]).is_err());
    }

    #[test]
    fn test_empty_matrix_is_a_valid_container() {
        let m = DistanceMatrix::new(Vec::new()).unwrap();
        assert!(m.is_empty());
        assert!(m.is_symmetric());
        assert_eq!(m.tour_weight(&[]), 0.0);
    }

    #[test]
    fn test_asymmetric_detected() {
        let m = DistanceMatrix::new(vec![vec![0.0, 1.0], vec![2.0, 0.0]]).unwrap();
        assert!(!m.is_symmetric());
        assert_eq!(m.tour_weight(&[0, 1]), 3.0);
    }

    #[test]
    fn test_tour_weight() {
        let m = four_nodes();
        assert_eq!(m.tour_weight(&[0, 1, 3, 2]), 80.0);
        assert_eq!(m.tour_weight(&[0, 1, 2, 3]), 95.0);
        assert_eq!(m.tour_weight(&[2]), 0.0);
    }

    #[test]
    fn test_rows_conversion() {
        let m = four_nodes();
        let rows: Vec<Vec<f64>> = m.clone().into();
        assert_eq!(DistanceMatrix::try_from(rows).unwrap(), m);
    }
}
