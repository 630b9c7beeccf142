//! Error type shared by the matrix container and the solvers.

use thiserror::Error;

/// Errors returned by matrix construction and by the solvers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// The input cannot describe a TSP instance (non-square matrix,
    /// negative or non-finite weight, non-zero diagonal, no nodes).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A node index lies outside `[0, len)`.
    #[error("node index {index} out of range for {len} nodes")]
    OutOfRange { index: usize, len: usize },

    /// A node limit, time limit or cancellation stopped the search before
    /// any complete tour was recorded.
    #[error("search stopped before a complete tour was found")]
    NoTourFound,
}

impl TspError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Checks that `index` addresses one of `len` nodes.
    pub fn check_index(index: usize, len: usize) -> Result<()> {
        if index < len {
            Ok(())
        } else {
            Err(Self::OutOfRange { index, len })
        }
    }
}

pub type Result<T> = std::result::Result<T, TspError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_index() {
        assert!(TspError::check_index(0, 1).is_ok());
        assert_eq!(
            TspError::check_index(5, 4),
            Err(TspError::OutOfRange { index: 5, len: 4 })
        );
    }

    #[test]
    fn test_display() {
        let err = TspError::invalid_argument("matrix is not square");
        assert_eq!(err.to_string(), "invalid argument: matrix is not square");

        let err = TspError::OutOfRange { index: 7, len: 3 };
        assert_eq!(err.to_string(), "node index 7 out of range for 3 nodes");
    }
}
