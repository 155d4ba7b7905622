//! A module for constructing and validating adjacency matrices.

use std::{fmt, ops::Index};

use nalgebra::DMatrix;
use tracing::{debug, warn};

use crate::error::{MatrixError, MatrixResult};

/// The smallest supported number of nodes.
pub const MIN_NODES: usize = 2;
/// The largest supported number of nodes.
pub const MAX_NODES: usize = 10;

/// A square table of integer weights, entry `(i, j)` describes the relationship between node `i`
/// and node `j`. A weight of `0` means there is no edge.
///
/// The matrix is never mutated once constructed, every check only reads it. Negative weights,
/// asymmetry and non-zero diagonals are all legal, they are simply reported on by the checks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    weights: DMatrix<i64>,
}

impl AdjacencyMatrix {
    /// Validates that `n` is a supported dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::{error::MatrixError, matrix::AdjacencyMatrix};
    ///
    /// assert!(AdjacencyMatrix::validate_dimension(2).is_ok());
    /// assert_eq!(
    ///     AdjacencyMatrix::validate_dimension(11),
    ///     Err(MatrixError::Range { n: 11 })
    /// );
    /// ```
    pub fn validate_dimension(n: usize) -> MatrixResult<()> {
        let signed = i64::try_from(n).unwrap_or(i64::MAX);
        Self::dimension_from(signed).map(|_| ())
    }

    /// Converts a signed dimension, as typed by a user, into a node count. Negative values are out
    /// of range like any other.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::{error::MatrixError, matrix::AdjacencyMatrix};
    ///
    /// assert_eq!(AdjacencyMatrix::dimension_from(4), Ok(4));
    /// assert_eq!(
    ///     AdjacencyMatrix::dimension_from(-3),
    ///     Err(MatrixError::Range { n: -3 })
    /// );
    /// ```
    pub fn dimension_from(n: i64) -> MatrixResult<usize> {
        match usize::try_from(n) {
            Ok(dimension) if (MIN_NODES..=MAX_NODES).contains(&dimension) => Ok(dimension),
            _ => {
                warn!(n, "rejected matrix dimension");
                Err(MatrixError::Range { n })
            }
        }
    }

    /// Constructs a matrix from its rows. The dimension is the number of rows, every row must have
    /// exactly that many entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::{error::MatrixError, matrix::AdjacencyMatrix};
    ///
    /// let matrix = AdjacencyMatrix::from_rows(&[vec![0, 1], vec![1, 0]]).unwrap();
    /// assert_eq!(matrix.dimension(), 2);
    ///
    /// assert_eq!(
    ///     AdjacencyMatrix::from_rows(&[vec![0, 1], vec![1]]),
    ///     Err(MatrixError::Shape { row: 1, expected: 2, found: 1 })
    /// );
    /// ```
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> MatrixResult<Self> {
        let n = rows.len();
        Self::validate_dimension(n)?;

        for (row, entries) in rows.iter().enumerate() {
            let found = entries.as_ref().len();
            if found != n {
                warn!(row, expected = n, found, "rejected matrix row");
                return Err(MatrixError::Shape {
                    row,
                    expected: n,
                    found,
                });
            }
        }

        let weights = DMatrix::from_fn(n, n, |i, j| rows[i].as_ref()[j]);
        debug!(n, "constructed adjacency matrix");

        Ok(Self { weights })
    }

    /// Returns the number of nodes.
    pub fn dimension(&self) -> usize {
        self.weights.nrows()
    }

    /// Returns the matrix as rows of weights.
    pub fn rows(&self) -> Vec<Vec<i64>> {
        self.weights
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Returns the underlying `nalgebra` matrix.
    pub fn as_dmatrix(&self) -> &DMatrix<i64> {
        &self.weights
    }

    /// Node indices, `0..n`.
    pub(crate) fn nodes(&self) -> std::ops::Range<usize> {
        0..self.dimension()
    }
}

//
// Trait implementations
//

impl Index<(usize, usize)> for AdjacencyMatrix {
    type Output = i64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.weights[index]
    }
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // nalgebra pretty prints with box-drawing brackets.
        write!(f, "{}", self.weights)
    }
}
