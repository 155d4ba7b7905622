//! Graph classification.

use std::fmt;

use crate::matrix::AdjacencyMatrix;

/// The label assigned to a graph, checked in declaration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GraphClass {
    Complete,
    Connected,
    Disconnected,
}

impl AdjacencyMatrix {
    /// Classifies the graph: complete wins over connected, anything else is disconnected.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::{classify::GraphClass, matrix::AdjacencyMatrix};
    ///
    /// let matrix = AdjacencyMatrix::from_rows(&[[0, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
    /// assert_eq!(matrix.classify(), GraphClass::Connected);
    /// ```
    pub fn classify(&self) -> GraphClass {
        if self.is_complete() {
            GraphClass::Complete
        } else if self.is_connected() {
            GraphClass::Connected
        } else {
            GraphClass::Disconnected
        }
    }
}

impl fmt::Display for GraphClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Complete => "complete graph",
            Self::Connected => "connected graph",
            Self::Disconnected => "disconnected graph",
        };

        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete() {
        let matrix = AdjacencyMatrix::from_rows(&[[0, 1, 1], [1, 0, 1], [1, 1, 0]]).unwrap();

        assert_eq!(matrix.classify(), GraphClass::Complete);
    }

    #[test]
    fn asymmetric_complete() {
        // Only the upper triangle is filled in.
        let matrix = AdjacencyMatrix::from_rows(&[[0, 1, 1], [0, 0, 1], [0, 0, 0]]).unwrap();
        assert_eq!(matrix.classify(), GraphClass::Complete);
    }

    #[test]
    fn disconnected() {
        let matrix = AdjacencyMatrix::from_rows(&[[0, 0], [0, 0]]).unwrap();

        assert_eq!(matrix.classify(), GraphClass::Disconnected);
    }

    #[test]
    fn weighted_edges_dont_connect() {
        let matrix = AdjacencyMatrix::from_rows(&[[0, 3], [3, 0]]).unwrap();

        assert_eq!(matrix.classify(), GraphClass::Disconnected);
    }

    #[test]
    fn display() {
        assert_eq!(GraphClass::Complete.to_string(), "complete graph");
        assert_eq!(GraphClass::Connected.to_string(), "connected graph");
        assert_eq!(GraphClass::Disconnected.to_string(), "disconnected graph");
    }
}
