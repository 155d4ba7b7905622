//! A module for working with weighted edges.

use std::fmt;

/// A weighted pair of node indices. Edges produced by this crate are always normalised so that
/// `source < target`, the `source`-`target` nomenclature doesn't imply a direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: i64,
}

impl Edge {
    /// Creates a new edge between two nodes.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::edge::Edge;
    ///
    /// let edge = Edge::new(0, 2, 7);
    /// assert_eq!(edge.weight(), 7);
    /// ```
    pub fn new(source: usize, target: usize, weight: i64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first node forming the edge.
    pub fn source(&self) -> usize {
        self.source
    }

    /// Returns the second node forming the edge.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the weight of the edge.
    pub fn weight(&self) -> i64 {
        self.weight
    }
}

/// Sums the weights of a collection of edges. The sum is widened to `i128` so that extreme weights
/// can't overflow.
///
/// # Examples
///
/// ```
/// use matrixgraph::edge::{total_weight, Edge};
///
/// assert_eq!(total_weight(&[Edge::new(0, 1, 2), Edge::new(1, 2, 5)]), 7);
/// assert_eq!(total_weight(&[]), 0);
/// ```
pub fn total_weight(edges: &[Edge]) -> i128 {
    edges.iter().map(|edge| i128::from(edge.weight)).sum()
}

//
// Trait implementations
//

impl From<(usize, usize, i64)> for Edge {
    fn from((source, target, weight): (usize, usize, i64)) -> Self {
        Self::new(source, target, weight)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.target, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new() {
        assert_eq!(
            Edge::new(1, 3, 4),
            Edge {
                source: 1,
                target: 3,
                weight: 4
            }
        )
    }

    #[test]
    fn accessors() {
        let edge = Edge::new(2, 5, 9);

        assert_eq!(edge.source(), 2);
        assert_eq!(edge.target(), 5);
        assert_eq!(edge.weight(), 9);
    }

    #[test]
    fn from_tuple() {
        assert_eq!(Edge::from((0, 1, 2)), Edge::new(0, 1, 2));
    }

    #[test]
    fn display() {
        assert_eq!(Edge::new(0, 2, 3).to_string(), "(0, 2, 3)");
    }

    #[test]
    fn total_weight_of_forest() {
        let edges = [Edge::new(0, 1, 1), Edge::new(2, 3, 4)];

        assert_eq!(total_weight(&edges), 5);
    }

    #[test]
    fn total_weight_of_extreme_weights() {
        let edges = [Edge::new(0, 1, i64::MAX), Edge::new(1, 2, i64::MAX)];

        assert_eq!(total_weight(&edges), 2 * i128::from(i64::MAX));
    }
}
