//! A module for computing minimum spanning trees (or forests) with Kruskal's algorithm.

use itertools::Itertools;
use tracing::debug;

use crate::{edge::Edge, matrix::AdjacencyMatrix};

/// A disjoint-set forest over the nodes `0..n`, with path compression and no ranking.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    /// Finds the root of the set containing `node`, compressing the path along the way.
    pub fn find(&mut self, node: usize) -> usize {
        let mut root = node;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Point every node on the path straight at the root.
        let mut current = node;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `u` and `v`, the root of `v`'s set is attached below the root
    /// of `u`'s set. Returns `false` if they already shared a set.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let root_u = self.find(u);
        let root_v = self.find(v);

        if root_u == root_v {
            return false;
        }

        self.parent[root_v] = root_u;
        true
    }

    /// Returns whether `u` and `v` are in the same set.
    pub fn same(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    /// Returns the number of disjoint sets.
    pub fn count_sets(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|(node, parent)| node == *parent)
            .count()
    }
}

impl AdjacencyMatrix {
    /// Computes a minimum spanning forest, treating the matrix as undirected.
    ///
    /// Every `i < j` with a non-zero `M[i][j]` is an edge weighing `M[i][j]`, the lower triangle is
    /// ignored. Edges are processed by ascending weight, ties keep their row-major order, and the
    /// accepted edges are returned in processing order. A disconnected graph yields a forest with
    /// `n - components` edges.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::{edge::Edge, matrix::AdjacencyMatrix};
    ///
    /// let matrix = AdjacencyMatrix::from_rows(&[
    ///     [0, 4, 1],
    ///     [4, 0, 2],
    ///     [1, 2, 0],
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(matrix.kruskal(), vec![Edge::new(0, 2, 1), Edge::new(1, 2, 2)]);
    /// ```
    pub fn kruskal(&self) -> Vec<Edge> {
        let mut edges: Vec<Edge> = self
            .nodes()
            .tuple_combinations()
            .filter(|&(i, j)| self[(i, j)] != 0)
            .map(|(i, j)| Edge::new(i, j, self[(i, j)]))
            .collect();

        // Stable, so equal weights stay in row-major order.
        edges.sort_by_key(Edge::weight);

        let mut sets = UnionFind::new(self.dimension());
        let tree: Vec<Edge> = edges
            .into_iter()
            .filter(|edge| {
                if sets.same(edge.source(), edge.target()) {
                    return false;
                }

                sets.union(edge.source(), edge.target());
                true
            })
            .collect();

        debug!(edges = tree.len(), "spanning forest built");
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::total_weight;

    fn matrix<const N: usize>(rows: [[i64; N]; N]) -> AdjacencyMatrix {
        AdjacencyMatrix::from_rows(&rows).unwrap()
    }

    #[test]
    fn union_find_new() {
        let mut sets = UnionFind::new(3);

        assert_eq!(sets.count_sets(), 3);
        assert!(!sets.same(0, 1));
        assert_eq!(sets.find(2), 2);
    }

    #[test]
    fn union_attaches_v_below_u() {
        let mut sets = UnionFind::new(3);

        assert!(sets.union(0, 1));
        assert_eq!(sets.parent, vec![0, 0, 2]);

        assert!(sets.union(2, 1));
        // The root of 1 (which is 0) is now below 2.
        assert_eq!(sets.parent, vec![2, 0, 2]);
        assert!(!sets.union(0, 2));
        assert_eq!(sets.count_sets(), 1);
    }

    #[test]
    fn find_compresses_paths() {
        let mut sets = UnionFind::new(4);
        sets.parent = vec![0, 0, 1, 2];

        assert_eq!(sets.find(3), 0);
        assert_eq!(sets.parent, vec![0, 0, 0, 0]);
    }

    #[test]
    fn kruskal_empty() {
        assert!(matrix([[0; 5]; 5]).kruskal().is_empty());
    }

    #[test]
    fn kruskal_weighted() {
        let m = matrix([
            [0, 2, 0, 6, 0],
            [2, 0, 3, 8, 5],
            [0, 3, 0, 0, 7],
            [6, 8, 0, 0, 9],
            [0, 5, 7, 9, 0],
        ]);
        let tree = m.kruskal();

        assert_eq!(
            tree,
            vec![
                Edge::new(0, 1, 2),
                Edge::new(1, 2, 3),
                Edge::new(1, 4, 5),
                Edge::new(0, 3, 6),
            ]
        );
        assert_eq!(total_weight(&tree), 16);
    }

    #[test]
    fn kruskal_ties_keep_row_major_order() {
        let m = matrix([[0, 1, 1, 1], [1, 0, 1, 1], [1, 1, 0, 1], [1, 1, 1, 0]]);

        assert_eq!(
            m.kruskal(),
            vec![Edge::new(0, 1, 1), Edge::new(0, 2, 1), Edge::new(0, 3, 1)]
        );
    }

    #[test]
    fn kruskal_forest() {
        let m = matrix([[0, 3, 0, 0], [3, 0, 0, 0], [0, 0, 0, 4], [0, 0, 4, 0]]);

        assert_eq!(m.kruskal(), vec![Edge::new(0, 1, 3), Edge::new(2, 3, 4)]);
    }

    #[test]
    fn kruskal_reads_upper_triangle_only() {
        // Only the lower triangle holds an edge.
        let m = matrix([[0, 0], [5, 0]]);

        assert!(m.kruskal().is_empty());
    }

    #[test]
    fn kruskal_counts_any_non_zero_weight() {
        // Negative and large weights are edges here, unlike for connectivity.
        let m = matrix([[0, -2, 9], [-2, 0, 0], [9, 0, 0]]);

        assert!(!m.is_connected());
        assert_eq!(m.kruskal(), vec![Edge::new(0, 1, -2), Edge::new(0, 2, 9)]);
    }
}
