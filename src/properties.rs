//! Structural checks over an adjacency matrix.
//!
//! Two distinct notions of "edge" coexist in this crate:
//!
//! - the binary rule used here for connectivity, cycles, components and cliques: an edge exists
//!   from `i` to `j` iff `M[i][j] == 1` exactly, larger weights are not edges;
//! - the weighted rule used by [`kruskal`](AdjacencyMatrix::kruskal): any non-zero entry is an
//!   edge.

use itertools::Itertools;
use tracing::debug;

use crate::{matrix::AdjacencyMatrix, mst::UnionFind};

impl AdjacencyMatrix {
    /// Returns `true` if `M[i][j] == M[j][i]` for every pair, comparing the stored weights. A
    /// symmetric matrix is treated as an undirected graph.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::matrix::AdjacencyMatrix;
    ///
    /// let undirected = AdjacencyMatrix::from_rows(&[[0, 3], [3, 0]]).unwrap();
    /// let directed = AdjacencyMatrix::from_rows(&[[0, 3], [1, 0]]).unwrap();
    ///
    /// assert!(undirected.is_symmetric());
    /// assert!(!directed.is_symmetric());
    /// ```
    pub fn is_symmetric(&self) -> bool {
        let weights = self.as_dmatrix();

        weights == &weights.transpose()
    }

    /// Returns `true` if every node is reachable from node `0` following binary edges along rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::matrix::AdjacencyMatrix;
    ///
    /// let path = AdjacencyMatrix::from_rows(&[[0, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
    /// assert!(path.is_connected());
    ///
    /// // A weight of 2 isn't an edge as far as connectivity goes.
    /// let weighted = AdjacencyMatrix::from_rows(&[[0, 2], [2, 0]]).unwrap();
    /// assert!(!weighted.is_connected());
    /// ```
    pub fn is_connected(&self) -> bool {
        let mut visited = vec![false; self.dimension()];
        let order = self.depth_first(0, &mut visited);
        let connected = order.len() == self.dimension();

        debug!(connected, visited = order.len(), "connectivity check");
        connected
    }

    /// Returns `true` if any entry, diagonal included, is greater than `1`.
    pub fn is_weighted(&self) -> bool {
        self.as_dmatrix().iter().any(|&weight| weight > 1)
    }

    /// Returns `true` if `M[i][j] == 1` for every `i < j`. Only the upper triangle is inspected,
    /// so an asymmetric matrix can still be complete.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::matrix::AdjacencyMatrix;
    ///
    /// let triangle = AdjacencyMatrix::from_rows(&[[0, 1, 1], [1, 0, 1], [1, 1, 0]]).unwrap();
    /// assert!(triangle.is_complete());
    ///
    /// let upper_only = AdjacencyMatrix::from_rows(&[[0, 1, 1], [0, 0, 1], [0, 0, 0]]).unwrap();
    /// assert!(upper_only.is_complete());
    /// ```
    pub fn is_complete(&self) -> bool {
        self.nodes()
            .tuple_combinations()
            .all(|(i, j)| self.is_binary_edge(i, j))
    }

    /// Returns `true` if some set of `k` nodes is pairwise connected in the undirected graph built
    /// from binary edges `i < j`.
    ///
    /// Every subset of size `k` is enumerated. A `k` larger than the node count yields `false`,
    /// while `k <= 1` is vacuously `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::matrix::AdjacencyMatrix;
    ///
    /// let matrix = AdjacencyMatrix::from_rows(&[
    ///     [0, 1, 1, 0],
    ///     [1, 0, 1, 0],
    ///     [1, 1, 0, 1],
    ///     [0, 0, 1, 0],
    /// ])
    /// .unwrap();
    ///
    /// assert!(matrix.has_complete_subgraph(3));
    /// assert!(!matrix.has_complete_subgraph(4));
    /// assert!(!matrix.has_complete_subgraph(5));
    /// ```
    pub fn has_complete_subgraph(&self, k: usize) -> bool {
        if k > self.dimension() {
            return false;
        }

        if k <= 1 {
            return true;
        }

        // Combinations are emitted in ascending order, so every pair below satisfies `i < j`.
        let found = self.nodes().combinations(k).any(|subset| {
            subset
                .iter()
                .tuple_combinations()
                .all(|(&i, &j)| self.is_binary_edge(i, j))
        });

        debug!(k, found, "complete subgraph check");
        found
    }

    /// Returns `true` if a depth-first search over binary edges meets an already visited node
    /// that isn't the node it came from.
    ///
    /// Every component is searched, nodes in ascending order. A binary self-loop counts as a
    /// cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::matrix::AdjacencyMatrix;
    ///
    /// let triangle = AdjacencyMatrix::from_rows(&[[0, 1, 1], [1, 0, 1], [1, 1, 0]]).unwrap();
    /// let path = AdjacencyMatrix::from_rows(&[[0, 1, 0], [1, 0, 1], [0, 1, 0]]).unwrap();
    ///
    /// assert!(triangle.has_cycle());
    /// assert!(!path.has_cycle());
    /// ```
    pub fn has_cycle(&self) -> bool {
        let n = self.dimension();
        let mut visited = vec![false; n];

        for root in self.nodes() {
            if visited[root] {
                continue;
            }

            if self.back_edge_from(root, &mut visited) {
                debug!(root, "cycle found");
                return true;
            }
        }

        false
    }

    /// Reports whether the graph contains a cycle.
    ///
    /// This answers the same question as [`has_cycle`](Self::has_cycle): any cycle at all, not
    /// "exactly one cycle". See [`has_single_cycle`](Self::has_single_cycle) for the stricter
    /// check.
    pub fn is_unicyclic(&self) -> bool {
        self.has_cycle()
    }

    /// Returns `true` if the undirected graph built from binary edges `i < j` is connected and has
    /// exactly as many edges as nodes, i.e. it contains exactly one cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::matrix::AdjacencyMatrix;
    ///
    /// // A triangle with a pendant node.
    /// let matrix = AdjacencyMatrix::from_rows(&[
    ///     [0, 1, 1, 0],
    ///     [1, 0, 1, 0],
    ///     [1, 1, 0, 1],
    ///     [0, 0, 1, 0],
    /// ])
    /// .unwrap();
    /// assert!(matrix.has_single_cycle());
    ///
    /// // K4 has more than one cycle.
    /// let complete = AdjacencyMatrix::from_rows(&[
    ///     [0, 1, 1, 1],
    ///     [1, 0, 1, 1],
    ///     [1, 1, 0, 1],
    ///     [1, 1, 1, 0],
    /// ])
    /// .unwrap();
    /// assert!(!complete.has_single_cycle());
    /// ```
    pub fn has_single_cycle(&self) -> bool {
        let n = self.dimension();
        let mut sets = UnionFind::new(n);
        let mut edge_count = 0;

        for (i, j) in self.nodes().tuple_combinations() {
            if self.is_binary_edge(i, j) {
                edge_count += 1;
                sets.union(i, j);
            }
        }

        sets.count_sets() == 1 && edge_count == n
    }

    /// Returns the number of components found by repeatedly searching from the lowest unvisited
    /// node, following binary edges along rows as [`is_connected`](Self::is_connected) does.
    ///
    /// # Examples
    ///
    /// ```
    /// use matrixgraph::matrix::AdjacencyMatrix;
    ///
    /// let matrix = AdjacencyMatrix::from_rows(&[
    ///     [0, 1, 0, 0],
    ///     [1, 0, 0, 0],
    ///     [0, 0, 0, 1],
    ///     [0, 0, 1, 0],
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(matrix.count_connected_components(), 2);
    /// ```
    pub fn count_connected_components(&self) -> usize {
        let mut visited = vec![false; self.dimension()];
        let mut components = 0;

        for root in self.nodes() {
            if !visited[root] {
                self.depth_first(root, &mut visited);
                components += 1;
            }
        }

        debug!(components, "component count");
        components
    }

    //
    // Private
    //

    /// The binary edge rule: only the literal value `1` denotes an edge.
    fn is_binary_edge(&self, i: usize, j: usize) -> bool {
        self[(i, j)] == 1
    }

    /// Visits every node reachable from `start` that isn't yet marked in `visited`, marking them
    /// and returning them in visiting order. Neighbours are explored lowest index first.
    pub(crate) fn depth_first(&self, start: usize, visited: &mut [bool]) -> Vec<usize> {
        let mut order = Vec::new();
        let mut stack = vec![start];

        while let Some(node) = stack.pop() {
            if visited[node] {
                continue;
            }

            visited[node] = true;
            order.push(node);

            // Pushed in reverse so the lowest index is popped first.
            for neighbour in self.nodes().rev() {
                if self.is_binary_edge(node, neighbour) && !visited[neighbour] {
                    stack.push(neighbour);
                }
            }
        }

        order
    }

    /// Searches from `root`, returning `true` as soon as a visited neighbour other than the
    /// current node's parent is met.
    ///
    /// Each stack frame holds the node, its parent and the next neighbour to scan, which mirrors
    /// a recursive search exactly.
    fn back_edge_from(&self, root: usize, visited: &mut [bool]) -> bool {
        let n = self.dimension();
        let mut stack: Vec<(usize, Option<usize>, usize)> = vec![(root, None, 0)];
        visited[root] = true;

        while let Some(frame) = stack.last_mut() {
            let (node, parent, next) = *frame;

            let Some(neighbour) = (next..n).find(|&j| self.is_binary_edge(node, j)) else {
                stack.pop();
                continue;
            };

            frame.2 = neighbour + 1;

            if !visited[neighbour] {
                visited[neighbour] = true;
                stack.push((neighbour, Some(node), 0));
            } else if parent != Some(neighbour) {
                return true;
            }
        }

        false
    }
}
