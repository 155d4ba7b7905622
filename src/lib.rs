//! Matrixgraph is a small toolkit for analysing graphs of 2 to 10 nodes given as dense adjacency
//! matrices.
//!
//! # Basic usage
//!
//! The library is centered around the [`AdjacencyMatrix`](matrix::AdjacencyMatrix) structure
//! which is validated on construction. Once constructed, the structural checks, the classifier and
//! the minimum spanning tree builder are all methods on the matrix.
//!
//! ```rust
//! use matrixgraph::{classify::GraphClass, edge::Edge, matrix::AdjacencyMatrix};
//!
//! // A triangle (0, 1, 2) with node 3 hanging off node 2.
//! let matrix = AdjacencyMatrix::from_rows(&[
//!     [0, 1, 1, 0],
//!     [1, 0, 1, 0],
//!     [1, 1, 0, 1],
//!     [0, 0, 1, 0],
//! ])
//! .unwrap();
//!
//! assert!(matrix.is_symmetric());
//! assert!(matrix.is_connected());
//! assert!(matrix.has_cycle());
//! assert_eq!(matrix.count_connected_components(), 1);
//! assert_eq!(matrix.classify(), GraphClass::Connected);
//!
//! assert_eq!(
//!     matrix.kruskal(),
//!     vec![Edge::new(0, 1, 1), Edge::new(0, 2, 1), Edge::new(2, 3, 1)]
//! );
//!
//! // Matrices can be pretty printed...
//! println!("{matrix}");
//! // ...outputs:
//! //  ┌         ┐
//! //  │ 0 1 1 0 │
//! //  │ 1 0 1 0 │
//! //  │ 1 1 0 1 │
//! //  │ 0 0 1 0 │
//! //  └         ┘
//! ```
//!
//! Note the two notions of an edge: connectivity, cycles, components, cliques and rendering only
//! consider entries equal to `1`, while [`kruskal`](matrix::AdjacencyMatrix::kruskal) takes any
//! non-zero entry as a weighted edge.

pub mod classify;
pub mod config;
pub mod edge;
pub mod error;
pub mod logging;
pub mod matrix;
pub mod mst;
mod properties;
pub mod render;
pub mod shell;
