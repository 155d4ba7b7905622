//! Rendering graphs for visualisation.
//!
//! The [`Renderer`] trait is the seam the shell draws through. [`DotRenderer`] emits the
//! [Graphviz](https://graphviz.org/) DOT format, which can be piped to `dot -Tpng` or any other
//! DOT viewer:
//!
//! ```
//! use matrixgraph::{matrix::AdjacencyMatrix, render::{DotRenderer, Renderer}};
//!
//! let matrix = AdjacencyMatrix::from_rows(&[[0, 1], [1, 0]]).unwrap();
//! let mut renderer = DotRenderer::new(Vec::new());
//! renderer.render(&matrix, false).unwrap();
//!
//! let dot = String::from_utf8(renderer.into_inner()).unwrap();
//! assert_eq!(dot, "graph {\n  n0;\n  n1;\n  n0 -- n1;\n}\n");
//! ```

use std::io::{self, Write};

use itertools::Itertools;
use tracing::debug;

use crate::{config::RenderConfig, matrix::AdjacencyMatrix};

/// Draws a graph given its adjacency matrix.
pub trait Renderer {
    /// Draws nodes `0..n` and every binary edge (`M[i][j] == 1`). Directed graphs draw each
    /// ordered pair as an arrow, undirected graphs draw each `i < j` pair once.
    fn render(&mut self, matrix: &AdjacencyMatrix, directed: bool) -> io::Result<()>;
}

/// Writes graphs in the DOT format.
#[derive(Debug)]
pub struct DotRenderer<W> {
    writer: W,
    /// Prefix of a node name (default: `n`).
    node_prefix: String,
    /// Also draw the minimum spanning forest in red.
    highlight_spanning_tree: bool,
}

impl<W: Write> DotRenderer<W> {
    /// Creates a renderer with the default settings.
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, &RenderConfig::default())
    }

    /// Creates a renderer with the supplied settings.
    pub fn with_config(writer: W, config: &RenderConfig) -> Self {
        Self {
            writer,
            node_prefix: config.node_prefix.clone(),
            highlight_spanning_tree: config.highlight_spanning_tree,
        }
    }

    /// Consumes the renderer, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn node(&self, u: usize) -> String {
        format!("{}{u}", self.node_prefix)
    }
}

impl<W: Write> Renderer for DotRenderer<W> {
    fn render(&mut self, matrix: &AdjacencyMatrix, directed: bool) -> io::Result<()> {
        let (graph_kind, edge_op) = if directed {
            ("digraph", "->")
        } else {
            ("graph", "--")
        };

        let n = matrix.dimension();
        let edges: Vec<(usize, usize)> = if directed {
            (0..n)
                .cartesian_product(0..n)
                .filter(|&(i, j)| matrix[(i, j)] == 1)
                .collect()
        } else {
            (0..n)
                .tuple_combinations()
                .filter(|&(i, j)| matrix[(i, j)] == 1)
                .collect()
        };

        writeln!(self.writer, "{graph_kind} {{")?;

        for u in 0..n {
            writeln!(self.writer, "  {};", self.node(u))?;
        }

        for (u, v) in &edges {
            writeln!(self.writer, "  {} {edge_op} {};", self.node(*u), self.node(*v))?;
        }

        if self.highlight_spanning_tree {
            // Each colored edge is drawn in addition to the plain one.
            for edge in matrix.kruskal() {
                writeln!(
                    self.writer,
                    "  {} {edge_op} {} [color=red, label={}];",
                    self.node(edge.source()),
                    self.node(edge.target()),
                    edge.weight()
                )?;
            }
        }

        writeln!(self.writer, "}}")?;
        self.writer.flush()?;

        debug!(directed, edges = edges.len(), "rendered graph");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(rows: &[[i64; 3]], directed: bool, config: &RenderConfig) -> String {
        let matrix = AdjacencyMatrix::from_rows(rows).unwrap();
        let mut renderer = DotRenderer::with_config(Vec::new(), config);
        renderer.render(&matrix, directed).unwrap();

        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn undirected() {
        let dot = render(
            &[[0, 1, 2], [1, 0, 1], [2, 1, 0]],
            false,
            &RenderConfig::default(),
        );

        assert_eq!(
            dot,
            "graph {\n  n0;\n  n1;\n  n2;\n  n0 -- n1;\n  n1 -- n2;\n}\n"
        );
    }

    #[test]
    fn directed() {
        let dot = render(
            &[[0, 1, 0], [0, 0, 1], [1, 0, 0]],
            true,
            &RenderConfig::default(),
        );

        assert_eq!(
            dot,
            "digraph {\n  n0;\n  n1;\n  n2;\n  n0 -> n1;\n  n1 -> n2;\n  n2 -> n0;\n}\n"
        );
    }

    #[test]
    fn prefix_and_highlight() {
        let config = RenderConfig {
            node_prefix: "v".to_string(),
            highlight_spanning_tree: true,
            ..Default::default()
        };
        let dot = render(&[[0, 1, 0], [1, 0, 0], [0, 0, 0]], false, &config);

        assert_eq!(
            dot,
            "graph {\n  v0;\n  v1;\n  v2;\n  v0 -- v1;\n  v0 -- v1 [color=red, label=1];\n}\n"
        );
    }
}
