//! The interactive shell: reads a matrix, then runs checks picked from a menu until the user exits.

use std::{
    fs::File,
    io::{BufRead, BufWriter, Write},
};

use itertools::Itertools;
use tracing::{info, warn};

use crate::{
    config::RenderConfig,
    error::{MatrixError, ShellError},
    matrix::AdjacencyMatrix,
    render::{DotRenderer, Renderer},
};

const MENU: &str = "\
Choose a check to run:
1. Directedness
2. Connectivity
3. Weightedness
4. Completeness
5. Complete subgraph
6. Cycles
7. Unicyclicity
8. Number of connected components
9. Classification
10. Visualisation
11. Minimum spanning tree (Kruskal)
0. Exit";

/// A line-based session over any input and output streams.
pub struct Shell<R, W> {
    input: R,
    output: W,
    render: RenderConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, render: RenderConfig) -> Self {
        Self {
            input,
            output,
            render,
        }
    }

    /// Consumes the shell, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs a full session.
    ///
    /// Invalid matrix input is reported and ends the session, a failed menu operation is reported
    /// and the menu is shown again. Only I/O failures on the shell's own streams are returned.
    pub fn run(&mut self) -> Result<(), ShellError> {
        info!("session started");

        let matrix = match self.read_matrix() {
            Ok(matrix) => matrix,
            Err(ShellError::Io(err)) => return Err(ShellError::Io(err)),
            Err(err) => {
                warn!(%err, "could not read matrix");
                writeln!(self.output, "Error: {err}.")?;
                return Ok(());
            }
        };

        loop {
            writeln!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("Enter the number of the check (0-11): ")? else {
                break;
            };

            if choice == "0" {
                break;
            }

            if let Err(err) = self.dispatch(&choice, &matrix) {
                match err {
                    ShellError::Io(err) if choice != "10" => return Err(ShellError::Io(err)),
                    err => {
                        warn!(%err, choice = choice.as_str(), "check failed");
                        writeln!(self.output, "Error: {err}.")?;
                    }
                }
            }
        }

        info!("session ended");
        Ok(())
    }

    /// Reads the dimension then one row per node.
    pub fn read_matrix(&mut self) -> Result<AdjacencyMatrix, ShellError> {
        let line = self
            .prompt("Enter the matrix dimension (n*n): ")?
            .ok_or(ShellError::UnexpectedEof)?;
        let n = AdjacencyMatrix::dimension_from(parse_integer(&line)?)?;

        let mut rows = Vec::with_capacity(n);
        for row in 0..n {
            let line = self
                .prompt(&format!("Enter row {}, separated by spaces: ", row + 1))?
                .ok_or(ShellError::UnexpectedEof)?;
            let entries: Vec<i64> = line
                .split_whitespace()
                .map(parse_integer::<i64>)
                .collect::<Result<_, _>>()?;

            if entries.len() != n {
                return Err(MatrixError::Shape {
                    row,
                    expected: n,
                    found: entries.len(),
                }
                .into());
            }

            rows.push(entries);
        }

        Ok(AdjacencyMatrix::from_rows(&rows)?)
    }

    //
    // Private
    //

    fn dispatch(&mut self, choice: &str, matrix: &AdjacencyMatrix) -> Result<(), ShellError> {
        match choice {
            "1" => {
                let message = if matrix.is_symmetric() {
                    "This is an undirected graph."
                } else {
                    "This is a directed graph."
                };
                writeln!(self.output, "{message}")?;
            }
            "2" => {
                let message = if matrix.is_connected() {
                    "The graph is connected."
                } else {
                    "The graph is disconnected."
                };
                writeln!(self.output, "{message}")?;
            }
            "3" => {
                let message = if matrix.is_weighted() {
                    "The graph is weighted."
                } else {
                    "The graph is not weighted."
                };
                writeln!(self.output, "{message}")?;
            }
            "4" => {
                let message = if matrix.is_complete() {
                    "The graph is complete."
                } else {
                    "The graph is not complete."
                };
                writeln!(self.output, "{message}")?;
            }
            "5" => {
                let line = self
                    .prompt("Enter k to check for a complete subgraph: ")?
                    .ok_or(ShellError::UnexpectedEof)?;
                let k: i64 = parse_integer(&line)?;

                // A negative k can't name a subgraph.
                let found = usize::try_from(k).is_ok_and(|k| matrix.has_complete_subgraph(k));
                if found {
                    writeln!(self.output, "There is a complete subgraph with {k} nodes.")?;
                } else {
                    writeln!(self.output, "There is no complete subgraph with {k} nodes.")?;
                }
            }
            "6" => {
                let message = if matrix.has_cycle() {
                    "The graph contains cycles."
                } else {
                    "The graph contains no cycles."
                };
                writeln!(self.output, "{message}")?;
            }
            "7" => {
                let message = if matrix.is_unicyclic() {
                    "The graph is unicyclic."
                } else {
                    "The graph is not unicyclic."
                };
                writeln!(self.output, "{message}")?;
            }
            "8" => {
                let components = matrix.count_connected_components();
                writeln!(self.output, "Number of connected components: {components}")?;
            }
            "9" => {
                writeln!(self.output, "Graph type: {}", matrix.classify())?;
            }
            "10" => self.visualise(matrix)?,
            "11" => {
                let tree = matrix.kruskal();
                writeln!(
                    self.output,
                    "Minimum spanning tree (Kruskal) edges: [{}]",
                    tree.iter().join(", ")
                )?;
            }
            _ => {
                warn!(choice, "unknown menu choice");
                writeln!(
                    self.output,
                    "Error: invalid choice, enter a number from 0 to 11."
                )?;
            }
        }

        Ok(())
    }

    fn visualise(&mut self, matrix: &AdjacencyMatrix) -> Result<(), ShellError> {
        let directed = !matrix.is_symmetric();

        match self.render.output.clone() {
            Some(path) => {
                let file = BufWriter::new(File::create(&path)?);
                DotRenderer::with_config(file, &self.render).render(matrix, directed)?;
                writeln!(self.output, "Graph written to {}.", path.display())?;
            }
            None => {
                DotRenderer::with_config(&mut self.output, &self.render).render(matrix, directed)?
            }
        }

        Ok(())
    }

    /// Writes `message` and reads the next line, `None` once the input is exhausted.
    fn prompt(&mut self, message: &str) -> Result<Option<String>, ShellError> {
        write!(self.output, "{message}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim().to_string()))
    }
}

fn parse_integer<T: std::str::FromStr>(input: &str) -> Result<T, ShellError> {
    input
        .trim()
        .parse()
        .map_err(|_| ShellError::InvalidInteger {
            input: input.trim().to_string(),
        })
}
