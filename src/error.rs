//! Error types.

use std::io;

/// Convenience alias for results of matrix construction.
pub type MatrixResult<T> = Result<T, MatrixError>;

/// Errors raised while validating an adjacency matrix.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatrixError {
    #[error("row {row} has {found} entries, expected exactly {expected}")]
    Shape {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("matrix dimension must be between 2 and 10, got {n}")]
    Range { n: i64 },
}

/// Errors raised by the interactive shell.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error(transparent)]
    Matrix(#[from] MatrixError),

    #[error("expected an integer, got {input:?}")]
    InvalidInteger { input: String },

    #[error("input ended before the matrix was read")]
    UnexpectedEof,

    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),
}

/// Errors raised while loading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}
