//! Configuration, loaded from a TOML file.
//!
//! Every field has a default, so an empty file (or no file at all) is a valid configuration:
//!
//! ```toml
//! log_filter = "matrixgraph=debug"
//!
//! [render]
//! node_prefix = "v"
//! output = "graph.dot"
//! highlight_spanning_tree = true
//! ```

use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

/// The default `tracing` filter, quiet enough not to interleave with prompts.
pub const DEFAULT_LOG_FILTER: &str = "matrixgraph=warn";
/// The default prefix of rendered node names.
pub const DEFAULT_NODE_PREFIX: &str = "n";

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Filter directives used when `MATRIXGRAPH_LOG` isn't set.
    pub log_filter: String,
    /// Renderer settings.
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            render: RenderConfig::default(),
        }
    }
}

/// Renderer settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Prefix of a node name.
    pub node_prefix: String,
    /// File the DOT output is written to, the shell's output stream when unset.
    pub output: Option<PathBuf>,
    /// Also draw the minimum spanning forest in red.
    pub highlight_spanning_tree: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            node_prefix: DEFAULT_NODE_PREFIX.to_string(),
            output: None,
            highlight_spanning_tree: false,
        }
    }
}

impl Config {
    /// Parses a configuration from TOML source.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let source = fs::read_to_string(path)?;
        Self::from_toml(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_source_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn partial_render_table() {
        let config = Config::from_toml("[render]\nhighlight_spanning_tree = true\n").unwrap();

        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.render.node_prefix, DEFAULT_NODE_PREFIX);
        assert!(config.render.highlight_spanning_tree);
        assert_eq!(config.render.output, None);
    }

    #[test]
    fn full_source() {
        let source = r#"
            log_filter = "matrixgraph=debug"

            [render]
            node_prefix = "v"
            output = "graph.dot"
        "#;
        let config = Config::from_toml(source).unwrap();

        assert_eq!(config.log_filter, "matrixgraph=debug");
        assert_eq!(config.render.node_prefix, "v");
        assert_eq!(config.render.output, Some(PathBuf::from("graph.dot")));
    }

    #[test]
    fn invalid_source() {
        assert!(matches!(
            Config::from_toml("log_filter = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Config::load("/nonexistent/matrixgraph.toml"),
            Err(ConfigError::Io(_))
        ));
    }
}
