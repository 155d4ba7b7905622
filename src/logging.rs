//! Tracing initialisation.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding per-module log levels, e.g. `MATRIXGRAPH_LOG=matrixgraph=debug`.
pub const LOG_ENV: &str = "MATRIXGRAPH_LOG";

static INIT: Once = Once::new();

/// Installs the global subscriber, logging to stderr so prompts on stdout stay readable.
///
/// `MATRIXGRAPH_LOG` takes precedence over `default_filter`. Calling this more than once is a
/// no-op.
pub fn init_tracing(default_filter: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_new(default_filter))
            .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
            .with(filter)
            .init();
    });
}
