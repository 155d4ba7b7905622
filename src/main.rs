use std::{env, io, process::ExitCode};

use matrixgraph::{config::Config, logging::init_tracing, shell::Shell};
use tracing::error;

fn main() -> ExitCode {
    // The only argument is an optional path to a TOML config file.
    let config = match env::args().nth(1).map(Config::load).transpose() {
        Ok(config) => config.unwrap_or_default(),
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout().lock(), config.render);

    match shell.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "session aborted");
            ExitCode::FAILURE
        }
    }
}
