//! `blockbar` entry point

use std::process::ExitCode;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> ExitCode {
    // Logs go to stderr so the chart on stdout stays clean
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_env("BLOCKBAR_LOG"))
        .init();

    match blockbar::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
