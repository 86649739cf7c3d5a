//! HyprTile command-line entry point.
//!
//! Logging goes to stderr and is controlled by `HYPRTILE_LOG` (an
//! `EnvFilter` directive, default `info`).

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "HYPRTILE_LOG";

fn main() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    if let Err(err) = hyprtile_lib::cli::run() {
        eprintln!("hyprtile: {err}");
        std::process::exit(1);
    }
}
