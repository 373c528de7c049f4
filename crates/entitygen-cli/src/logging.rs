//! Tracing subscriber setup for the command line tool

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Map the `-v` count to a default level
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Initialize logging to stderr.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Call this once at
/// startup; a subscriber that is already installed is left in place.
pub fn init(verbose: u8) {
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose).to_string()));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    // Try to set as global default (ignore error if already set)
    let _ = tracing::subscriber::set_global_default(subscriber);
}
