//! Diagnostics on stderr
//!
//! stdout carries the JSON protocol, so every log line goes to stderr.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Pick the default level from the verbosity flags
pub fn level_for(verbose: bool, quiet: bool) -> Level {
    if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

/// Initialize the global subscriber. `RUST_LOG` overrides the default level.
pub fn init_logging(verbose: bool, quiet: bool) {
    let env_filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose, quiet).into())
        .from_env_lossy();

    // A subscriber may already be installed (e.g. by a test harness)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .try_init();
}
