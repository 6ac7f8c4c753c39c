//! Tracing subscriber setup for the `zipcode` binary.
//!
//! Diagnostics go to stderr so stdout stays clean for results. `RUST_LOG`
//! overrides the level chosen from the flags.
use tracing_subscriber::EnvFilter;

/// Returns the default filter directive for the given flags.
pub fn default_directive(verbose: bool, quiet: bool) -> &'static str {
    if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    }
}

/// Installs the global subscriber. Call once, before any command runs.
pub fn init(verbose: bool, quiet: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
