//! Tracing initialization shared by every binary.

use tracing_subscriber::EnvFilter;

/// Initialize structured logging to stderr.
///
/// Quiet mode (the default for the CLI) only surfaces errors; `--verbose`
/// lifts the floor to `info`. `RUST_LOG` overrides both.
pub fn init_logging(quiet: bool) {
    let default_level = if quiet { "error" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
