//! Tracing setup shared by both binaries.

use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the tracing subscriber for logging.
///
/// `RUST_LOG` takes precedence; otherwise only warnings are shown, or
/// debug output when `verbose` is set. Logs go to stderr.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}
