//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `SUBPLAY_LOG=debug`.
pub const LOG_ENV: &str = "SUBPLAY_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Install the global stderr subscriber.
///
/// Must not be called for the terminal explorer, which owns the screen.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
