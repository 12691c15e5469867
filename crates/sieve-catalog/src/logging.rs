//! Diagnostic logging for the `sieve` binary.
//!
//! Events go to stderr so they never mix with command output. The level
//! comes from `-v` when given, then from `SIEVE_LOG`, and defaults to `warn`.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SIEVE_LOG";

/// Installs the global subscriber.
///
/// ```bash
/// SIEVE_LOG=sieve_spec=debug sieve filter --color black
/// ```
pub fn init(verbose: u8) {
    tracing_subscriber::registry()
        .with(filter(verbose))
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

fn filter(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    }
}
